//! Built-in word table
//!
//! Each built-in is a plain function over the interpreter state. Words
//! check the operand count before popping anything, so an underflow leaves
//! the stack untouched; a type mismatch is reported after the operands
//! were popped.

mod arithmetic;
mod control;
mod dictionary;
mod stack;
mod vector;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::frontend::lexer::Token;
use crate::runtime::errors::{RuntimeError, RuntimeResult};
use crate::runtime::interpreter::Interpreter;
use crate::runtime::rational::Rational;
use crate::runtime::value::Value;

pub use dictionary::is_valid_word_name;

/// A primitive word
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    /// Forth-style stack effect, e.g. `( a b -- b a )`
    pub effect: &'static str,
    pub description: &'static str,
    pub run: fn(&mut Interpreter) -> RuntimeResult<()>,
}

static BUILTINS: Lazy<IndexMap<&'static str, Builtin>> = Lazy::new(|| {
    stack::WORDS
        .iter()
        .chain(arithmetic::WORDS)
        .chain(control::WORDS)
        .chain(dictionary::WORDS)
        .chain(vector::WORDS)
        .map(|builtin| (builtin.name, *builtin))
        .collect()
});

/// Look up a built-in by name
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.get(name)
}

/// Built-in names in table order
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.keys().copied()
}

/// All built-ins in table order
pub fn all() -> impl Iterator<Item = &'static Builtin> {
    BUILTINS.values()
}

// ---- operand coercions ----

fn expect_vector(
    word: &'static str,
    value: Value,
) -> RuntimeResult<Vec<Token>> {
    match value {
        Value::Vector(items) => Ok(items),
        other => Err(RuntimeError::type_error(word, "vector", other.type_name())),
    }
}

fn expect_string(
    word: &'static str,
    value: Value,
) -> RuntimeResult<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(RuntimeError::type_error(word, "string", other.type_name())),
    }
}

fn expect_boolean(
    word: &'static str,
    value: Value,
) -> RuntimeResult<bool> {
    match value {
        Value::Boolean(b) => Ok(b),
        other => Err(RuntimeError::type_error(word, "boolean", other.type_name())),
    }
}

/// Pop `b` then `a` (so `a` was pushed first); both must be numbers
fn pop_number_pair(
    interp: &mut Interpreter,
    word: &'static str,
) -> RuntimeResult<(Rational, Rational)> {
    interp.require(word, 2)?;
    let b = interp.pop(word)?;
    let a = interp.pop(word)?;
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => Ok((a, b)),
        (a, b) => Err(RuntimeError::type_error(
            word,
            "number",
            format!("{} and {}", a.type_name(), b.type_name()),
        )),
    }
}
