//! Vector operations

use super::{expect_vector, Builtin};
use crate::frontend::lexer::tokens::vector_nesting;
use crate::frontend::lexer::Token;
use crate::runtime::errors::{RuntimeError, RuntimeResult};
use crate::runtime::interpreter::Interpreter;
use crate::runtime::rational::Rational;
use crate::runtime::value::Value;

pub(super) const WORDS: &[Builtin] = &[
    Builtin {
        name: "CONS",
        effect: "( a [v] -- [a v] )",
        description: "Prepend a value to a vector",
        run: cons,
    },
    Builtin {
        name: "HEAD",
        effect: "( [a v] -- a )",
        description: "First element of a vector",
        run: head,
    },
    Builtin {
        name: "TAIL",
        effect: "( [a v] -- [v] )",
        description: "All but the first element",
        run: tail,
    },
    Builtin {
        name: "LENGTH",
        effect: "( [v] -- n )",
        description: "Number of elements",
        run: length,
    },
    Builtin {
        name: "REVERSE",
        effect: "( [v] -- [v'] )",
        description: "Elements in reverse order",
        run: reverse,
    },
];

fn cons(interp: &mut Interpreter) -> RuntimeResult<()> {
    interp.require("CONS", 2)?;
    let mut items = expect_vector("CONS", interp.pop("CONS")?)?;
    let element = interp.pop("CONS")?;
    items.insert(0, Token::from(element));
    interp.check_nesting(vector_nesting(&items))?;
    interp.push(Value::Vector(items));
    Ok(())
}

fn head(interp: &mut Interpreter) -> RuntimeResult<()> {
    let items = expect_vector("HEAD", interp.pop("HEAD")?)?;
    let first = items
        .into_iter()
        .next()
        .ok_or(RuntimeError::EmptyVector("HEAD"))?;
    interp.push(Value::from(first));
    Ok(())
}

fn tail(interp: &mut Interpreter) -> RuntimeResult<()> {
    let mut items = expect_vector("TAIL", interp.pop("TAIL")?)?;
    if items.is_empty() {
        return Err(RuntimeError::EmptyVector("TAIL"));
    }
    items.remove(0);
    interp.push(Value::Vector(items));
    Ok(())
}

fn length(interp: &mut Interpreter) -> RuntimeResult<()> {
    let items = expect_vector("LENGTH", interp.pop("LENGTH")?)?;
    interp.push(Rational::from(items.len()));
    Ok(())
}

fn reverse(interp: &mut Interpreter) -> RuntimeResult<()> {
    let mut items = expect_vector("REVERSE", interp.pop("REVERSE")?)?;
    items.reverse();
    interp.push(Value::Vector(items));
    Ok(())
}
