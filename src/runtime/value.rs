//! Runtime values
//!
//! A [`Value`] is what lives on the stack and in the register. It mirrors
//! [`Token`] variant for variant, but the two are kept apart: a
//! `Token::Symbol` runs a word when dispatched, while a `Value::Symbol` is
//! inert data (for example the result of `HEAD` on `[ DUP ]`).

use std::fmt;

use serde::Serialize;

use crate::frontend::lexer::tokens::{write_vector, Token};
use crate::runtime::rational::Rational;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    Number(Rational),
    Boolean(bool),
    String(String),
    Symbol(String),
    /// Unevaluated vector body
    Vector(Vec<Token>),
    Nil,
}

impl Value {
    /// Lowercase type name used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Vector(_) => "vector",
            Value::Nil => "nil",
        }
    }

    /// Equal variants compare by value; numbers compare exactly and
    /// vectors element by element. `None` when the types differ.
    pub fn same_type_eq(
        &self,
        other: &Self,
    ) -> Option<bool> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Some(a == b),
            (Value::Boolean(a), Value::Boolean(b)) => Some(a == b),
            (Value::String(a), Value::String(b)) => Some(a == b),
            (Value::Symbol(a), Value::Symbol(b)) => Some(a == b),
            (Value::Vector(a), Value::Vector(b)) => Some(a == b),
            (Value::Nil, Value::Nil) => Some(true),
            _ => None,
        }
    }
}

impl From<Token> for Value {
    fn from(token: Token) -> Self {
        match token {
            Token::Number(n) => Value::Number(n),
            Token::Boolean(b) => Value::Boolean(b),
            Token::String(s) => Value::String(s),
            Token::Symbol(s) => Value::Symbol(s),
            Token::Vector(items) => Value::Vector(items),
            Token::Nil => Value::Nil,
        }
    }
}

impl From<Value> for Token {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => Token::Number(n),
            Value::Boolean(b) => Token::Boolean(b),
            Value::String(s) => Token::String(s),
            Value::Symbol(s) => Token::Symbol(s),
            Value::Vector(items) => Token::Vector(items),
            Value::Nil => Token::Nil,
        }
    }
}

impl From<Rational> for Value {
    fn from(n: Rational) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl fmt::Display for Value {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::String(s) | Value::Symbol(s) => f.write_str(s),
            Value::Vector(items) => write_vector(f, items),
            Value::Nil => f.write_str("nil"),
        }
    }
}
