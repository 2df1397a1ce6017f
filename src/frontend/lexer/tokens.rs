//! Token types

use std::fmt;

use serde::Serialize;

use crate::runtime::rational::Rational;

/// A typed token produced by the lexer
///
/// Vector tokens keep their children unevaluated; the runtime only walks
/// them when a vector is called or taken as an `IF` branch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Token {
    Number(Rational),
    Boolean(bool),
    String(String),
    /// A word to execute
    Symbol(String),
    Vector(Vec<Token>),
    Nil,
}

impl Token {
    /// Lowercase type name used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Token::Number(_) => "number",
            Token::Boolean(_) => "boolean",
            Token::String(_) => "string",
            Token::Symbol(_) => "symbol",
            Token::Vector(_) => "vector",
            Token::Nil => "nil",
        }
    }

    /// Bracket depth; scalars are 0
    pub fn nesting(&self) -> usize {
        match self {
            Token::Vector(items) => vector_nesting(items),
            _ => 0,
        }
    }
}

/// Bracket depth of a vector holding `items`: `[ ]` is 1, `[ [ 1 ] ]` is 2
///
/// Walks the tree with an explicit work list, so measuring never recurses.
pub fn vector_nesting(items: &[Token]) -> usize {
    let mut deepest = 1;
    let mut pending: Vec<(&Token, usize)> = items.iter().map(|item| (item, 1)).collect();
    while let Some((token, depth)) = pending.pop() {
        if let Token::Vector(children) = token {
            deepest = deepest.max(depth + 1);
            pending.extend(children.iter().map(|child| (child, depth + 1)));
        }
    }
    deepest
}

/// Format a sequence of displayable items as `[ a b c ]`
pub(crate) fn write_vector<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
) -> fmt::Result {
    f.write_str("[ ")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str(" ]")
}

impl fmt::Display for Token {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Token::String(s) | Token::Symbol(s) => f.write_str(s),
            Token::Vector(items) => write_vector(f, items),
            Token::Nil => f.write_str("nil"),
        }
    }
}
