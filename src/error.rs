//! Crate-level error type

use thiserror::Error;

use crate::frontend::lexer::LexError;
use crate::runtime::errors::RuntimeError;

/// Anything `execute` can fail with
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
