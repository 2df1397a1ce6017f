//! Runtime errors

use thiserror::Error;

use crate::runtime::rational::ArithmeticError;

/// Runtime result
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors raised while evaluating tokens
///
/// Every error propagates straight up to `Interpreter::execute`; nothing
/// inside the evaluator catches or retries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error("Stack underflow in {0}")]
    StackUnderflow(&'static str),

    #[error("Type error in {word}: expected {expected}, got {got}")]
    TypeError {
        word: &'static str,
        expected: &'static str,
        got: String,
    },

    #[error("Register is empty in {0}")]
    EmptyRegister(&'static str),

    #[error("{0} of empty vector")]
    EmptyVector(&'static str),

    #[error("Unknown word: \"{0}\"")]
    UnknownWord(String),

    #[error("Word not found: \"{0}\"")]
    WordNotFound(String),

    #[error("Invalid word name: \"{0}\". English symbols must be uppercase.")]
    InvalidWordName(String),

    #[error("Recursion limit of {limit} nested calls exceeded")]
    RecursionLimitExceeded { limit: usize },

    #[error("Step limit of {limit} evaluated tokens exceeded")]
    StepLimitExceeded { limit: u64 },

    #[error("Vector nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl RuntimeError {
    pub(crate) fn type_error(
        word: &'static str,
        expected: &'static str,
        got: impl Into<String>,
    ) -> Self {
        RuntimeError::TypeError {
            word,
            expected,
            got: got.into(),
        }
    }
}
