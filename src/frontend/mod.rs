//! Frontend
//!
//! This module contains the color markup reader and the lexer. The
//! frontend is the only place that knows about colors: it turns annotated
//! text into typed tokens for the runtime.

pub mod lexer;
pub mod markup;

pub use lexer::{
    tokenize, tokenize_str, tokenize_str_with_nesting, tokenize_with_nesting, LexError, Token,
    DEFAULT_MAX_NESTING,
};
pub use markup::{parse_markup, Color, ColoredRun, SemanticType};
