//! Interactive front ends for the interpreter
//!
//! - [`repl`]: line-based REPL with history and word completion

pub mod repl;
