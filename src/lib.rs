//! Chroma Programming Language
//!
//! A small stack language whose literals are typed by color: green text is
//! a number, cyan a boolean, blue a string, red a word to run, purple a
//! vector, orange `NIL`, and yellow a comment. Numbers are exact
//! fractions.
//!
//! # Example
//!
//! ```
//! use chroma::Interpreter;
//!
//! let mut session = Interpreter::new();
//! assert_eq!(session.execute("1/3 1/6 +"), "1/2");
//! assert_eq!(session.execute("<green>3 4</green> <red>*</red>"), "12");
//! ```

#![warn(rust_2018_idioms)]

pub mod backends;
pub mod error;
pub mod frontend;
pub mod runtime;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use error::Error;
pub use frontend::{Color, ColoredRun, Token};
pub use runtime::{Interpreter, Rational, Value};

use std::fs;
use std::path::Path;

use tracing::debug;

/// Language version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "Chroma";

/// Evaluate `source` in a fresh session and render the result
///
/// Never fails: errors come back as `Error: …` text.
pub fn execute(source: &str) -> String {
    Interpreter::new().execute(source)
}

/// Evaluate `source` in a fresh session, failing on the first error
///
/// # Example
///
/// ```
/// fn main() -> chroma::Result<()> {
///     let output = chroma::run("[ DUP * ] \"SQUARE\" DEF 5 SQUARE")?;
///     assert_eq!(output, "25");
///     Ok(())
/// }
/// ```
pub fn run(source: &str) -> Result<String> {
    debug!("run called");
    let mut session = Interpreter::new();
    let output = session.try_execute(source)?;
    Ok(output)
}

/// Evaluate a source file as one program
pub fn run_file(path: &Path) -> Result<String> {
    debug!("reading {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    run(&source).with_context(|| format!("Failed to evaluate: {}", path.display()))
}
