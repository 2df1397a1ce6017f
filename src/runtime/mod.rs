//! Runtime system
//!
//! This module contains the exact rational number type, runtime values,
//! the built-in word table and the stack interpreter. Nothing here knows
//! about colors; the runtime works on typed tokens only.

pub mod builtins;
pub mod errors;
pub mod interpreter;
pub mod rational;
pub mod value;

pub use errors::{RuntimeError, RuntimeResult};
pub use interpreter::{Interpreter, Snapshot};
pub use rational::{ArithmeticError, Rational, Reduce};
pub use value::Value;

#[cfg(test)]
mod tests;
