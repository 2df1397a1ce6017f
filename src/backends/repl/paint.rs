//! Colored echo of evaluation results
//!
//! Each stack value is printed in the color that would have produced it on
//! the editing surface, so the output reads like the input.

use owo_colors::OwoColorize;

use crate::frontend::markup::Color;
use crate::runtime::{Interpreter, Value};

/// Color a value was typed with
pub fn value_color(value: &Value) -> Color {
    match value {
        Value::Number(_) => Color::Green,
        Value::Boolean(_) => Color::Cyan,
        Value::String(_) => Color::Blue,
        Value::Symbol(_) => Color::Red,
        Value::Vector(_) => Color::Purple,
        Value::Nil => Color::Orange,
    }
}

pub fn paint(
    text: &str,
    color: Color,
) -> String {
    let (r, g, b) = color.rgb();
    text.truecolor(r, g, b).to_string()
}

/// Evaluate one REPL line and format the outcome
pub fn evaluate_line(
    interp: &mut Interpreter,
    line: &str,
    colors: bool,
) -> String {
    match interp.try_execute(line) {
        Ok(output) if !colors || interp.stack.is_empty() => output,
        Ok(_) => interp
            .stack
            .iter()
            .map(|value| paint(&value.to_string(), value_color(value)))
            .collect::<Vec<_>>()
            .join("\n"),
        Err(e) if colors => paint(&format!("Error: {}", e), Color::Red),
        Err(e) => format!("Error: {}", e),
    }
}
