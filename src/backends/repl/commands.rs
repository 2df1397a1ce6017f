//! REPL Command Handler
//!
//! Handles special commands starting with ':'.

use crate::runtime::builtins;
use crate::runtime::Interpreter;

/// Command result
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Exit the REPL
    Exit,
    /// Continue to next input
    Continue,
    /// Output a message
    Output(String),
}

/// Command handler for REPL
pub struct CommandHandler<'a> {
    interp: &'a mut Interpreter,
}

impl<'a> CommandHandler<'a> {
    /// Create a new command handler
    pub fn new(interp: &'a mut Interpreter) -> Self {
        Self { interp }
    }

    /// Handle a command line such as `:stack`
    pub fn handle(
        &mut self,
        line: &str,
    ) -> CommandResult {
        let cmd = line.trim_start_matches(':').trim();
        let parts: Vec<&str> = cmd.split_whitespace().collect();

        match parts.first().copied().unwrap_or("") {
            "quit" | "q" | "exit" => CommandResult::Exit,
            "help" | "h" => CommandResult::Output(help_text()),
            "reset" | "clear" | "c" => {
                self.interp.reset();
                CommandResult::Output("Session reset".to_string())
            }
            "stack" | "s" => CommandResult::Output(self.interp.render()),
            "register" | "r" => CommandResult::Output(match self.interp.register() {
                Some(value) => value.to_string(),
                None => "Register empty".to_string(),
            }),
            "env" | "e" => {
                let env = self.interp.environment();
                if env.is_empty() {
                    return CommandResult::Output("No user-defined words".to_string());
                }
                let lines: Vec<String> = env
                    .iter()
                    .map(|(name, body)| {
                        let body: Vec<String> = body.iter().map(ToString::to_string).collect();
                        format!("{} = [ {} ]", name, body.join(" "))
                    })
                    .collect();
                CommandResult::Output(lines.join("\n"))
            }
            "words" | "w" => CommandResult::Output(describe_words(parts.get(1).copied())),
            "" => CommandResult::Continue,
            _ => CommandResult::Output(format!("Unknown command: {}", line.trim())),
        }
    }
}

/// One line per built-in: name, stack effect, description
pub fn describe_words(filter: Option<&str>) -> String {
    builtins::all()
        .filter(|b| filter.map_or(true, |f| b.name.contains(f)))
        .map(|b| format!("  {:<8} {:<30} {}", b.name, b.effect, b.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn help_text() -> String {
    [
        "Available commands:",
        "  :quit, :q          - Exit the REPL",
        "  :help, :h          - Show this help",
        "  :reset, :c         - Clear stack, register and dictionary",
        "  :stack, :s         - Show the stack left by the last input",
        "  :register, :r      - Show the register",
        "  :env, :e           - List user-defined words",
        "  :words, :w [pat]   - Describe built-in words",
        "",
        "Color a run with <green>…</green> (number), <cyan> (boolean),",
        "<blue> (string), <red> (word), <orange> (NIL), <yellow> (comment).",
        "Uncolored words are typed by shape: 3/4, TRUE, NIL, \"text\", WORD.",
    ]
    .join("\n")
}
