//! Line-based REPL with rustyline
//!
//! Provides an interactive session with editing, history and word-name
//! completion. Lines starting with ':' are REPL commands; everything else
//! is evaluated as a Chroma program in one persistent session.

use std::path::PathBuf;

use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::{CompletionType, EditMode, Editor};
use tracing::{debug, warn};

use crate::runtime::Interpreter;
use crate::util::config::{ReplConfig, RuntimeConfig};
use crate::{NAME, VERSION};

pub mod commands;
pub mod completer;
pub mod paint;

pub use commands::{CommandHandler, CommandResult};
pub use completer::WordCompleter;

/// Line REPL configuration
#[derive(Debug, Clone)]
pub struct LineREPLConfig {
    /// Prompt to display
    pub prompt: String,
    /// Enable VI mode
    pub vi_mode: bool,
    /// History file path
    pub history_file: Option<PathBuf>,
    /// Maximum history size
    pub history_size: usize,
    /// Paint results in their type colors
    pub colors: bool,
}

impl From<ReplConfig> for LineREPLConfig {
    fn from(config: ReplConfig) -> Self {
        Self {
            prompt: config.prompt,
            vi_mode: config.vi_mode,
            history_file: config.history_file,
            history_size: config.history_size,
            colors: config.colors,
        }
    }
}

/// Line REPL
pub struct LineREPL {
    /// Configuration
    config: LineREPLConfig,
    /// rustyline editor
    editor: Editor<WordCompleter, FileHistory>,
    /// Session being driven
    interp: Interpreter,
}

impl LineREPL {
    /// Create a line REPL
    pub fn with_config(
        runtime: RuntimeConfig,
        config: LineREPLConfig,
    ) -> rustyline::Result<Self> {
        let rl_config = Config::builder()
            .history_ignore_space(true)
            .max_history_size(config.history_size)?
            .completion_type(CompletionType::List)
            .edit_mode(if config.vi_mode {
                EditMode::Vi
            } else {
                EditMode::Emacs
            })
            .build();

        let interp = Interpreter::with_config(runtime);
        let mut editor = Editor::with_config(rl_config)?;
        editor.set_helper(Some(WordCompleter::new(interp.words())));

        // Load history if file exists
        if let Some(ref history_file) = config.history_file {
            if history_file.exists() {
                if let Err(e) = editor.load_history(history_file) {
                    warn!("could not load history {}: {}", history_file.display(), e);
                }
            }
        }

        Ok(Self {
            config,
            editor,
            interp,
        })
    }

    /// Run the REPL until `:quit` or Ctrl-D
    pub fn run(&mut self) -> rustyline::Result<()> {
        println!("{} {} - Type :help for assistance", NAME, VERSION);
        println!("Press Ctrl+D or :quit to exit\n");

        loop {
            match self.editor.readline(&self.config.prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line);

                    if line.starts_with(':') {
                        match CommandHandler::new(&mut self.interp).handle(line) {
                            CommandResult::Exit => break,
                            CommandResult::Continue => {}
                            CommandResult::Output(msg) => println!("{}", msg),
                        }
                    } else {
                        println!("{}", paint::evaluate_line(&mut self.interp, line, self.config.colors));
                    }
                    self.refresh_words();
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl-D pressed
                    break;
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl-C pressed
                    println!("(Interrupted)");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        // Save history
        if let Some(ref history_file) = self.config.history_file {
            if let Err(e) = self.editor.save_history(history_file) {
                warn!("could not save history {}: {}", history_file.display(), e);
            }
        }

        Ok(())
    }

    fn refresh_words(&mut self) {
        let words = self.interp.words();
        debug!("completer refreshed with {} words", words.len());
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_words(words);
        }
    }
}

#[cfg(test)]
mod tests;
