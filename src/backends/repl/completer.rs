//! REPL Completer
//!
//! Completes word names (built-in and user-defined) for rustyline.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;

/// Word-name completer
///
/// The word list is a snapshot; the REPL refreshes it after every input
/// because `DEF`/`DEL` change the dictionary.
#[derive(Debug, Default)]
pub struct WordCompleter {
    words: Vec<String>,
}

impl WordCompleter {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn set_words(
        &mut self,
        words: Vec<String>,
    ) {
        self.words = words;
    }

    /// Start of the word under the cursor and the matching names
    ///
    /// Word names are uppercase, so the typed prefix is uppercased first.
    pub fn candidates(
        &self,
        line: &str,
        pos: usize,
    ) -> (usize, Vec<String>) {
        let start = line[..pos]
            .char_indices()
            .rev()
            .find(|&(_, c)| c.is_whitespace() || c == '[' || c == ']')
            .map_or(0, |(i, c)| i + c.len_utf8());
        let prefix = line[start..pos].to_uppercase();
        if prefix.is_empty() {
            return (start, Vec::new());
        }

        let matches = self
            .words
            .iter()
            .filter(|w| w.starts_with(&prefix))
            .cloned()
            .collect();
        (start, matches)
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, words) = self.candidates(line, pos);
        let pairs = words
            .into_iter()
            .map(|w| Pair {
                display: w.clone(),
                replacement: w,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for WordCompleter {
    type Hint = String;
}

impl Highlighter for WordCompleter {}

impl Validator for WordCompleter {}

impl Helper for WordCompleter {}
