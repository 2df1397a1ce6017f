//! Lexer module
//!
//! Turns colored runs into typed [`Token`]s. The color of a run (or an
//! explicit `typename:` prefix on a word) selects the literal grammar each
//! word must satisfy; runs without a color fall back to inferring the type
//! from the word's shape.

pub mod tokens;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::trace;

use crate::frontend::markup::{parse_markup, Color, ColoredRun, SemanticType};
use crate::runtime::rational::Rational;

pub use tokens::Token;

/// Lexer error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("Unclosed vector: missing {missing} closing bracket(s)")]
    UnclosedVector { missing: usize },

    #[error("Unexpected ']' without a matching '['")]
    UnmatchedVectorClose,

    #[error("Invalid {kind} literal '{text}' ({color}): {reason}")]
    InvalidLiteral {
        kind: SemanticType,
        color: Color,
        text: String,
        reason: String,
    },

    #[error("Unterminated string starting with '{prefix}'")]
    UnterminatedString { prefix: String },

    #[error("Closing tag </{found}> does not match open color {expected}")]
    MismatchedColorTag { expected: String, found: Color },

    #[error("Vector nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Default ceiling on `[` nesting
pub const DEFAULT_MAX_NESTING: usize = 1024;

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?(/-?\d+(\.\d+)?)?$").unwrap());

static PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(number|boolean|string|symbol|vector|nil|comment):(.+)$").unwrap());

/// Tokenize colored runs
pub fn tokenize(runs: &[ColoredRun]) -> Result<Vec<Token>, LexError> {
    tokenize_with_nesting(runs, DEFAULT_MAX_NESTING)
}

/// Tokenize colored runs, failing once `[` nests deeper than `max_nesting`
pub fn tokenize_with_nesting(
    runs: &[ColoredRun],
    max_nesting: usize,
) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(max_nesting);
    for run in runs {
        lexer.feed(run)?;
    }
    lexer.finish()
}

/// Parse `<color>` markup and tokenize the result
pub fn tokenize_str(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_str_with_nesting(source, DEFAULT_MAX_NESTING)
}

pub fn tokenize_str_with_nesting(
    source: &str,
    max_nesting: usize,
) -> Result<Vec<Token>, LexError> {
    tokenize_with_nesting(&parse_markup(source)?, max_nesting)
}

struct Lexer {
    /// `frames[0]` is the program; each open `[` pushes a frame
    frames: Vec<Vec<Token>>,
    max_nesting: usize,
}

impl Lexer {
    fn new(max_nesting: usize) -> Self {
        Self {
            frames: vec![Vec::new()],
            max_nesting,
        }
    }

    fn feed(
        &mut self,
        run: &ColoredRun,
    ) -> Result<(), LexError> {
        // 注释整段丢弃，包括其中的括号
        if run.color.map(Color::semantic) == Some(SemanticType::Comment) {
            return Ok(());
        }
        let mut chars = run.text.char_indices().peekable();
        let mut word = String::new();

        while let Some((index, c)) = chars.next() {
            match c {
                '[' => {
                    self.flush(&mut word, run.color)?;
                    self.open_vector()?;
                }
                ']' => {
                    self.flush(&mut word, run.color)?;
                    self.close_vector()?;
                }
                c if c.is_whitespace() => self.flush(&mut word, run.color)?,
                // 无颜色文本：引号字符串可以包含空格和括号
                '"' if run.color.is_none() && word.is_empty() => {
                    let rest = &run.text[index + 1..];
                    let end = rest.find('"').ok_or_else(|| LexError::UnterminatedString {
                        prefix: run.text[index..].chars().take(16).collect(),
                    })?;
                    self.push(Token::String(rest[..end].to_string()));
                    let close = index + 1 + end;
                    while chars.next_if(|&(i, _)| i <= close).is_some() {}
                }
                '#' if run.color.is_none() && word.is_empty() => {
                    while chars.next_if(|&(_, c)| c != '\n').is_some() {}
                }
                c => word.push(c),
            }
        }

        self.flush(&mut word, run.color)
    }

    fn finish(mut self) -> Result<Vec<Token>, LexError> {
        if self.frames.len() > 1 {
            return Err(LexError::UnclosedVector {
                missing: self.frames.len() - 1,
            });
        }
        Ok(self.frames.pop().unwrap_or_default())
    }

    fn push(
        &mut self,
        token: Token,
    ) {
        trace!("token {:?}", token);
        if let Some(frame) = self.frames.last_mut() {
            frame.push(token);
        }
    }

    /// Refuses to open a frame past `max_nesting`
    fn open_vector(&mut self) -> Result<(), LexError> {
        if self.frames.len() > self.max_nesting {
            return Err(LexError::NestingTooDeep {
                limit: self.max_nesting,
            });
        }
        self.frames.push(Vec::new());
        Ok(())
    }

    fn close_vector(&mut self) -> Result<(), LexError> {
        if self.frames.len() < 2 {
            return Err(LexError::UnmatchedVectorClose);
        }
        let children = self.frames.pop().unwrap_or_default();
        self.push(Token::Vector(children));
        Ok(())
    }

    fn flush(
        &mut self,
        word: &mut String,
        color: Option<Color>,
    ) -> Result<(), LexError> {
        if word.is_empty() {
            return Ok(());
        }
        let word = std::mem::take(word);

        let token = match PREFIX_RE.captures(&word) {
            Some(caps) => {
                // The prefix regex only matches known type names
                let kind = SemanticType::from_prefix(&caps[1]).unwrap_or(SemanticType::Symbol);
                typed_literal(kind, kind.color(), &caps[2])?
            }
            None => match color {
                Some(color) => typed_literal(color.semantic(), color, &word)?,
                None => Some(inferred_literal(&word)?),
            },
        };

        if let Some(token) = token {
            self.push(token);
        }
        Ok(())
    }
}

fn invalid(
    kind: SemanticType,
    color: Color,
    text: &str,
    reason: impl Into<String>,
) -> LexError {
    LexError::InvalidLiteral {
        kind,
        color,
        text: text.to_string(),
        reason: reason.into(),
    }
}

fn number_literal(
    color: Color,
    text: &str,
) -> Result<Token, LexError> {
    if !NUMBER_RE.is_match(text) {
        return Err(invalid(SemanticType::Number, color, text, "expected a decimal or a fraction"));
    }
    text.parse::<Rational>()
        .map(Token::Number)
        .map_err(|e| invalid(SemanticType::Number, color, text, e.to_string()))
}

fn symbol_literal(
    color: Color,
    text: &str,
) -> Result<Token, LexError> {
    if text.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(invalid(SemanticType::Symbol, color, text, "English symbols must be uppercase"));
    }
    Ok(Token::Symbol(text.to_string()))
}

/// Validate `text` against the grammar of `kind`; comments yield `None`
fn typed_literal(
    kind: SemanticType,
    color: Color,
    text: &str,
) -> Result<Option<Token>, LexError> {
    let token = match kind {
        SemanticType::Comment => return Ok(None),
        SemanticType::Number => number_literal(color, text)?,
        SemanticType::Boolean => match text {
            "TRUE" => Token::Boolean(true),
            "FALSE" => Token::Boolean(false),
            _ => return Err(invalid(kind, color, text, "must be TRUE or FALSE")),
        },
        SemanticType::String => Token::String(text.to_string()),
        SemanticType::Symbol => symbol_literal(color, text)?,
        SemanticType::Nil => match text {
            "NIL" => Token::Nil,
            _ => return Err(invalid(kind, color, text, "must be NIL")),
        },
        SemanticType::Vector => {
            return Err(invalid(kind, color, text, "vectors are written with [ and ]"))
        }
    };
    Ok(Some(token))
}

/// Type an uncolored word by its shape
fn inferred_literal(text: &str) -> Result<Token, LexError> {
    if NUMBER_RE.is_match(text) {
        return number_literal(Color::Green, text);
    }
    Ok(match text {
        "TRUE" => Token::Boolean(true),
        "FALSE" => Token::Boolean(false),
        "NIL" => Token::Nil,
        _ => symbol_literal(Color::Red, text)?,
    })
}
