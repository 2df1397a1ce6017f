//! Word definition and introspection

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{expect_string, expect_vector, Builtin};
use crate::runtime::errors::{RuntimeError, RuntimeResult};
use crate::runtime::interpreter::Interpreter;
use crate::runtime::value::Value;

pub(super) const WORDS: &[Builtin] = &[
    Builtin {
        name: "DEF",
        effect: "( [body] \"NAME\" -- )",
        description: "Define or replace a word",
        run: define,
    },
    Builtin {
        name: "DEL",
        effect: "( \"NAME\" -- )",
        description: "Delete a user-defined word",
        run: delete,
    },
    Builtin {
        name: "WORDS",
        effect: "( -- names... )",
        description: "Push every word name, sorted",
        run: words,
    },
    Builtin {
        name: "WORDS?",
        effect: "( \"pattern\" -- names... )",
        description: "Push the sorted word names containing pattern",
        run: words_matching,
    },
];

/// Uppercase Latin, digits, underscore, kana and kanji
static WORD_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9_\p{Hiragana}\p{Katakana}\p{Han}]+$").unwrap());

/// Whether `name` may be bound with `DEF`
pub fn is_valid_word_name(name: &str) -> bool {
    WORD_NAME_RE.is_match(name)
}

fn define(interp: &mut Interpreter) -> RuntimeResult<()> {
    interp.require("DEF", 2)?;
    let name = expect_string("DEF", interp.pop("DEF")?)?;
    let body = expect_vector("DEF", interp.pop("DEF")?)?;

    if !is_valid_word_name(&name) {
        return Err(RuntimeError::InvalidWordName(name));
    }

    debug!("define {} ({} tokens)", name, body.len());
    interp.dictionary.insert(name, body);
    Ok(())
}

fn delete(interp: &mut Interpreter) -> RuntimeResult<()> {
    let name = expect_string("DEL", interp.pop("DEL")?)?;
    // shift_remove keeps the remaining definitions in order
    match interp.dictionary.shift_remove(&name) {
        Some(_) => {
            debug!("delete {}", name);
            Ok(())
        }
        None => Err(RuntimeError::WordNotFound(name)),
    }
}

fn words(interp: &mut Interpreter) -> RuntimeResult<()> {
    for name in interp.words() {
        interp.push(Value::String(name));
    }
    Ok(())
}

fn words_matching(interp: &mut Interpreter) -> RuntimeResult<()> {
    let pattern = expect_string("WORDS?", interp.pop("WORDS?")?)?;
    for name in interp.words() {
        if name.contains(&pattern) {
            interp.push(Value::String(name));
        }
    }
    Ok(())
}
