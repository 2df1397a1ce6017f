//! Color annotations
//!
//! The editing surface tags each run of text with a color, and the color
//! decides the type of every literal in the run. This module owns that
//! input channel: the [`Color`] palette, its mapping onto [`SemanticType`],
//! and a small `<green>…</green>` tag syntax for carrying colored runs
//! through plain text (CLI, REPL, tests).

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::frontend::lexer::LexError;

/// Input palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Cyan,
    Purple,
    Orange,
    Yellow,
    /// Legacy alias of orange
    Gray,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Cyan,
        Color::Purple,
        Color::Orange,
        Color::Yellow,
        Color::Gray,
    ];

    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }

    /// Resolve a CSS color: a palette name, `#RRGGBB` or `rgb(r, g, b)`
    ///
    /// Exact palette values map to their color; other values fall into the
    /// nearest hue band, and values outside every band read as red.
    /// Returns `None` when `text` is not a color at all.
    pub fn from_css(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some(color) = Self::from_name(text) {
            return Some(color);
        }
        let rgb = parse_css_rgb(text)?;
        Some(
            Self::ALL
                .into_iter()
                .find(|color| color.rgb() == rgb)
                .unwrap_or_else(|| Self::nearest(rgb)),
        )
    }

    /// Hue bands, checked in order
    fn nearest((r, g, b): (u8, u8, u8)) -> Self {
        if r > 200 && g < 150 && b < 100 {
            Color::Red
        } else if r < 100 && g > 100 && b < 150 {
            Color::Green
        } else if r < 100 && g < 150 && b > 150 {
            Color::Blue
        } else if r < 150 && g > 150 && b > 200 {
            Color::Cyan
        } else if r > 100 && g < 100 && b > 150 {
            Color::Purple
        } else if r > 200 && g > 150 && b < 50 {
            Color::Orange
        } else if r > 200 && g > 200 && b < 50 {
            Color::Yellow
        } else {
            Color::Red
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Cyan => "cyan",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Gray => "gray",
        }
    }

    /// The type a run of this color denotes
    pub fn semantic(self) -> SemanticType {
        match self {
            Color::Red => SemanticType::Symbol,
            Color::Green => SemanticType::Number,
            Color::Blue => SemanticType::String,
            Color::Cyan => SemanticType::Boolean,
            Color::Purple => SemanticType::Vector,
            Color::Orange | Color::Gray => SemanticType::Nil,
            Color::Yellow => SemanticType::Comment,
        }
    }

    /// Display color on the editing surface
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Red => (0xFF, 0x4B, 0x00),
            Color::Green => (0x03, 0xAF, 0x7A),
            Color::Blue => (0x00, 0x5A, 0xFF),
            Color::Cyan => (0x4D, 0xC4, 0xFF),
            Color::Purple => (0x9C, 0x27, 0xB0),
            Color::Orange => (0xF6, 0xAA, 0x00),
            Color::Yellow => (0xFF, 0xF1, 0x00),
            Color::Gray => (0x9E, 0x9E, 0x9E),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Semantic type carried by a color or by a `typename:` prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticType {
    Number,
    Boolean,
    String,
    Symbol,
    Vector,
    Nil,
    Comment,
}

impl SemanticType {
    /// Resolve the `typename` part of a `typename:value` prefix
    pub fn from_prefix(name: &str) -> Option<Self> {
        match name {
            "number" => Some(SemanticType::Number),
            "boolean" => Some(SemanticType::Boolean),
            "string" => Some(SemanticType::String),
            "symbol" => Some(SemanticType::Symbol),
            "vector" => Some(SemanticType::Vector),
            "nil" => Some(SemanticType::Nil),
            "comment" => Some(SemanticType::Comment),
            _ => None,
        }
    }

    /// Canonical color for this type
    pub fn color(self) -> Color {
        match self {
            SemanticType::Number => Color::Green,
            SemanticType::Boolean => Color::Cyan,
            SemanticType::String => Color::Blue,
            SemanticType::Symbol => Color::Red,
            SemanticType::Vector => Color::Purple,
            SemanticType::Nil => Color::Orange,
            SemanticType::Comment => Color::Yellow,
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name = match self {
            SemanticType::Number => "number",
            SemanticType::Boolean => "boolean",
            SemanticType::String => "string",
            SemanticType::Symbol => "symbol",
            SemanticType::Vector => "vector",
            SemanticType::Nil => "nil",
            SemanticType::Comment => "comment",
        };
        f.write_str(name)
    }
}

/// A run of text sharing one color annotation
///
/// `color: None` marks text with no annotation; the lexer infers the type
/// of each word from its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredRun {
    pub color: Option<Color>,
    pub text: String,
}

impl ColoredRun {
    pub fn new(
        color: Option<Color>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            color,
            text: text.into(),
        }
    }

    pub fn colored(
        color: Color,
        text: impl Into<String>,
    ) -> Self {
        Self::new(Some(color), text)
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(None, text)
    }
}

static HEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$").unwrap());

static RGB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:rgb)\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap()
});

static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^<(/?)([A-Za-z]+|#[0-9A-Fa-f]{6}|(?i:rgb)\([0-9,\s]*\))>").unwrap()
});

fn parse_css_rgb(text: &str) -> Option<(u8, u8, u8)> {
    if let Some(caps) = HEX_RE.captures(text) {
        let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
        return Some((channel(1)?, channel(2)?, channel(3)?));
    }
    let caps = RGB_RE.captures(text)?;
    // 超过 255 的分量不是颜色
    let channel = |i: usize| caps[i].parse::<u8>().ok();
    Some((channel(1)?, channel(2)?, channel(3)?))
}

fn flush_run(
    runs: &mut Vec<ColoredRun>,
    text: &mut String,
    color: Option<Color>,
) {
    if !text.is_empty() {
        runs.push(ColoredRun::new(color, std::mem::take(text)));
    }
}

/// Split `<green>3 4</green> <red>+</red>` into colored runs
///
/// Tags name a palette color or give a CSS value (`<#03AF7A>`,
/// `<rgb(3, 175, 122)>`); anything else that starts with `<` stays in the
/// text. Tags nest and the innermost color wins. A closing tag matches by
/// resolved color, so `<#03AF7A>1</green>` is balanced.
pub fn parse_markup(source: &str) -> Result<Vec<ColoredRun>, LexError> {
    let mut runs = Vec::new();
    let mut open: Vec<Color> = Vec::new();
    let mut text = String::new();
    let mut rest = source;

    while let Some(index) = rest.find('<') {
        let (before, tail) = rest.split_at(index);
        text.push_str(before);

        let tag = TAG_RE.captures(tail).and_then(|caps| {
            let color = Color::from_css(&caps[2])?;
            Some((!caps[1].is_empty(), color, caps[0].len()))
        });

        match tag {
            Some((closing, color, len)) => {
                flush_run(&mut runs, &mut text, open.last().copied());
                if closing {
                    match open.pop() {
                        Some(current) if current == color => {}
                        current => {
                            return Err(LexError::MismatchedColorTag {
                                expected: current.map_or_else(|| "none".to_string(), |c| c.to_string()),
                                found: color,
                            })
                        }
                    }
                } else {
                    open.push(color);
                }
                rest = &tail[len..];
            }
            None => {
                text.push('<');
                rest = &tail[1..];
            }
        }
    }

    text.push_str(rest);
    flush_run(&mut runs, &mut text, open.last().copied());
    Ok(runs)
}
