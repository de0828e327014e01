//! # Text Conversion
//!
//! The canonical text convention for every persisted value: fields are
//! whitespace-separated tokens written in a fixed order.
//!
//! Two parse policies exist side by side:
//!
//! | Mode | On a bad token | Used by |
//! |------|----------------|---------|
//! | `Lenient` (default) | `T::default()`, traced at debug | checkpoint readers, `string_to` |
//! | `Strict` | `Error::Parse` / `Error::MissingToken` | `FromStr`, `try_string_to` |
//!
//! Lenient parsing keeps compatibility with files written by older hosts,
//! which never signalled parse failures.

pub mod tokens;

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use tokens::TokenStream;

// ============================================================================
// Configuration
// ============================================================================

/// How a `TokenStream` reacts to a token it cannot parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseMode {
    /// Substitute the type's default value.
    #[default]
    Lenient,
    /// Return an error.
    Strict,
}

/// Text I/O settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextConfig {
    pub mode: ParseMode,
    /// Zero-pad rendered values to this width.
    pub pad_width: Option<usize>,
}

impl TextConfig {
    pub fn lenient() -> Self {
        Self { mode: ParseMode::Lenient, pad_width: None }
    }

    pub fn strict() -> Self {
        Self { mode: ParseMode::Strict, pad_width: None }
    }

    pub fn with_pad_width(mut self, width: usize) -> Self {
        self.pad_width = Some(width);
        self
    }

    pub fn render<T: Display + ?Sized>(&self, value: &T) -> String {
        match self.pad_width {
            Some(width) => to_string_padded(value, width),
            None => to_string(value),
        }
    }
}

// ============================================================================
// Parse / render helpers
// ============================================================================

/// Parse the first token of `s` as `T`, or `T::default()` if it can't be.
///
/// Only the first whitespace-delimited token is read, for `String` too:
/// `string_to::<String>("a b")` is `"a"`. Use `s.to_owned()` to keep the
/// whole input.
///
/// ```
/// use evo_primitives::string_to;
/// assert_eq!(string_to::<i32>("42"), 42);
/// assert_eq!(string_to::<i32>("abc"), 0);
/// ```
pub fn string_to<T: FromStr + Default>(s: &str) -> T {
    TokenStream::new(s).parse_next_or_default()
}

/// Strict counterpart of [`string_to`].
pub fn try_string_to<T: FromStr>(s: &str) -> Result<T> {
    TokenStream::new(s).parse_next()
}

pub fn to_string<T: Display + ?Sized>(value: &T) -> String {
    value.to_string()
}

/// Render `value` left-padded with `'0'` up to `width` characters.
///
/// Padding is applied to the rendered text, so a sign is not moved:
/// `-5` at width 4 becomes `"00-5"`.
pub fn to_string_padded<T: Display + ?Sized>(value: &T, width: usize) -> String {
    format!("{value:0>width$}")
}

// ============================================================================
// Name lookup
// ============================================================================

/// Case-insensitive position of `name` in `names`, or `names.len()` when
/// absent.
pub fn index_from_name(name: &str, names: &[&str]) -> usize {
    names
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
        .unwrap_or(names.len())
}

pub fn index_from_name_strict(name: &str, names: &[&str]) -> Result<usize> {
    names
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::NotFound(format!("name {name:?}")))
}
