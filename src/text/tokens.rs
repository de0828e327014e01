//! Token stream: the whitespace-delimited reader behind every text form.

use std::any::type_name;
use std::str::{FromStr, SplitWhitespace};

use tracing::debug;

use crate::{Error, Result};
use super::{ParseMode, TextConfig};

/// Reads whitespace-delimited tokens from a borrowed string.
///
/// Values are consumed front to back; there is no rewinding. `position`
/// counts the tokens already handed out.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: SplitWhitespace<'a>,
    position: usize,
    config: TextConfig,
}

impl<'a> TokenStream<'a> {
    /// Lenient stream over `input`.
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, TextConfig::default())
    }

    pub fn with_config(input: &'a str, config: TextConfig) -> Self {
        Self {
            tokens: input.split_whitespace(),
            position: 0,
            config,
        }
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// True when no tokens remain.
    pub fn is_exhausted(&self) -> bool {
        self.tokens.clone().next().is_none()
    }

    pub fn next_token(&mut self) -> Option<&'a str> {
        let token = self.tokens.next()?;
        self.position += 1;
        Some(token)
    }

    /// Parse the next token as `T`, reporting missing or malformed tokens.
    pub fn parse_next<T: FromStr>(&mut self) -> Result<T> {
        let position = self.position;
        let token = self.next_token().ok_or(Error::MissingToken {
            position,
            expected: type_name::<T>(),
        })?;
        token.parse().map_err(|_| Error::Parse {
            token: token.to_owned(),
            target: type_name::<T>(),
        })
    }

    /// Parse the next token as `T`, falling back to `T::default()`.
    ///
    /// A missing token also yields the default. The failure is never
    /// surfaced to the caller, only traced.
    pub fn parse_next_or_default<T: FromStr + Default>(&mut self) -> T {
        match self.parse_next() {
            Ok(value) => value,
            Err(err) => {
                debug!(%err, "lenient parse fell back to default");
                T::default()
            }
        }
    }

    /// Parse the next token following the configured `ParseMode`.
    pub fn read<T: FromStr + Default>(&mut self) -> Result<T> {
        match self.config.mode {
            ParseMode::Strict => self.parse_next(),
            ParseMode::Lenient => Ok(self.parse_next_or_default()),
        }
    }

    /// Fail if any tokens are left.
    pub fn expect_end(&mut self) -> Result<()> {
        let rest: Vec<&str> = self.tokens.by_ref().collect();
        if rest.is_empty() {
            Ok(())
        } else {
            Err(Error::TrailingInput(rest.join(" ")))
        }
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.next_token()
    }
}
