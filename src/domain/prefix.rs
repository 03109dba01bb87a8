//! # Command Prefix
//!
//! The leading string that marks a message as a command invocation (e.g. `!ping`).
//! A `Prefix` can only be built through [`Prefix::parse`], so every value in circulation
//! satisfies the length and character rules.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Prefixes must be strictly shorter than this many characters.
pub const PREFIX_LENGTH_LIMIT: usize = 3;

pub const DEFAULT_PREFIX: &str = "!";

// Anchored: every character must be punctuation/symbol, not a word char or whitespace.
static SPECIAL_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\w\s]+$").expect("static prefix pattern is valid")
});

/// Why a candidate prefix was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefixRejection {
    #[error("prefix must not be empty")]
    Empty,
    #[error("prefix `{0}` is too long, it should be under {max} characters", max = PREFIX_LENGTH_LIMIT)]
    TooLong(String),
    #[error("prefix `{0}` must consist of special characters only")]
    NotSpecial(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix(String);

impl Prefix {
    pub fn parse(candidate: &str) -> Result<Self, PrefixRejection> {
        if candidate.is_empty() {
            return Err(PrefixRejection::Empty);
        }
        if candidate.chars().count() >= PREFIX_LENGTH_LIMIT {
            return Err(PrefixRejection::TooLong(candidate.to_string()));
        }
        if !SPECIAL_ONLY.is_match(candidate) {
            return Err(PrefixRejection::NotSpecial(candidate.to_string()));
        }
        Ok(Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the remainder of `content` after the prefix, if `content` starts with it.
    pub fn strip<'a>(&self, content: &'a str) -> Option<&'a str> {
        content.strip_prefix(self.0.as_str())
    }
}

impl Default for Prefix {
    fn default() -> Self {
        Self(DEFAULT_PREFIX.to_string())
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
