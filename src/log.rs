//! The parsed log record
//!
//! A [`Log`] is only ever built through [`Log::try_new`], so every value of the
//! type satisfies the same constraints the grammar enforces: a single-digit
//! priority, tag atoms drawn from `[A-Za-z0-9_-]`, keys matching
//! `[A-Z0-9][A-Z0-9_]*` and values that fit inside a quoted attribute.
//!
//! The [`Display`](fmt::Display) impl is the canonical formatter. Its output
//! always parses back into an equal record.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::grammar::charset::{is_key_continue, is_key_start, is_quoted_char, is_word_hyphen};

/// Highest priority a log line can carry
pub const MAX_PRIORITY: u8 = 9;

/// A structured log record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLog")]
pub struct Log {
    priority: u8,
    tags: Vec<String>,
    attrs: BTreeMap<String, String>,
}

/// Unvalidated field bundle used on the deserialization path
#[derive(Deserialize)]
struct RawLog {
    priority: u8,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    attrs: BTreeMap<String, String>,
}

impl TryFrom<RawLog> for Log {
    type Error = ParseError;

    fn try_from(raw: RawLog) -> Result<Self, Self::Error> {
        Log::try_new(raw.priority, raw.tags, raw.attrs)
    }
}

impl Log {
    /// Assemble a record, checking each field against the line grammar
    pub fn try_new(
        priority: u8,
        tags: Vec<String>,
        attrs: BTreeMap<String, String>,
    ) -> Result<Self, ParseError> {
        if priority > MAX_PRIORITY {
            return Err(ParseError::Priority);
        }
        if !tags.iter().all(|tag| tag.chars().all(is_word_hyphen)) {
            return Err(ParseError::Tags);
        }
        // `[]` reads back as no tags, so a lone empty tag has no line form
        if matches!(tags.as_slice(), [only] if only.is_empty()) {
            return Err(ParseError::Tags);
        }
        if !attrs
            .iter()
            .all(|(key, value)| is_valid_key(key) && value.chars().all(is_quoted_char))
        {
            return Err(ParseError::Attributes);
        }

        Ok(Log {
            priority,
            tags,
            attrs,
        })
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// Tags in source order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn attrs(&self) -> &BTreeMap<String, String> {
        &self.attrs
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn into_parts(self) -> (u8, Vec<String>, BTreeMap<String, String>) {
        (self.priority, self.tags, self.attrs)
    }
}

fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => is_key_start(first) && chars.all(is_key_continue),
        None => false,
    }
}

/// Values that can be written without quotes
fn is_bare_value(value: &str) -> bool {
    !value.is_empty() && value.chars().all(is_word_hyphen)
}

impl fmt::Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "!< {}", self.priority)?;

        if !self.tags.is_empty() {
            write!(f, " [{}]", self.tags.join(":"))?;
        }

        if !self.attrs.is_empty() {
            f.write_str(" {")?;
            for (key, value) in &self.attrs {
                if is_bare_value(value) {
                    write!(f, " {}={}", key, value)?;
                } else {
                    write!(f, " {}=\"{}\"", key, value)?;
                }
            }
            f.write_str(" }")?;
        }

        f.write_str(" >!")
    }
}
