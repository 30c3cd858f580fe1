//! The top-level log-line rule and its whole-string entry points

use std::fmt;

use chumsky::prelude::*;
use chumsky::BoxedParser;

use super::attrs::attrs;
use super::tags::tags;
use super::tokens::{end_sentinel, open_sentinel, priority, skip_space};
use crate::error::{GrammarError, ParseError};
use crate::log::Log;

/// `!< priority [tags] {attrs} >!` with optional space or tab between parts.
///
/// The rule does not anchor to end of input; [`LogLineParser`] does.
pub fn log_line() -> impl Parser<char, Log, Error = GrammarError> + Clone {
    open_sentinel()
        .ignore_then(skip_space())
        .ignore_then(priority())
        .then_ignore(skip_space())
        .then(tags())
        .then_ignore(skip_space())
        .then(attrs())
        .then_ignore(skip_space())
        .then_ignore(end_sentinel())
        .try_map(|((priority, tags), attrs), span| {
            Log::try_new(priority, tags, attrs).map_err(|kind| GrammarError::semantic(span, kind))
        })
}

/// A compiled log-line grammar, reusable across any number of lines
pub struct LogLineParser {
    grammar: BoxedParser<'static, char, Log, GrammarError>,
}

impl LogLineParser {
    pub fn new() -> Self {
        LogLineParser {
            grammar: log_line().then_ignore(end()).boxed(),
        }
    }

    /// Parse one complete line. Trailing text after `>!` is a mismatch.
    pub fn parse(&self, text: &str) -> Result<Log, ParseError> {
        self.grammar.parse(text).map_err(collapse_errors)
    }
}

impl Default for LogLineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogLineParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogLineParser").finish_non_exhaustive()
    }
}

/// Chumsky reports the furthest failure first
fn collapse_errors(errors: Vec<GrammarError>) -> ParseError {
    errors
        .into_iter()
        .next()
        .map(ParseError::from)
        .unwrap_or(ParseError::NoMatch {
            offset: 0,
            found: None,
        })
}

thread_local! {
    static LOG_LINE: LogLineParser = LogLineParser::new();
}

/// Parse a single log line into a [`Log`].
///
/// The grammar is built once per thread and reused for every call.
pub fn parse_log_line(text: &str) -> Result<Log, ParseError> {
    LOG_LINE.with(|parser| parser.parse(text))
}
