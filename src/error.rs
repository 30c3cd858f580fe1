//! Error types for log-line parsing
//!
//! [`ParseError`] is what callers see. [`GrammarError`] is the error type the
//! combinator engine threads through the rules; it is collapsed into a
//! [`ParseError`] at the entry point.

use std::collections::BTreeSet;
use std::ops::Range;

/// Why a line could not be turned into a [`Log`](crate::Log)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The priority slot did not hold a single decimal digit value
    #[error("priority is not a single decimal digit")]
    Priority,

    /// The tag list held a tag with characters outside `[A-Za-z0-9_-]`
    #[error("tag list contains a malformed tag")]
    Tags,

    /// The attribute block held a malformed key or an unrepresentable value
    #[error("attribute block contains a malformed key or value")]
    Attributes,

    /// The text does not conform to the log-line grammar
    #[error(
        "line does not match the log-line grammar at offset {offset}, found {}",
        describe_found(.found)
    )]
    NoMatch {
        /// Character offset of the furthest point the grammar reached
        offset: usize,
        /// Character found there, `None` at end of input
        found: Option<char>,
    },
}

impl ParseError {
    /// True when the line was structurally malformed
    pub fn is_no_match(&self) -> bool {
        matches!(self, ParseError::NoMatch { .. })
    }
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{:?}", c),
        None => "end of input".to_string(),
    }
}

/// Error produced while running the grammar rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// Input did not match what a rule expected
    Unexpected {
        span: Range<usize>,
        expected: BTreeSet<Option<char>>,
        found: Option<char>,
        label: Option<&'static str>,
    },
    /// A semantic action rejected a matched value
    Semantic { span: Range<usize>, kind: ParseError },
}

impl GrammarError {
    pub fn semantic(span: Range<usize>, kind: ParseError) -> Self {
        GrammarError::Semantic { span, kind }
    }

    pub fn span(&self) -> Range<usize> {
        match self {
            GrammarError::Unexpected { span, .. } | GrammarError::Semantic { span, .. } => {
                span.clone()
            }
        }
    }
}

impl chumsky::Error<char> for GrammarError {
    type Span = Range<usize>;
    type Label = &'static str;

    fn expected_input_found<Iter: IntoIterator<Item = Option<char>>>(
        span: Self::Span,
        expected: Iter,
        found: Option<char>,
    ) -> Self {
        GrammarError::Unexpected {
            span,
            expected: expected.into_iter().collect(),
            found,
            label: None,
        }
    }

    fn unclosed_delimiter(
        _unclosed_span: Self::Span,
        _unclosed: char,
        span: Self::Span,
        expected: char,
        found: Option<char>,
    ) -> Self {
        Self::expected_input_found(span, Some(Some(expected)), found)
    }

    fn with_label(self, label: Self::Label) -> Self {
        match self {
            GrammarError::Unexpected {
                span,
                expected,
                found,
                label: None,
            } => GrammarError::Unexpected {
                span,
                expected,
                found,
                label: Some(label),
            },
            other => other,
        }
    }

    fn merge(self, other: Self) -> Self {
        match (self, other) {
            (semantic @ GrammarError::Semantic { .. }, _) => semantic,
            (_, semantic @ GrammarError::Semantic { .. }) => semantic,
            (
                GrammarError::Unexpected {
                    span,
                    mut expected,
                    found,
                    label,
                },
                GrammarError::Unexpected {
                    expected: more,
                    label: other_label,
                    ..
                },
            ) => {
                expected.extend(more);
                GrammarError::Unexpected {
                    span,
                    expected,
                    found,
                    label: label.or(other_label),
                }
            }
        }
    }
}

impl From<GrammarError> for ParseError {
    fn from(err: GrammarError) -> Self {
        match err {
            GrammarError::Unexpected { span, found, .. } => ParseError::NoMatch {
                offset: span.start,
                found,
            },
            GrammarError::Semantic { kind, .. } => kind,
        }
    }
}
