//! Character-class primitives
//!
//! The predicates are shared with [`Log::try_new`](crate::Log::try_new) so the
//! record constructor and the grammar agree on what each field may contain.

use chumsky::prelude::*;

use crate::error::GrammarError;

/// Symbols allowed inside a quoted attribute value besides word characters.
/// The double quote is absent because it closes the value.
pub(crate) const QUOTED_SYMBOLS: &str = "-~ \t`!@#:;$%^&*()+=?\\/><,.{}[]|'";

/// `[A-Za-z0-9_-]`
pub(crate) fn is_word_hyphen(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

pub(crate) fn is_quoted_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || QUOTED_SYMBOLS.contains(c)
}

/// `[A-Z0-9]`
pub(crate) fn is_key_start(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

/// `[A-Z0-9_]`
pub(crate) fn is_key_continue(c: char) -> bool {
    is_key_start(c) || c == '_'
}

/// Exactly one `0-9`
pub fn digit() -> impl Parser<char, char, Error = GrammarError> + Clone {
    filter(|c: &char| c.is_ascii_digit()).labelled("digit")
}

/// Zero or more `[A-Za-z0-9_-]`
pub fn word_hyphen() -> impl Parser<char, String, Error = GrammarError> + Clone {
    filter(|c: &char| is_word_hyphen(*c))
        .repeated()
        .collect::<String>()
}

/// Zero or more characters allowed between the quotes of an attribute value
pub fn word_space_punct() -> impl Parser<char, String, Error = GrammarError> + Clone {
    filter(|c: &char| is_quoted_char(*c))
        .repeated()
        .collect::<String>()
}

/// Zero or more `[A-Z0-9_]`
pub fn upper_alnum_underscore() -> impl Parser<char, String, Error = GrammarError> + Clone {
    filter(|c: &char| is_key_continue(*c))
        .repeated()
        .collect::<String>()
}
