//! Token rules: sentinels, whitespace, priority and quoted strings

use chumsky::prelude::*;

use super::charset::{digit, word_space_punct};
use crate::error::{GrammarError, ParseError};

/// `!<`
pub fn open_sentinel() -> impl Parser<char, (), Error = GrammarError> + Clone {
    just("!<").ignored().labelled("opening sentinel")
}

/// `>!`
pub fn end_sentinel() -> impl Parser<char, (), Error = GrammarError> + Clone {
    just(">!").ignored().labelled("end sentinel")
}

/// Zero or more spaces or tabs. Newlines are not skipped.
pub fn skip_space() -> impl Parser<char, (), Error = GrammarError> + Clone {
    one_of(" \t").repeated().ignored()
}

/// A single digit converted to its numeric value
pub fn priority() -> impl Parser<char, u8, Error = GrammarError> + Clone {
    digit().try_map(|c, span| {
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .ok_or_else(|| GrammarError::semantic(span, ParseError::Priority))
    })
}

/// `"..."`, yielding the text between the quotes
pub fn quoted_string() -> impl Parser<char, String, Error = GrammarError> + Clone {
    just('"')
        .ignore_then(word_space_punct())
        .then_ignore(just('"'))
        .labelled("quoted string")
}
