//! Tag rules
//!
//! Grammar: `tags = "[" [ tagatom *( ":" tagatom ) ] "]"`, the whole bracketed
//! block being optional.

use chumsky::prelude::*;

use super::charset::word_hyphen;
use crate::error::GrammarError;

/// One tag atom, possibly empty
pub fn tag_atom() -> impl Parser<char, String, Error = GrammarError> + Clone {
    word_hyphen()
}

/// Colon separated atoms in source order.
///
/// A lone empty atom cannot be told apart from no atoms at all, so `[]`
/// yields an empty list. Empty atoms inside a longer list (`a::b`) are kept.
pub fn tag_list() -> impl Parser<char, Vec<String>, Error = GrammarError> + Clone {
    tag_atom()
        .then(just(':').ignore_then(tag_atom()).repeated())
        .map(|(first, rest)| {
            if first.is_empty() && rest.is_empty() {
                Vec::new()
            } else {
                std::iter::once(first).chain(rest).collect()
            }
        })
        .or_not()
        .map(Option::unwrap_or_default)
}

/// The optional `[...]` block; absent brackets give an empty list
pub fn tags() -> impl Parser<char, Vec<String>, Error = GrammarError> + Clone {
    just('[')
        .ignore_then(tag_list())
        .then_ignore(just(']'))
        .or_not()
        .map(Option::unwrap_or_default)
}
