//! Attribute rules
//!
//! Grammar:
//!
//! ```text
//! attrs     = "{" skip [ kvpair *( skip kvpair ) ] skip "}"
//! kvpair    = attrkey "=" attrvalue
//! attrvalue = quoted / unquoted
//! ```

use std::collections::BTreeMap;

use chumsky::prelude::*;

use super::charset::{is_key_start, upper_alnum_underscore, word_hyphen};
use super::tokens::{quoted_string, skip_space};
use crate::error::GrammarError;

/// `[A-Z0-9][A-Z0-9_]*`
pub fn attr_key() -> impl Parser<char, String, Error = GrammarError> + Clone {
    filter(|c: &char| is_key_start(*c))
        .then(upper_alnum_underscore())
        .map(|(first, rest)| {
            let mut key = String::with_capacity(rest.len() + 1);
            key.push(first);
            key.push_str(&rest);
            key
        })
        .labelled("attribute key")
}

/// Quoted first, unquoted second. Swapping the branches would let the
/// unquoted rule match the empty string in front of every quoted value.
pub fn attr_value() -> impl Parser<char, String, Error = GrammarError> + Clone {
    quoted_string().or(word_hyphen())
}

pub fn kv_pair() -> impl Parser<char, (String, String), Error = GrammarError> + Clone {
    attr_key().then_ignore(just('=')).then(attr_value())
}

/// Pairs separated by optional whitespace. A repeated key keeps its last value.
pub fn kv_pairs() -> impl Parser<char, BTreeMap<String, String>, Error = GrammarError> + Clone {
    kv_pair()
        .then(skip_space().ignore_then(kv_pair()).repeated())
        .map(|(first, rest)| {
            let mut attrs = BTreeMap::new();
            for (key, value) in std::iter::once(first).chain(rest) {
                attrs.insert(key, value);
            }
            attrs
        })
        .or_not()
        .map(Option::unwrap_or_default)
}

/// The optional `{...}` block; an absent block gives an empty map
pub fn attrs() -> impl Parser<char, BTreeMap<String, String>, Error = GrammarError> + Clone {
    just('{')
        .ignore_then(skip_space())
        .ignore_then(kv_pairs())
        .then_ignore(skip_space())
        .then_ignore(just('}'))
        .or_not()
        .map(Option::unwrap_or_default)
}
