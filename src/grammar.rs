//! Log-line grammar
//!
//! Each rule is a function returning a `chumsky` parser over `char`s, composed
//! leaves first:
//!
//! - [`charset`]: character classes (digit, word/hyphen, quoted-value, key)
//! - [`tokens`]: sentinels, whitespace skip, priority, quoted string
//! - [`tags`] and [`attrs`]: the optional bracket and brace sections
//! - [`line`]: the whole record plus the entry points
//!
//! Alternation is ordered and every optional section yields an empty container
//! rather than `None`.

pub mod attrs;
pub mod charset;
pub mod line;
pub mod tags;
pub mod tokens;

pub use attrs::{attr_key, attr_value, attrs, kv_pair, kv_pairs};
pub use charset::{digit, upper_alnum_underscore, word_hyphen, word_space_punct};
pub use line::{log_line, parse_log_line, LogLineParser};
pub use tags::{tag_atom, tag_list, tags};
pub use tokens::{end_sentinel, open_sentinel, priority, quoted_string, skip_space};
