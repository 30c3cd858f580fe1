//! Testing utilities for log record assertions
//!
//! A fluent API for checking parsed records, so grammar tests read as a list of
//! expectations rather than a pile of `assert_eq!`s.
//!
//! # Example
//!
//! ```rust
//! use semistruct::testing::assert_log;
//!
//! let log = semistruct::parse_log_line("!< 2 [a:b] { K=v } >!").unwrap();
//!
//! assert_log(&log)
//!     .priority(2)
//!     .tags(&["a", "b"])
//!     .attr("K", "v");
//! ```

mod assertions;

pub use assertions::{assert_log, LogAssertion};
