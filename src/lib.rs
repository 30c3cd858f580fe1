//! # semistruct
//!
//! A parser for semi-structured, single-line log records of the form
//!
//! ```text
//! !< 2 [cl7323:featstore:sess_fun] { ONE=two DOS="wah=hh-77" } >!
//! ```
//!
//! into a typed [`Log`]: a priority digit, an ordered list of tags and a map of
//! attributes. The grammar lives in [`grammar`], built from `chumsky`
//! combinators; [`ingest`] runs it over line-oriented input.
//!
//! ## Testing
//!
//! Record checks in tests go through the fluent helpers in [`testing`].

pub mod error;
pub mod grammar;
pub mod ingest;
pub mod log;
pub mod testing;

pub use error::ParseError;
pub use grammar::{parse_log_line, LogLineParser};
pub use ingest::{ingest_all, IngestOptions, IngestReport, IngestStats, LineOutcome, LineReader};
pub use log::Log;
