//! Line-oriented ingestion
//!
//! [`LineReader`] walks any [`BufRead`] one line at a time and parses each line
//! independently. Rejected lines are reported, never repaired: the caller
//! decides whether to drop, quarantine or forward them.

use std::io::{self, BufRead};

use serde::Deserialize;

use crate::error::ParseError;
use crate::grammar::LogLineParser;
use crate::log::Log;

/// How input lines are prepared before parsing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    /// Skip lines that are empty after trimming instead of rejecting them
    pub skip_blank_lines: bool,
    /// Strip trailing whitespace (including `\r`) before parsing
    pub trim_trailing_whitespace: bool,
    /// Lines longer than this many bytes are skipped without parsing
    pub max_line_length: Option<usize>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        IngestOptions {
            skip_blank_lines: true,
            trim_trailing_whitespace: true,
            max_line_length: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    TooLong { length: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Parsed(Log),
    Rejected(ParseError),
    Skipped(SkipReason),
}

/// One input line and what became of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// 1-based
    pub line_number: usize,
    pub text: String,
    pub outcome: LineOutcome,
}

/// Running counts over an ingestion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub total: usize,
    pub parsed: usize,
    pub rejected: usize,
    pub skipped: usize,
}

impl IngestStats {
    fn record(&mut self, outcome: &LineOutcome) {
        self.total += 1;
        match outcome {
            LineOutcome::Parsed(_) => self.parsed += 1,
            LineOutcome::Rejected(_) => self.rejected += 1,
            LineOutcome::Skipped(_) => self.skipped += 1,
        }
    }

    /// Emit the end-of-ingestion summary event
    pub fn log_summary(&self) {
        tracing::info!(
            total = self.total,
            parsed = self.parsed,
            rejected = self.rejected,
            skipped = self.skipped,
            "ingestion finished"
        );
    }
}

/// Iterator of [`ParsedLine`]s over a reader
pub struct LineReader<R> {
    lines: io::Lines<R>,
    options: IngestOptions,
    parser: LogLineParser,
    line_number: usize,
    stats: IngestStats,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R, options: IngestOptions) -> Self {
        LineReader {
            lines: reader.lines(),
            options,
            parser: LogLineParser::new(),
            line_number: 0,
            stats: IngestStats::default(),
        }
    }

    /// Counts for the lines yielded so far
    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    fn classify(&self, raw: &str) -> LineOutcome {
        let text = if self.options.trim_trailing_whitespace {
            raw.trim_end()
        } else {
            raw
        };

        if let Some(max) = self.options.max_line_length {
            if text.len() > max {
                return LineOutcome::Skipped(SkipReason::TooLong { length: text.len() });
            }
        }

        if self.options.skip_blank_lines && text.trim().is_empty() {
            return LineOutcome::Skipped(SkipReason::Blank);
        }

        match self.parser.parse(text) {
            Ok(log) => LineOutcome::Parsed(log),
            Err(err) => LineOutcome::Rejected(err),
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<ParsedLine, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = match self.lines.next()? {
            Ok(raw) => raw,
            Err(err) => return Some(Err(IngestError::Io(err))),
        };
        self.line_number += 1;

        let outcome = self.classify(&raw);
        match &outcome {
            LineOutcome::Parsed(log) => {
                tracing::debug!(line = self.line_number, priority = log.priority(), "parsed log line");
            }
            LineOutcome::Rejected(err) => {
                tracing::warn!(line = self.line_number, error = %err, "rejected log line");
            }
            LineOutcome::Skipped(reason) => {
                tracing::debug!(line = self.line_number, ?reason, "skipped log line");
            }
        }
        self.stats.record(&outcome);

        Some(Ok(ParsedLine {
            line_number: self.line_number,
            text: raw,
            outcome,
        }))
    }
}

/// Everything gathered from one reader
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub logs: Vec<Log>,
    /// Line number and reason for each rejected line
    pub rejected: Vec<(usize, ParseError)>,
    pub stats: IngestStats,
}

/// Parse every line of `reader`, stopping only on an I/O error
pub fn ingest_all<R: BufRead>(reader: R, options: IngestOptions) -> Result<IngestReport, IngestError> {
    let mut lines = LineReader::new(reader, options);
    let mut report = IngestReport::default();

    for line in lines.by_ref() {
        let line = line?;
        match line.outcome {
            LineOutcome::Parsed(log) => report.logs.push(log),
            LineOutcome::Rejected(err) => report.rejected.push((line.line_number, err)),
            LineOutcome::Skipped(_) => {}
        }
    }

    report.stats = lines.stats();
    report.stats.log_summary();
    Ok(report)
}
