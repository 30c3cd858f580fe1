//! Command-line interface for semistruct
//! Parses semi-structured log lines into JSON records, and formats JSON records back into log lines.
//!
//! Usage:
//!   semistruct parse `<line>`                               - Parse one line and print it as JSON
//!   semistruct ingest [`<path>`] [--output `<format>`] [--strict] - Parse a file (or stdin) line by line
//!   semistruct format [`<path>`]                            - Turn JSON records into canonical log lines

use clap::{Arg, ArgAction, ArgMatches, Command};
use semistruct::ingest::{LineOutcome, LineReader};
use semistruct::{parse_log_line, IngestOptions, Log};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("semistruct")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing semi-structured log lines")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Diagnostic filter used when RUST_LOG is unset")
                .default_value("warn"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a single log line and print it as JSON")
                .arg(
                    Arg::new("line")
                        .help("The log line to parse")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("ingest")
                .about("Parse log lines from a file or stdin")
                .arg(
                    Arg::new("path")
                        .help("Path to the log file (stdin when omitted)")
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output format for accepted lines")
                        .value_parser(["json", "canonical"])
                        .default_value("json"),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Exit with status 1 if any line was rejected")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("keep-blank")
                        .long("keep-blank")
                        .help("Treat blank lines as rejected instead of skipping them")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-trim")
                        .long("no-trim")
                        .help("Do not strip trailing whitespace before parsing")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("max-line-length")
                        .long("max-line-length")
                        .help("Skip lines longer than this many bytes")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Format JSON records (one per line) as canonical log lines")
                .arg(
                    Arg::new("path")
                        .help("Path to the JSON lines file (stdin when omitted)")
                        .index(1),
                ),
        )
        .get_matches();

    init_tracing(&matches);

    let code = match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let line = parse_matches.get_one::<String>("line").map(String::as_str).unwrap_or_default();
            handle_parse_command(line)
        }
        Some(("ingest", ingest_matches)) => handle_ingest_command(ingest_matches),
        Some(("format", format_matches)) => {
            handle_format_command(format_matches.get_one::<String>("path"))
        }
        _ => unreachable!(),
    };

    std::process::exit(code);
}

fn init_tracing(matches: &ArgMatches) {
    let level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("warn");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_input(path: Option<&String>) -> Box<dyn BufRead> {
    match path {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("Error opening {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Box::new(BufReader::new(io::stdin())),
    }
}

fn to_json(log: &Log) -> String {
    serde_json::to_string(log).unwrap_or_else(|e| {
        eprintln!("Error serializing record: {}", e);
        std::process::exit(1);
    })
}

/// Handle the parse command
fn handle_parse_command(line: &str) -> i32 {
    match parse_log_line(line) {
        Ok(log) => {
            println!("{}", to_json(&log));
            0
        }
        Err(e) => {
            eprintln!("Parse error: {}", e);
            1
        }
    }
}

/// Handle the ingest command
fn handle_ingest_command(matches: &ArgMatches) -> i32 {
    let options = IngestOptions {
        skip_blank_lines: !matches.get_flag("keep-blank"),
        trim_trailing_whitespace: !matches.get_flag("no-trim"),
        max_line_length: matches.get_one::<usize>("max-line-length").copied(),
    };
    let canonical = matches.get_one::<String>("output").map(String::as_str) == Some("canonical");
    let strict = matches.get_flag("strict");

    let mut reader = LineReader::new(open_input(matches.get_one::<String>("path")), options);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in reader.by_ref() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        };

        if let LineOutcome::Parsed(log) = &line.outcome {
            let rendered = if canonical { log.to_string() } else { to_json(log) };
            if let Err(e) = writeln!(out, "{}", rendered) {
                eprintln!("Error writing output: {}", e);
                return 1;
            }
        }
    }

    let stats = reader.stats();
    stats.log_summary();

    if strict && stats.rejected > 0 {
        eprintln!("{} of {} lines rejected", stats.rejected, stats.total);
        1
    } else {
        0
    }
}

/// Handle the format command
fn handle_format_command(path: Option<&String>) -> i32 {
    let mut failures = 0;

    for (index, line) in open_input(path).lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                return 1;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Log>(&line) {
            Ok(log) => println!("{}", log),
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "invalid record");
                eprintln!("Line {}: {}", index + 1, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        1
    } else {
        0
    }
}
