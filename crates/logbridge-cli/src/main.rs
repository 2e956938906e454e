//! CLI entrypoint: write records to the platform logging subsystem.
//!
//! The tool's own diagnostics go to stderr, never into the log it writes to.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use logbridge::bridge;
use logbridge_core::config::DEFAULT_CATEGORY;
use logbridge_core::format::message_from_str;
use logbridge_core::{Bridge, BridgeError, LogHandle, Severity, Sink};

/// Write a message to the platform log.
#[derive(Debug, Parser)]
#[command(name = "logbridge")]
#[command(about = "Write messages to the platform logging subsystem")]
struct Cli {
    /// Severity tier: default, info, debug, error, fault.
    #[arg(short, long, default_value = "default")]
    severity: Severity,
    /// Reverse-DNS subsystem; records go to the default handle when omitted.
    #[arg(long)]
    subsystem: Option<String>,
    /// Category within the subsystem.
    #[arg(long, requires = "subsystem")]
    category: Option<String>,
    /// Echo each record to stderr as well.
    #[arg(long)]
    stderr: bool,
    /// Message words. Each stdin line becomes one record when omitted.
    message: Vec<String>,
}

fn resolve_handle(cli: &Cli) -> Result<LogHandle, BridgeError> {
    match cli.subsystem.as_deref() {
        Some(subsystem) => bridge().create_handle(
            subsystem,
            cli.category.as_deref().unwrap_or(DEFAULT_CATEGORY),
        ),
        None => Ok(bridge().default_handle()),
    }
}

fn collect_messages(words: &[String], input: impl BufRead) -> io::Result<Vec<String>> {
    if words.is_empty() {
        input.lines().collect()
    } else {
        Ok(vec![words.join(" ")])
    }
}

/// Emit each non-empty message; skipped lines and `--stderr` echoes go to `diag`.
fn emit_all<S: Sink>(
    bridge: &Bridge<S>,
    handle: LogHandle,
    severity: Severity,
    messages: &[String],
    echo: bool,
    diag: &mut impl Write,
) -> io::Result<usize> {
    let mut emitted = 0;
    for (line, text) in messages.iter().enumerate() {
        if text.is_empty() {
            writeln!(diag, "logbridge: skipping empty message (line {})", line + 1)?;
            continue;
        }
        bridge.emit_with(handle, severity, &message_from_str(text));
        if echo {
            writeln!(diag, "<{severity}> {text}")?;
        }
        emitted += 1;
    }
    Ok(emitted)
}

fn run(cli: &Cli) -> Result<usize, Box<dyn std::error::Error>> {
    let handle = resolve_handle(cli)?;
    let messages = collect_messages(&cli.message, io::stdin().lock())?;
    let emitted = emit_all(
        bridge(),
        handle,
        cli.severity,
        &messages,
        cli.stderr,
        &mut io::stderr().lock(),
    )?;
    Ok(emitted)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("logbridge: {err}");
            ExitCode::FAILURE
        }
    }
}
