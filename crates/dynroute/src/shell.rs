// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `dynroute shell` command implementation.
//!
//! Interactive REPL with colored prompt and readline history. The query
//! cache lives for the session, so repeating a query is answered from it.

use colored::Colorize;
use dynroute_core::DynrouteError;
use dynroute_router::{QueryCache, TierRouter};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::ask::{print_outcome, timed_route};
use crate::batch::EXAMPLE_QUERIES;

/// A parsed line of shell input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Help,
    ListExamples,
    Example(usize),
    ToggleLogs,
    ClearCache,
    Query(&'a str),
    Invalid(String),
    Blank,
}

/// Commands are recognized on the trimmed line; queries are passed through
/// verbatim, since cache identity is the exact query text.
fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Blank;
    }
    if !trimmed.starts_with('/') {
        return Input::Query(line);
    }

    let mut parts = trimmed.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let arg = parts.next();

    match (command, arg) {
        ("/quit" | "/exit", _) => Input::Quit,
        ("/help", _) => Input::Help,
        ("/logs", _) => Input::ToggleLogs,
        ("/clear", _) => Input::ClearCache,
        ("/examples", None) => Input::ListExamples,
        ("/examples", Some(n)) => match n.parse::<usize>() {
            Ok(n) if (1..=EXAMPLE_QUERIES.len()).contains(&n) => Input::Example(n),
            _ => Input::Invalid(format!(
                "example number must be between 1 and {}",
                EXAMPLE_QUERIES.len()
            )),
        },
        (other, _) => Input::Invalid(format!("unknown command {other}, try /help")),
    }
}

fn print_help() {
    println!("  {}       list example queries", "/examples".yellow());
    println!("  {}     route example N", "/examples N".yellow());
    println!("  {}           toggle the diagnostic log", "/logs".yellow());
    println!("  {}          forget cached answers", "/clear".yellow());
    println!("  {}           exit", "/quit".yellow());
}

/// Runs the `dynroute shell` interactive REPL.
pub async fn run_shell(router: &TierRouter) -> Result<(), DynrouteError> {
    let cache = QueryCache::new();
    let mut show_logs = false;

    let mut rl = DefaultEditor::new()
        .map_err(|e| DynrouteError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "dynroute shell".bold().green());
    println!("Type {} for commands, {} to exit.\n", "/help".yellow(), "/quit".yellow());

    let prompt = format!("{}> ", "dynroute".green());
    loop {
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        };

        let query = match parse_input(&line) {
            Input::Blank => continue,
            Input::Quit => break,
            Input::Help => {
                print_help();
                continue;
            }
            Input::ListExamples => {
                for (i, q) in EXAMPLE_QUERIES.iter().enumerate() {
                    println!("  {:>2}. {q}", i + 1);
                }
                continue;
            }
            Input::ToggleLogs => {
                show_logs = !show_logs;
                println!("diagnostic log {}", if show_logs { "on" } else { "off" });
                continue;
            }
            Input::ClearCache => {
                let dropped = cache.len();
                cache.clear();
                println!("cleared {dropped} cached answer(s)");
                continue;
            }
            Input::Invalid(message) => {
                eprintln!("{}: {message}", "error".red());
                continue;
            }
            Input::Example(n) => EXAMPLE_QUERIES[n - 1],
            Input::Query(q) => q,
        };

        let _ = rl.add_history_entry(line.as_str());
        debug!(query, "routing shell query");

        let (result, elapsed) = timed_route(router, query, &cache).await;
        print_outcome(&result, elapsed, show_logs);
        println!();
    }

    Ok(())
}
