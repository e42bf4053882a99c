// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `dynroute batch` command implementation.
//!
//! Routes a list of queries through one shared cache, then writes an answers
//! transcript and a logs transcript. Each file is written independently: a
//! failure on one is reported and the other is still attempted.

use std::path::Path;

use colored::Colorize;
use dynroute_core::DynrouteError;
use dynroute_router::{QueryCache, RouteResult, TierRouter};
use tracing::{info, warn};

/// Default workload. The repeated leave-request query exercises the cache.
pub const EXAMPLE_QUERIES: [&str; 14] = [
    "2+2",
    "Translate 'Good morning' to Arabic",
    "Hi , Ai",
    "What is AI?",
    "Write a short paragraph about sleep benefits",
    "Write an email requesting a leave",
    "Explain how a car engine works",
    "6-month marketing plan for a startup",
    "Write an email requesting a leave",
    "Fix Java code with NullPointerException",
    "Summarize a story of The Tell-Tale Heart",
    "What is the core message in the following 30-word text about responsible AI: 'Developing artificial intelligence requires a deep commitment to fairness, transparency, and accountability to ensure technology serves all of humanity justly?",
    "Python code to print even numbers 1–10",
    "Solve 2x² + 3x - 5 = 0",
];

pub fn example_queries() -> Vec<String> {
    EXAMPLE_QUERIES.iter().map(|q| q.to_string()).collect()
}

/// Reads one query per non-blank line. Lines are used verbatim otherwise.
pub fn read_queries(path: &Path) -> Result<Vec<String>, DynrouteError> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// One answers-transcript entry. `index` is 1-based.
pub fn answer_entry(index: usize, query: &str, answer: &str) -> String {
    format!("Q {index}: {query}\n A {index}: {answer}\n\n\n\n")
}

pub fn answers_transcript(outcomes: &[(String, RouteResult)]) -> String {
    outcomes
        .iter()
        .enumerate()
        .map(|(i, (query, result))| answer_entry(i + 1, query, &result.answer))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Logs transcript. Queries whose log is empty are left out.
pub fn logs_transcript(outcomes: &[(String, RouteResult)]) -> String {
    outcomes
        .iter()
        .filter(|(_, result)| !result.logs.is_empty())
        .map(|(query, result)| format!("Logs for query '{query}':\n{}", result.log_text()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Routes every query in order, sharing one cache across the run.
pub async fn route_all(router: &TierRouter, queries: &[String]) -> Vec<(String, RouteResult)> {
    let cache = QueryCache::new();
    let mut outcomes = Vec::with_capacity(queries.len());

    for (i, query) in queries.iter().enumerate() {
        println!("{}", format!("Q {}: {query}", i + 1).bold());
        let result = router.route(query, &cache).await;
        println!("{}\n", result.answer);
        outcomes.push((query.clone(), result));
    }

    outcomes
}

pub async fn run_batch(
    router: &TierRouter,
    queries: &[String],
    answers_path: &Path,
    logs_path: &Path,
) -> Result<(), DynrouteError> {
    info!(queries = queries.len(), "starting batch run");
    let outcomes = route_all(router, queries).await;

    let answers = write_transcript(answers_path, &answers_transcript(&outcomes));
    let logs = write_transcript(logs_path, &logs_transcript(&outcomes));

    answers.and(logs)
}

fn write_transcript(path: &Path, content: &str) -> Result<(), DynrouteError> {
    match std::fs::write(path, content) {
        Ok(()) => {
            info!(path = %path.display(), "transcript written");
            Ok(())
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to write transcript");
            eprintln!("{}: failed to write {}: {e}", "error".red(), path.display());
            Err(DynrouteError::from(e))
        }
    }
}
