// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `dynroute ask` command implementation.

use std::time::{Duration, Instant};

use colored::Colorize;
use dynroute_core::DynrouteError;
use dynroute_router::{QueryCache, RouteResult, TierRouter};

/// Routes one query with a fresh cache and prints the outcome.
pub async fn run_ask(router: &TierRouter, query: &str, show_logs: bool) -> Result<(), DynrouteError> {
    let cache = QueryCache::new();
    let (result, elapsed) = timed_route(router, query, &cache).await;
    print_outcome(&result, elapsed, show_logs);
    Ok(())
}

/// Routes `query` and measures wall time.
pub async fn timed_route(
    router: &TierRouter,
    query: &str,
    cache: &QueryCache,
) -> (RouteResult, Duration) {
    let started = Instant::now();
    let result = router.route(query, cache).await;
    (result, started.elapsed())
}

/// Prints classification, elapsed time, answer, and optionally the log.
pub fn print_outcome(result: &RouteResult, elapsed: Duration, show_logs: bool) {
    println!("{} {}", "classification:".dimmed(), classification_label(result).bold());
    println!("{} {}", "time:".dimmed(), format_elapsed(elapsed));
    println!();
    if result.is_exhausted() {
        println!("{}", result.answer.red());
    } else {
        println!("{}", result.answer);
    }

    if show_logs && !result.logs.is_empty() {
        println!();
        for line in &result.logs {
            println!("  {}", line.dimmed());
        }
    }
}

/// The detected category, or "cached" when the answer came from the cache.
pub fn classification_label(result: &RouteResult) -> String {
    match result.category() {
        Some(category) => category.to_string(),
        None if result.is_cache_hit() => "cached".to_string(),
        None => "unknown".to_string(),
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(logs: &[&str]) -> RouteResult {
        RouteResult {
            answer: "4".into(),
            logs: logs.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn label_from_marker_line() {
        let r = result(&["Query classified as: Simple", "Success with Simple model!"]);
        assert_eq!(classification_label(&r), "Simple");
    }

    #[test]
    fn label_for_cache_hit() {
        assert_eq!(classification_label(&result(&["Fetched from cache."])), "cached");
    }

    #[test]
    fn elapsed_has_two_decimals() {
        assert_eq!(format_elapsed(Duration::from_millis(1234)), "1.23s");
        assert_eq!(format_elapsed(Duration::ZERO), "0.00s");
    }
}
