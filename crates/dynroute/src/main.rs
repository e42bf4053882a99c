// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dynroute - route each query to the cheapest model tier that can answer it.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod ask;
mod batch;
mod shell;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dynroute_config::DynrouteConfig;
use dynroute_core::{DynrouteError, ProviderAdapter};
use dynroute_huggingface::HuggingFaceProvider;
use dynroute_router::{TierEndpoints, TierRouter};

/// Dynroute - complexity-tiered LLM query router.
#[derive(Parser, Debug)]
#[command(name = "dynroute", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Route a single query and print the answer.
    Ask {
        /// The query text.
        query: String,
        /// Also print the diagnostic log.
        #[arg(long)]
        logs: bool,
    },
    /// Route a list of queries and write answer and log transcripts.
    Batch {
        /// Answers transcript path (default from config).
        #[arg(long, value_name = "PATH")]
        answers: Option<PathBuf>,
        /// Logs transcript path (default from config).
        #[arg(long, value_name = "PATH")]
        logs: Option<PathBuf>,
        /// Read queries from this file, one per non-blank line.
        #[arg(long, value_name = "PATH")]
        queries_file: Option<PathBuf>,
    },
    /// Launch an interactive REPL session.
    Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => dynroute_config::load_and_validate_path(path),
        None => dynroute_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            dynroute_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.general.normalized_log_level());

    if let Err(e) = run(cli.command, &config).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(command: Commands, config: &DynrouteConfig) -> Result<(), DynrouteError> {
    let router = build_router(config)?;

    match command {
        Commands::Ask { query, logs } => ask::run_ask(&router, &query, logs).await,
        Commands::Batch {
            answers,
            logs,
            queries_file,
        } => {
            let queries = match queries_file {
                Some(path) => batch::read_queries(&path)?,
                None => batch::example_queries(),
            };
            let answers = answers.unwrap_or_else(|| PathBuf::from(&config.batch.answers_path));
            let logs = logs.unwrap_or_else(|| PathBuf::from(&config.batch.logs_path));
            batch::run_batch(&router, &queries, &answers, &logs).await
        }
        Commands::Shell => shell::run_shell(&router).await,
    }
}

/// Binds the Hugging Face endpoint to all three tiers.
///
/// Fails when no API key is available, before any query is routed.
fn build_router(config: &DynrouteConfig) -> Result<TierRouter, DynrouteError> {
    let provider: Arc<dyn ProviderAdapter> = Arc::new(HuggingFaceProvider::new(config)?);
    Ok(TierRouter::from_endpoints(TierEndpoints::from_config(
        provider,
        &config.tiers,
    )))
}

/// Initialize tracing with an EnvFilter. Output goes to stderr so stdout
/// carries only answers.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

/// Default filter when `RUST_LOG` is unset: our crates at `log_level`,
/// everything else at warn.
fn filter_directive(log_level: &str) -> String {
    format!("dynroute={log_level},warn")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Only jemalloc supports advancing the epoch.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn parses_ask_with_global_config() {
        let cli = Cli::try_parse_from([
            "dynroute", "ask", "What is AI?", "--logs", "--config", "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        match cli.command {
            Commands::Ask { query, logs } => {
                assert_eq!(query, "What is AI?");
                assert!(logs);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_batch_overrides() {
        let cli = Cli::try_parse_from([
            "dynroute",
            "batch",
            "--answers",
            "out/a.txt",
            "--queries-file",
            "queries.txt",
        ])
        .unwrap();
        match cli.command {
            Commands::Batch {
                answers,
                logs,
                queries_file,
            } => {
                assert_eq!(answers, Some(PathBuf::from("out/a.txt")));
                assert_eq!(logs, None);
                assert_eq!(queries_file, Some(PathBuf::from("queries.txt")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["dynroute"]).is_err());
    }

    #[test]
    fn padded_log_level_yields_valid_filter() {
        use tracing_subscriber::EnvFilter;

        let config = dynroute_config::load_and_validate_str("[general]\nlog_level = \" DEBUG \"\n")
            .unwrap();
        let directive = filter_directive(&config.general.normalized_log_level());
        assert_eq!(directive, "dynroute=debug,warn");
        assert!(EnvFilter::try_new(&directive).is_ok());
    }

    #[test]
    fn build_router_with_configured_key() {
        let mut config = DynrouteConfig::default();
        config.huggingface.api_key = Some("hf_test".into());
        assert!(build_router(&config).is_ok());
    }
}
