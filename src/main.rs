use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use planner_search::SearchOptions;

mod cli;
use cli::commands::{run_inspect, run_search, run_suggest, SearchArgs};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose).and_then(|()| run(cli)) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr. `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set tracing subscriber")
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            data,
            query,
            scope,
            limit,
            threshold,
            include_completed,
            config,
            json,
        } => {
            let mut options = SearchOptions::default()
                .with_scope(scope.into())
                .with_include_completed(include_completed);
            if let Some(limit) = limit {
                options = options.with_limit(limit);
            }
            if let Some(threshold) = threshold {
                options = options.with_threshold(threshold);
            }
            run_search(SearchArgs {
                data: &data,
                query: &query,
                options,
                config: config.as_deref(),
                json,
            })
        }
        Commands::Suggest {
            data,
            partial,
            config,
            json,
        } => run_suggest(&data, &partial, config.as_deref(), json),
        Commands::Inspect { data, config } => run_inspect(&data, config.as_deref()),
    }
}
