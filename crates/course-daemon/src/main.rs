//! Course Finder
//!
//! Keyword search, title-similarity recommendations, and aggregate
//! statistics over a CSV catalog of online courses.
//!
//! # Usage
//!
//! ```bash
//! course-daemon serve [--port PORT] [--host HOST] [--dataset PATH]
//! course-daemon search <TERM> [--limit N]
//! course-daemon recommend <TITLE> [--top-k K]
//! course-daemon stats
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/course-finder/config.toml)
//! 3. Environment variables (COURSE_*)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use course_daemon::{run_recommend, run_search, run_stats, start_server, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let log_level = cli.log_level.as_deref();

    match cli.command {
        Commands::Serve {
            port,
            host,
            dataset,
        } => {
            start_server(config, port, host.as_deref(), dataset.as_deref(), log_level).await?;
        }
        Commands::Search {
            term,
            dataset,
            limit,
        } => {
            let output = run_search(config, dataset.as_deref(), log_level, &term, limit)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Recommend {
            title,
            dataset,
            top_k,
        } => {
            let output = run_recommend(config, dataset.as_deref(), log_level, &title, top_k)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Stats { dataset } => {
            let output = run_stats(config, dataset.as_deref(), log_level)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
