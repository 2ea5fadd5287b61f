//! CLI argument parsing for the course finder.
//!
//! CLI flags override all other config sources.

use clap::{Parser, Subcommand};

/// Course Finder
///
/// Search and recommend online courses from a CSV catalog.
#[derive(Parser, Debug)]
#[command(name = "course-daemon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/course-finder/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Override HTTP port
        #[arg(short, long)]
        port: Option<u16>,

        /// Override bind host
        #[arg(long)]
        host: Option<String>,

        /// Override dataset path
        #[arg(short, long)]
        dataset: Option<String>,
    },

    /// Keyword search over course titles
    Search {
        /// Text to look for (case-insensitive)
        term: String,

        /// Override dataset path
        #[arg(short, long)]
        dataset: Option<String>,

        /// Keep only the N most subscribed matches
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Courses similar to an exact title
    Recommend {
        /// Exact course title
        title: String,

        /// Override dataset path
        #[arg(short, long)]
        dataset: Option<String>,

        /// Number of recommendations (default from config)
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },

    /// Print dashboard statistics
    Stats {
        /// Override dataset path
        #[arg(short, long)]
        dataset: Option<String>,
    },
}
