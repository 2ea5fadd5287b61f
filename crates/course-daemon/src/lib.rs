//! Course finder CLI library exports.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations (serve, search, recommend, stats)

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
pub use commands::{
    load_settings, recommend_command, run_recommend, run_search, run_stats, search_command,
    start_server, stats_command,
};
