//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use fibsvc_core::{DEFAULT_MAX_INDEX, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// fibsvc — Fibonacci lookups and listings against a persistent blacklist.
#[derive(Parser, Debug)]
#[command(name = "fibsvc", version, about)]
pub struct CliConfig {
    /// Blacklist file (shared with fibsvc-server's --blacklist-file).
    #[arg(
        long,
        global = true,
        env = "FIBSVC_BLACKLIST_FILE",
        default_value = "fibsvc_blacklist.json"
    )]
    pub blacklist_file: PathBuf,

    /// Largest index, or listing total, accepted.
    #[arg(long, global = true, env = "FIBSVC_MAX_INDEX", default_value_t = DEFAULT_MAX_INDEX)]
    pub max_index: u64,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print F(index) unless the index is blacklisted.
    Get {
        #[arg(allow_hyphen_values = true)]
        index: i64,
    },

    /// Print one page of F(1..=n) with blacklisted indices left out.
    List {
        /// Length of the unfiltered sequence.
        #[arg(short, allow_hyphen_values = true)]
        n: i64,

        /// Page number (1-based).
        #[arg(long, default_value_t = DEFAULT_PAGE, allow_hyphen_values = true)]
        page: i64,

        /// Page size.
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, allow_hyphen_values = true)]
        page_size: i64,
    },

    /// Manage the blacklist.
    Blacklist {
        #[command(subcommand)]
        action: BlacklistAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum BlacklistAction {
    /// Add a number.
    Add {
        #[arg(allow_hyphen_values = true)]
        number: i64,
    },
    /// Remove a number.
    Remove {
        #[arg(allow_hyphen_values = true)]
        number: i64,
    },
    /// Print every blacklisted number.
    Show,
}

impl CliConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
