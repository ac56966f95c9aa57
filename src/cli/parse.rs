//! CLI parse: clap types for pstore. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AWS Parameter Store Manager
#[derive(Parser, Debug)]
#[command(name = "pstore", version)]
#[command(about = "AWS Parameter Store Manager")]
#[command(
    long_about = "Simplifies working with Parameter Store via the AWS CLI.\n\n\
Leverages the official AWS SDK under the hood, which means that all of the standard AWS CLI \
credential files and environment variables can be used to configure this tool.\n\n\
Regular expression syntax can be found at https://docs.rs/regex/latest/regex/#syntax."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// The AWS CLI profile to use for the request [default: default]
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Filter the returned names and values by case-insensitive substring
    #[arg(short = 'f', long, global = true)]
    pub filter: Option<String>,

    /// Filter the returned names and values by regular expression
    #[arg(short = 'r', long, global = true)]
    pub regex: Option<String>,

    /// Echo intermediate values and enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Do not display any messages while fetching data
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Configuration file path (layered over the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List values stored in Parameter Store
    List {
        /// Path prefix to list recursively
        path: Option<String>,
        /// Show keys only; filters then match against the key alone
        #[arg(long)]
        keys: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Export the selected Parameter Store values as AWS CLI commands
    Cli {
        /// Path prefix to export recursively
        path: Option<String>,
    },
    /// Get the value of a single Parameter Store key
    Get {
        /// Full key name
        key: Option<String>,
    },
}
