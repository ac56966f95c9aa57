//! Pstore CLI Binary
//!
//! Command-line interface for listing, filtering, and exporting Parameter Store values.

use clap::Parser;
use pstore::cli::{Cli, RunContext, RunOptions};
use pstore::config::{ConfigLoader, PstoreConfig};
use pstore::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors follow the same contract as every other failure.
        Err(e) if e.use_stderr() => {
            print!("{}", e.render());
            process::exit(1);
        }
        Err(e) => e.exit(),
    };

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(&logging_config) {
        fail(&e);
    }

    info!("pstore starting");

    let context = match RunContext::new(RunOptions::from_cli(&cli), &config) {
        Ok(ctx) => ctx,
        Err(e) => fail(&e),
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            print!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            fail(&e);
        }
    }
}

/// Errors are printed to stdout, then the process exits with status 1.
fn fail(e: &pstore::error::PstoreError) -> ! {
    println!("{}", pstore::cli::map_error(e));
    process::exit(1);
}

/// Build logging configuration from the config file and CLI flags.
/// Precedence: explicit log flags override `--debug`, which overrides the config file.
fn build_logging_config(cli: &Cli, config: &PstoreConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();
    if cli.debug {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    logging
}
