//! CLI route: single route table and run context. Dispatches to the parameter
//! source, the filter pipeline, and presentation.

use crate::aggregate::collect_pages;
use crate::config::PstoreConfig;
use crate::debug::DebugEcho;
use crate::error::PstoreError;
use crate::filter::{select, FilterMode, Matcher, Projection};
use crate::source::{ParameterSource, SsmSettings, SsmSource};
use crate::spinner::FetchSpinner;
use crate::types::Record;
use std::io::IsTerminal;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

use crate::cli::help::{command_arguments, command_name, MISSING_KEY_MESSAGE};
use crate::cli::parse::{Cli, Commands};
use crate::cli::presentation::{
    format_keys_output, format_list_json_output, format_list_table_output,
    format_provisioning_commands, format_value_output,
};

/// Invocation-wide options shared by every command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub profile: Option<String>,
    pub filter_mode: FilterMode,
    pub debug: bool,
    pub quiet: bool,
}

impl RunOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            profile: cli.profile.clone(),
            filter_mode: FilterMode::from_flags(cli.filter.as_deref(), cli.regex.as_deref()),
            debug: cli.debug,
            quiet: cli.quiet,
        }
    }

    /// Spinner and blank-line framing are shown only in normal mode.
    fn decorated(&self) -> bool {
        !self.quiet && !self.debug
    }
}

/// Runtime context for CLI execution: options, resolved connection settings,
/// and the parameter source (built on first use).
pub struct RunContext {
    options: RunOptions,
    settings: SsmSettings,
    echo: DebugEcho,
    runtime: tokio::runtime::Runtime,
    source: OnceLock<Arc<dyn ParameterSource>>,
}

impl RunContext {
    /// Create a run context that connects to Parameter Store when a command first needs it.
    pub fn new(options: RunOptions, config: &PstoreConfig) -> Result<Self, PstoreError> {
        Self::build(options, config, OnceLock::new())
    }

    /// Create a run context over an existing source.
    pub fn with_source(
        options: RunOptions,
        config: &PstoreConfig,
        source: Arc<dyn ParameterSource>,
    ) -> Result<Self, PstoreError> {
        Self::build(options, config, OnceLock::from(source))
    }

    fn build(
        options: RunOptions,
        config: &PstoreConfig,
        source: OnceLock<Arc<dyn ParameterSource>>,
    ) -> Result<Self, PstoreError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| PstoreError::ConfigError(format!("Failed to start runtime: {}", e)))?;
        let settings = config.ssm_settings(options.profile.as_deref());
        let color = echo_color(config.logging.color, std::io::stderr().is_terminal());
        let echo = DebugEcho::new(options.debug, color);
        Ok(Self {
            options,
            settings,
            echo,
            runtime,
            source,
        })
    }

    /// Profile the source was (or will be) opened with.
    pub fn profile(&self) -> &str {
        &self.settings.profile
    }

    /// Execute a CLI command via the single route table. Returns the text for stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, PstoreError> {
        info!(command = command_name(command), "Executing command");
        self.echo.arguments(&command_arguments(command));
        let body = match command {
            Commands::List { path, keys, format } => {
                self.handle_list(path.as_deref(), *keys, format)?
            }
            Commands::Cli { path } => self.handle_cli(path.as_deref())?,
            Commands::Get { key } => self.handle_get(key.as_deref())?,
        };
        if self.options.decorated() {
            Ok(format!("\n{}", body))
        } else {
            Ok(body)
        }
    }

    fn handle_list(
        &self,
        path: Option<&str>,
        keys_only: bool,
        format: &str,
    ) -> Result<String, PstoreError> {
        // The filter sees the same columns the chosen renderer prints.
        let projection = if keys_only && format != "json" {
            Projection::Key
        } else {
            Projection::KeyValue
        };
        let records = self.fetch_selected(path, projection)?;
        if format == "json" {
            format_list_json_output(&records)
        } else if keys_only {
            Ok(format_keys_output(&records))
        } else {
            Ok(format_list_table_output(&records))
        }
    }

    fn handle_cli(&self, path: Option<&str>) -> Result<String, PstoreError> {
        let records = self.fetch_selected(path, Projection::KeyValue)?;
        for record in &records {
            self.echo.record("Parameter Object", record);
        }
        Ok(format_provisioning_commands(&self.settings.profile, &records))
    }

    fn handle_get(&self, key: Option<&str>) -> Result<String, PstoreError> {
        let key = key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| PstoreError::MissingArgument(MISSING_KEY_MESSAGE.to_string()))?;
        let source = self.source()?;
        self.echo.get_request(key);
        let record = {
            let _spinner = FetchSpinner::start(&format!("Fetching {}", key), self.options.decorated());
            self.runtime.block_on(source.get(key))?
        };
        self.echo.record("Results", &record);
        Ok(format_value_output(&record))
    }

    /// Compile the filter, fetch everything under `path`, then filter and sort.
    fn fetch_selected(
        &self,
        path: Option<&str>,
        projection: Projection,
    ) -> Result<Vec<Record>, PstoreError> {
        let mode = &self.options.filter_mode;
        let matcher = Matcher::compile(mode)?;
        self.echo.matcher(&matcher);
        if !mode.is_none() {
            debug!(?mode, ?projection, "Filter active");
        }
        let records = self.fetch_path(path.unwrap_or("/"))?;
        Ok(select(records, &matcher, mode, projection, &self.echo))
    }

    fn fetch_path(&self, path: &str) -> Result<Vec<Record>, PstoreError> {
        let source = self.source()?;
        info!(path, source = source.source_name(), "Listing parameters");
        self.echo.list_request(path, self.settings.page_size);
        let _spinner = FetchSpinner::start(&format!("Fetching {}", path), self.options.decorated());
        self.runtime
            .block_on(collect_pages(source.list_pages(path), &self.echo))
    }

    fn source(&self) -> Result<Arc<dyn ParameterSource>, PstoreError> {
        if let Some(source) = self.source.get() {
            return Ok(Arc::clone(source));
        }
        self.echo.profile(&self.settings.profile);
        let connected: Arc<dyn ParameterSource> =
            Arc::new(self.runtime.block_on(SsmSource::connect(&self.settings))?);
        Ok(Arc::clone(self.source.get_or_init(|| connected)))
    }
}

/// Red debug echo only when configured and stderr is a terminal.
fn echo_color(configured: bool, stderr_is_terminal: bool) -> bool {
    configured && stderr_is_terminal
}
