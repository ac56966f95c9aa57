//! Configuration System
//!
//! Layered configuration for connection defaults and logging. Sources, lowest
//! priority first: built-in defaults, the global config file, an explicit
//! `--config` file, and `PSTORE__*` environment variables. Command-line flags are
//! applied on top by the CLI.

use crate::logging::LoggingConfig;
use crate::source::ssm::{SsmSettings, MAX_PAGE_SIZE};
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::environment::ENV_PREFIX;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PstoreConfig {
    /// Parameter Store connection settings
    #[serde(default)]
    pub aws: AwsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings. Credentials are never read here; the SDK resolves them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsConfig {
    /// Profile used when `--profile` is not given
    #[serde(default)]
    pub profile: Option<String>,

    /// Region override; otherwise the profile's region applies
    #[serde(default)]
    pub region: Option<String>,

    /// Alternate endpoint, e.g. a local emulator
    #[serde(default)]
    pub endpoint_url: Option<String>,

    /// Results requested per list call (1-10)
    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

fn default_page_size() -> i32 {
    MAX_PAGE_SIZE
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            profile: None,
            region: None,
            endpoint_url: None,
            page_size: default_page_size(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Aws(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Aws(msg) => write!(f, "aws: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl AwsConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(format!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.page_size
            ));
        }
        if let Some(ref profile) = self.profile {
            if profile.trim().is_empty() {
                return Err("profile cannot be empty".to_string());
            }
        }
        if let Some(ref endpoint) = self.endpoint_url {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(format!(
                    "endpoint_url must start with http:// or https://, got {}",
                    endpoint
                ));
            }
        }
        Ok(())
    }
}

impl PstoreConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if let Err(e) = self.aws.validate() {
            errors.push(ValidationError::Aws(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Connection settings with the `--profile` flag applied.
    ///
    /// Profile precedence: flag, then config file, then `default`.
    pub fn ssm_settings(&self, profile_flag: Option<&str>) -> SsmSettings {
        let profile = profile_flag
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .or_else(|| self.aws.profile.clone())
            .unwrap_or_else(|| "default".to_string());
        SsmSettings {
            profile,
            region: self.aws.region.clone(),
            endpoint_url: self.aws.endpoint_url.clone(),
            page_size: self.aws.page_size,
        }
    }
}
