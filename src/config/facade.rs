//! ConfigLoader: the single entry point that assembles layered configuration.

use crate::config::merge::builder_with_defaults;
use crate::config::sources::{environment, explicit_file, global_file};
use crate::config::PstoreConfig;
use crate::error::PstoreError;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global file, an optional explicit file, then environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<PstoreConfig, PstoreError> {
        let mut builder = builder_with_defaults()?;
        builder = global_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            builder = explicit_file::add_to_builder(builder, path)?;
        }
        builder = environment::add_to_builder(builder);

        let config: PstoreConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            PstoreError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;
        Ok(config)
    }

    /// Load a single file on top of defaults, ignoring the global file and environment.
    pub fn load_from_file(path: &Path) -> Result<PstoreConfig, PstoreError> {
        let builder = explicit_file::add_to_builder(builder_with_defaults()?, path)?;
        let config: PstoreConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
