//! Integration tests for configuration feeding the run context.

use pstore::cli::{Commands, RunContext, RunOptions};
use pstore::config::ConfigLoader;
use pstore::source::{MemorySource, ParameterSource};
use pstore::types::{ParameterKind, Record};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_profile_from_config_file_reaches_commands() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("pstore.toml");
    std::fs::write(&config_file, "[aws]\nprofile = \"staging\"\n").unwrap();
    let config = ConfigLoader::load_from_file(&config_file).unwrap();

    let source: Arc<dyn ParameterSource> = Arc::new(MemorySource::from_records(vec![
        Record::new("/x", "y", ParameterKind::String, 1),
    ]));
    let options = RunOptions {
        quiet: true,
        ..RunOptions::default()
    };
    let ctx = RunContext::with_source(options, &config, source).unwrap();
    assert_eq!(ctx.profile(), "staging");

    let output = ctx.execute(&Commands::Cli { path: None }).unwrap();
    assert!(output.contains("--profile staging \\\n"));
}

#[test]
fn test_profile_flag_overrides_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("pstore.toml");
    std::fs::write(&config_file, "[aws]\nprofile = \"staging\"\n").unwrap();
    let config = ConfigLoader::load_from_file(&config_file).unwrap();

    let options = RunOptions {
        profile: Some("prod".to_string()),
        quiet: true,
        ..RunOptions::default()
    };
    let ctx = RunContext::with_source(options, &config, Arc::new(MemorySource::default())).unwrap();
    assert_eq!(ctx.profile(), "prod");
}
