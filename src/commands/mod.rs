//! Command handlers.
//!
//! This module contains handlers for the generate, validate and fakers commands.

pub mod fakers;
pub mod generate;
pub mod validate;

use anyhow::Context;
use mock_core::MockConfig;
use std::path::Path;

/// Load and structurally validate a configuration file.
pub fn load_config(path: &Path) -> anyhow::Result<MockConfig> {
    let config = MockConfig::from_file(path)
        .with_context(|| format!("Failed to load config file: {}", path.display()))?;
    tracing::debug!(
        "Loaded {} columns, {} rows from {}",
        config.schema.len(),
        config.num_rows,
        path.display()
    );
    Ok(config)
}
