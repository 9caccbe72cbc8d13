//! Validate command handler.

use crate::commands::load_config;
use crate::ConfigOpts;
use mock_core::ColumnSpec;
use mock_generator::{validate_schema, FakerRegistry};
use serde::Serialize;

/// One failed column in a validation report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidationIssue {
    pub column: Option<String>,
    pub error: String,
}

/// Check every column against the built-in faker registry.
pub fn validate_columns(schema: &[ColumnSpec]) -> Vec<ValidationIssue> {
    validate_schema(schema, &FakerRegistry::builtin())
        .into_iter()
        .map(|e| ValidationIssue {
            column: e.column().map(str::to_string),
            error: e.to_string(),
        })
        .collect()
}

/// Run the validate command.
pub fn run_validate(config_opts: ConfigOpts, json: bool) -> anyhow::Result<()> {
    let config = load_config(&config_opts.config)?;
    let issues = validate_columns(&config.schema);

    if json {
        println!("{}", serde_json::to_string(&issues)?);
    } else if issues.is_empty() {
        println!(
            "{}: {} columns OK",
            config_opts.config.display(),
            config.schema.len()
        );
    } else {
        for issue in &issues {
            println!("{}", issue.error);
        }
    }

    if !issues.is_empty() {
        anyhow::bail!(
            "{} of {} columns failed validation",
            issues.len(),
            config.schema.len()
        );
    }
    Ok(())
}
