//! Schema definitions for the mockgen framework.
//!
//! A configuration file declares how many rows to produce and an ordered
//! list of column specifications:
//!
//! ```yaml
//! num_rows: 100
//! seed: 42
//! schema:
//!   - name: id
//!     type: integer
//!     generation:
//!       start: 1
//!       step: 1
//!   - name: email
//!     type: string
//!     generation:
//!       faker: email
//! ```

use crate::params::GenerationParams;
use crate::types::{ColumnType, UnsupportedType};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The schema declares no columns
    #[error("Schema must declare at least one column")]
    EmptySchema,

    /// Two columns share a name
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),
}

// ============================================================================
// Column Specification
// ============================================================================

/// One column of the output table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ColumnSpec {
    /// Column name, unique within a schema
    pub name: String,

    /// Raw type tag, resolved with [`ColumnSpec::column_type`]
    #[serde(rename = "type")]
    pub type_name: String,

    /// Type-specific generation parameters
    #[serde(default)]
    pub generation: GenerationParams,
}

impl ColumnSpec {
    /// Create a new column specification.
    pub fn new(
        name: impl Into<String>,
        column_type: ColumnType,
        generation: GenerationParams,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: column_type.as_str().to_string(),
            generation,
        }
    }

    /// Create a column specification from a raw type tag.
    pub fn with_type_name(
        name: impl Into<String>,
        type_name: impl Into<String>,
        generation: GenerationParams,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            generation,
        }
    }

    /// Resolve the declared type tag.
    pub fn column_type(&self) -> Result<ColumnType, UnsupportedType> {
        self.type_name.parse()
    }
}

// ============================================================================
// Configuration File
// ============================================================================

/// A parsed configuration file.
///
/// Provides the row count and the ordered column specifications consumed
/// by the generator.
#[derive(Debug, Clone, Deserialize)]
pub struct MockConfig {
    /// Number of rows every column must contain
    pub num_rows: usize,

    /// Optional seed for reproducible output
    #[serde(default)]
    pub seed: Option<u64>,

    /// Column specifications in declaration order
    pub schema: Vec<ColumnSpec>,
}

impl MockConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// `YYYY-MM-DD` parameter values load as dates whether or not they are
    /// quoted; see [`ParamValue::from_yaml`](crate::ParamValue::from_yaml).
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: MockConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check structural invariants that do not depend on column types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schema.is_empty() {
            return Err(ConfigError::EmptySchema);
        }
        let mut seen = HashSet::new();
        for column in &self.schema {
            if !seen.insert(column.name.as_str()) {
                return Err(ConfigError::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(())
    }

    /// Get a column specification by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnSpec> {
        self.schema.iter().find(|c| c.name == name)
    }

    /// All column names in declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        self.schema.iter().map(|c| c.name.as_str()).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
