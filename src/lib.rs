//! mockgen library
//!
//! Generates tabular mock data from a declarative YAML schema.
//!
//! # Crates
//!
//! - `mock_core` - schema, parameter and table types
//! - `mock_generator` - per-type column generators and table assembly
//! - `mock_export` - text preview and CSV/JSONL writers
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate 100 rows and print the first five
//! mockgen generate --config config.yaml --rows 100
//!
//! # Reproducible output written to CSV
//! mockgen generate --config config.yaml --seed 42 --output users.csv
//!
//! # Check a schema without generating anything
//! mockgen validate --config config.yaml
//!
//! # List available faker methods
//! mockgen fakers
//! ```

use clap::Parser;
use std::path::PathBuf;

pub mod commands;

// Re-export the workspace crates for convenience
pub use mock_core as core;
pub use mock_export as export;
pub use mock_generator as generator;

/// Where to load the schema from.
#[derive(Parser, Clone, Debug)]
pub struct ConfigOpts {
    /// Path to the YAML configuration file
    #[arg(long, short = 'c', default_value = "config.yaml", env = "MOCKGEN_CONFIG")]
    pub config: PathBuf,
}

/// Options controlling table generation.
#[derive(Parser, Clone, Debug, Default)]
pub struct GenerateOpts {
    /// Override the number of rows declared in the configuration
    #[arg(long)]
    pub rows: Option<usize>,

    /// Random seed for reproducible output (overrides the configuration's seed)
    #[arg(long, env = "MOCKGEN_SEED")]
    pub seed: Option<u64>,

    /// Number of rows to print as a preview (0 disables the preview)
    #[arg(long, default_value_t = mock_export::DEFAULT_PREVIEW_ROWS)]
    pub preview: usize,
}
