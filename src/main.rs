//! Command-line interface for mockgen
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Print the first five rows of a table built from config.yaml
//! mockgen generate
//!
//! # Override the row count and seed, write JSON Lines
//! mockgen generate --config users.yaml --rows 10000 --seed 7 \
//!   --output users.jsonl --preview 0
//! ```
//!
//! ## Validate
//! ```bash
//! mockgen validate --config users.yaml
//! mockgen validate --config users.yaml --json
//! ```
//!
//! ## Configuration Format
//! ```yaml
//! num_rows: 100
//! seed: 42
//! schema:
//!   - name: id
//!     type: integer
//!     generation: { start: 1, step: 1 }
//!   - name: email
//!     type: string
//!     generation: { faker: email }
//! ```

use clap::{Parser, Subcommand};
use mock_export::ExportArgs;
use mockgen::commands::{fakers, generate, validate};
use mockgen::{ConfigOpts, GenerateOpts};

#[derive(Parser)]
#[command(name = "mockgen")]
#[command(about = "Generate tabular mock data from a YAML schema")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a table, print a preview and optionally write it to a file
    Generate {
        #[command(flatten)]
        config: ConfigOpts,

        #[command(flatten)]
        opts: GenerateOpts,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Check every column of a configuration without generating rows
    Validate {
        #[command(flatten)]
        config: ConfigOpts,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available faker methods for string columns
    Fakers,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            opts,
            export,
        } => generate::run_generate(config, opts, export),
        Commands::Validate { config, json } => validate::run_validate(config, json),
        Commands::Fakers => fakers::run_fakers(),
    }
}
