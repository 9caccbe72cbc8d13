//! Generate command handler.

use crate::commands::load_config;
use crate::{ConfigOpts, GenerateOpts};
use anyhow::Context;
use mock_core::{MockConfig, Table};
use mock_export::{export_table, render_head, resolve_format, ExportArgs, ExportMetrics};
use mock_generator::DataGenerator;

/// Build the table for a loaded configuration, applying CLI overrides.
pub fn generate_from_config(config: &MockConfig, opts: &GenerateOpts) -> anyhow::Result<Table> {
    let num_rows = opts.rows.unwrap_or(config.num_rows);
    let seed = opts.seed.or(config.seed);

    match seed {
        Some(seed) => tracing::info!("Generating {} rows with seed {}", num_rows, seed),
        None => tracing::info!("Generating {} rows (unseeded)", num_rows),
    }

    let mut generator = DataGenerator::with_optional_seed(seed);
    let table = generator
        .generate_table(&config.schema, num_rows)
        .context("Failed to generate table")?;
    Ok(table)
}

/// Write the table to the requested file, if any.
pub fn export_if_requested(
    table: &Table,
    export: &ExportArgs,
) -> anyhow::Result<Option<ExportMetrics>> {
    let Some(output) = &export.output else {
        return Ok(None);
    };
    let format = resolve_format(export.format, output)?;
    let metrics = export_table(table, output, format, !export.no_header)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(Some(metrics))
}

/// Run the generate command.
pub fn run_generate(
    config_opts: ConfigOpts,
    opts: GenerateOpts,
    export: ExportArgs,
) -> anyhow::Result<()> {
    let config = load_config(&config_opts.config)?;
    let table = generate_from_config(&config, &opts)?;

    if opts.preview > 0 {
        print!("{}", render_head(&table, opts.preview));
    }

    if let Some(metrics) = export_if_requested(&table, &export)? {
        tracing::info!(
            "Wrote {} rows ({} bytes)",
            metrics.rows_written,
            metrics.file_size_bytes
        );
    }

    Ok(())
}
