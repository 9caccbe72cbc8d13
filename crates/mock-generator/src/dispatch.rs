//! Column dispatch and table assembly.

use crate::error::GeneratorError;
use crate::faker::{FakeSource, FakerRegistry};
use crate::generators::{
    self, BooleanGenerator, CategoricalGenerator, DateGenerator, IntegerGenerator,
    StringGenerator,
};
use mock_core::{ColumnData, ColumnSpec, ColumnType, Table};
use tracing::{debug, info};

fn resolve_type(spec: &ColumnSpec) -> Result<ColumnType, GeneratorError> {
    spec.column_type()
        .map_err(|e| GeneratorError::UnsupportedType {
            column: spec.name.clone(),
            type_name: e.0,
        })
}

/// Generate a single column of exactly `num_rows` values.
pub fn generate_column(
    spec: &ColumnSpec,
    num_rows: usize,
    source: &mut FakeSource,
) -> Result<ColumnData, GeneratorError> {
    let column_type = resolve_type(spec)?;
    let params = &spec.generation;

    let result = match column_type {
        ColumnType::Integer => generators::run::<IntegerGenerator>(params, source, num_rows),
        ColumnType::String => generators::run::<StringGenerator>(params, source, num_rows),
        ColumnType::Date => generators::run::<DateGenerator>(params, source, num_rows),
        ColumnType::Boolean => generators::run::<BooleanGenerator>(params, source, num_rows),
        ColumnType::Categorical => {
            generators::run::<CategoricalGenerator>(params, source, num_rows)
        }
    };

    result.map_err(|source| GeneratorError::Column {
        column: spec.name.clone(),
        source,
    })
}

/// Generate every column in declaration order and assemble the table.
///
/// The first failing column aborts the call; no partial table is returned.
pub fn generate_table(
    schema: &[ColumnSpec],
    num_rows: usize,
    source: &mut FakeSource,
) -> Result<Table, GeneratorError> {
    info!(
        "Generating {} columns x {} rows",
        schema.len(),
        num_rows
    );

    let mut table = Table::new(num_rows);
    for spec in schema {
        let column = generate_column(spec, num_rows, source)?;
        debug!(
            "Generated column '{}' ({})",
            spec.name,
            column.column_type()
        );
        table.push_column(spec.name.clone(), column)?;
    }
    Ok(table)
}

/// Check one column's type and parameters without generating values.
pub fn validate_column(spec: &ColumnSpec, registry: &FakerRegistry) -> Result<(), GeneratorError> {
    let column_type = resolve_type(spec)?;
    let params = &spec.generation;

    let result = match column_type {
        ColumnType::Integer => generators::check::<IntegerGenerator>(params, registry),
        ColumnType::String => generators::check::<StringGenerator>(params, registry),
        ColumnType::Date => generators::check::<DateGenerator>(params, registry),
        ColumnType::Boolean => generators::check::<BooleanGenerator>(params, registry),
        ColumnType::Categorical => generators::check::<CategoricalGenerator>(params, registry),
    };

    result.map_err(|source| GeneratorError::Column {
        column: spec.name.clone(),
        source,
    })
}

/// Check every column, collecting all failures instead of stopping at the first.
pub fn validate_schema(schema: &[ColumnSpec], registry: &FakerRegistry) -> Vec<GeneratorError> {
    schema
        .iter()
        .filter_map(|spec| validate_column(spec, registry).err())
        .collect()
}
