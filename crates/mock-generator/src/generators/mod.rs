//! Column generators for each supported type.
//!
//! Every generator is split into a parse step ([`ColumnGenerator::from_params`])
//! that turns a column's `generation` mapping into a validated configuration,
//! and a generate step that produces exactly `num_rows` values. Validation of
//! a schema runs only the parse step.

pub mod boolean;
pub mod categorical;
pub mod date;
pub mod numeric;
pub mod text;

use crate::error::ColumnError;
use crate::faker::{FakeSource, FakerRegistry};
use mock_core::{ColumnData, GenerationParams, ParamValue};

pub use boolean::BooleanGenerator;
pub use categorical::CategoricalGenerator;
pub use date::DateGenerator;
pub use numeric::IntegerGenerator;
pub use text::StringGenerator;

/// Trait implemented by every column generator.
pub trait ColumnGenerator: Sized {
    /// Parse and validate the column's generation parameters.
    fn from_params(params: &GenerationParams) -> Result<Self, ColumnError>;

    /// Check the configuration against the fake-data source's capabilities.
    fn check(&self, _registry: &FakerRegistry) -> Result<(), ColumnError> {
        Ok(())
    }

    /// Produce exactly `num_rows` values.
    fn generate(&self, source: &mut FakeSource, num_rows: usize)
        -> Result<ColumnData, ColumnError>;
}

/// Parse, check and generate in one step.
pub fn run<G: ColumnGenerator>(
    params: &GenerationParams,
    source: &mut FakeSource,
    num_rows: usize,
) -> Result<ColumnData, ColumnError> {
    let generator = G::from_params(params)?;
    generator.check(source.registry())?;
    generator.generate(source, num_rows)
}

/// Parse and check without generating.
pub fn check<G: ColumnGenerator>(
    params: &GenerationParams,
    registry: &FakerRegistry,
) -> Result<(), ColumnError> {
    G::from_params(params)?.check(registry)
}

/// Read an optional integer parameter. Present values of another kind are
/// a configuration error.
pub(crate) fn get_i64(params: &GenerationParams, key: &str) -> Result<Option<i64>, ColumnError> {
    match params.get(key) {
        None => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or_else(|| wrong_kind(key, "an integer", value)),
    }
}

/// Read an optional numeric parameter (integer or float).
pub(crate) fn get_f64(params: &GenerationParams, key: &str) -> Result<Option<f64>, ColumnError> {
    match params.get(key) {
        None => Ok(None),
        Some(value) => value.as_f64().map(Some).ok_or_else(|| wrong_kind(key, "a number", value)),
    }
}

pub(crate) fn wrong_kind(key: &str, expected: &str, value: &ParamValue) -> ColumnError {
    ColumnError::InvalidConfig(format!(
        "'{key}' must be {expected}, got {} ({value})",
        value.kind()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_i64() {
        let params = GenerationParams::new()
            .with("start", 5i64)
            .with("step", "one");

        assert_eq!(get_i64(&params, "start"), Ok(Some(5)));
        assert_eq!(get_i64(&params, "missing"), Ok(None));
        assert!(matches!(
            get_i64(&params, "step"),
            Err(ColumnError::InvalidConfig(msg)) if msg.contains("'step' must be an integer")
        ));
    }

    #[test]
    fn test_get_f64_accepts_integers() {
        let params = GenerationParams::new().with("probability", 1i64);
        assert_eq!(get_f64(&params, "probability"), Ok(Some(1.0)));
    }

    #[test]
    fn test_get_f64_rejects_null() {
        let params = GenerationParams::new().with("probability", ParamValue::Null);
        assert!(get_f64(&params, "probability").is_err());
    }
}
