//! String column generator backed by a named faker method.

use super::{wrong_kind, ColumnGenerator};
use crate::error::ColumnError;
use crate::faker::{FakeSource, FakerRegistry};
use mock_core::{ColumnData, GenerationParams, ParamValue};

/// Validated string configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringGenerator {
    /// Name of the faker method invoked once per row
    pub method: String,
}

impl ColumnGenerator for StringGenerator {
    fn from_params(params: &GenerationParams) -> Result<Self, ColumnError> {
        match params.get("faker") {
            None | Some(ParamValue::Null) => Err(ColumnError::MissingParameter(
                "String generation requires a 'faker' method".to_string(),
            )),
            Some(ParamValue::String(method)) if method.is_empty() => Err(
                ColumnError::MissingParameter("String generation requires a 'faker' method".to_string()),
            ),
            Some(ParamValue::String(method)) => Ok(StringGenerator {
                method: method.clone(),
            }),
            Some(other) => Err(wrong_kind("faker", "a method name", other)),
        }
    }

    fn check(&self, registry: &FakerRegistry) -> Result<(), ColumnError> {
        if registry.contains(&self.method) {
            Ok(())
        } else {
            Err(ColumnError::UnknownFakerMethod(self.method.clone()))
        }
    }

    fn generate(
        &self,
        source: &mut FakeSource,
        num_rows: usize,
    ) -> Result<ColumnData, ColumnError> {
        // Resolved once so a bad name fails before any row is produced
        let fake = source
            .registry()
            .lookup(&self.method)
            .ok_or_else(|| ColumnError::UnknownFakerMethod(self.method.clone()))?;
        let rng = source.rng_mut();
        let values = (0..num_rows).map(|_| fake(&mut *rng)).collect();
        Ok(ColumnData::String(values))
    }
}
