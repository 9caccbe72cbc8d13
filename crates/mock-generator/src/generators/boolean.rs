//! Weighted boolean column generator.

use super::{get_f64, ColumnGenerator};
use crate::error::ColumnError;
use crate::faker::FakeSource;
use mock_core::{ColumnData, GenerationParams};
use rand::Rng;

/// Probability used when `probability` is absent.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Validated boolean configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BooleanGenerator {
    /// Chance of each row being `true`, in `[0, 1]`
    pub probability: f64,
}

impl ColumnGenerator for BooleanGenerator {
    fn from_params(params: &GenerationParams) -> Result<Self, ColumnError> {
        let probability = get_f64(params, "probability")?.unwrap_or(DEFAULT_PROBABILITY);
        // NaN fails this check too
        if !(0.0..=1.0).contains(&probability) {
            return Err(ColumnError::InvalidConfig(format!(
                "Please enter a probability value between 0 and 1 (got {probability})"
            )));
        }
        Ok(BooleanGenerator { probability })
    }

    fn generate(
        &self,
        source: &mut FakeSource,
        num_rows: usize,
    ) -> Result<ColumnData, ColumnError> {
        let rng = source.rng_mut();
        let values = (0..num_rows)
            .map(|_| rng.random_bool(self.probability))
            .collect();
        Ok(ColumnData::Boolean(values))
    }
}
