//! Integer column generator.
//!
//! Parameter sets are checked in priority order:
//!
//! 1. `start` + `step` - arithmetic sequence `start + step * i`
//! 2. `min` + `max` - uniform random integers in `[min, max]`
//!
//! Anything else (including a lone `faker` key) is rejected.

use super::{get_i64, ColumnGenerator};
use crate::error::ColumnError;
use crate::faker::FakeSource;
use mock_core::{ColumnData, GenerationParams};
use rand::Rng;

const INVALID_INTEGER_CONFIG: &str = "Invalid integer generation configuration";

/// Validated integer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerGenerator {
    /// Deterministic arithmetic sequence
    Sequence { start: i64, step: i64 },
    /// Uniform random integers, both bounds inclusive
    Range { min: i64, max: i64 },
}

impl ColumnGenerator for IntegerGenerator {
    fn from_params(params: &GenerationParams) -> Result<Self, ColumnError> {
        if params.contains("start") && params.contains("step") {
            let start = get_i64(params, "start")?.unwrap_or_default();
            let step = get_i64(params, "step")?.unwrap_or_default();
            return Ok(IntegerGenerator::Sequence { start, step });
        }

        if params.contains("min") && params.contains("max") {
            let min = get_i64(params, "min")?.unwrap_or_default();
            let max = get_i64(params, "max")?.unwrap_or_default();
            if min > max {
                return Err(ColumnError::InvalidConfig(format!(
                    "{INVALID_INTEGER_CONFIG}: min ({min}) is greater than max ({max})"
                )));
            }
            return Ok(IntegerGenerator::Range { min, max });
        }

        Err(ColumnError::InvalidConfig(format!(
            "{INVALID_INTEGER_CONFIG}: expected 'start' and 'step', or 'min' and 'max'"
        )))
    }

    fn generate(
        &self,
        source: &mut FakeSource,
        num_rows: usize,
    ) -> Result<ColumnData, ColumnError> {
        let values = match *self {
            IntegerGenerator::Sequence { start, step } => {
                generate_sequence(start, step, num_rows)?
            }
            IntegerGenerator::Range { min, max } => {
                generate_int_range(source.rng_mut(), min, max, num_rows)
            }
        };
        Ok(ColumnData::Integer(values))
    }
}

/// Generate `start + step * i` for `i` in `[0, num_rows)`.
pub fn generate_sequence(start: i64, step: i64, num_rows: usize) -> Result<Vec<i64>, ColumnError> {
    (0..num_rows)
        .map(|i| {
            i64::try_from(i)
                .ok()
                .and_then(|i| step.checked_mul(i))
                .and_then(|offset| start.checked_add(offset))
                .ok_or_else(|| {
                    ColumnError::InvalidConfig(format!(
                        "{INVALID_INTEGER_CONFIG}: sequence overflows at row {i}"
                    ))
                })
        })
        .collect()
}

/// Generate random integers in the given range (inclusive).
pub fn generate_int_range<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
    num_rows: usize,
) -> Vec<i64> {
    (0..num_rows).map(|_| rng.random_range(min..=max)).collect()
}
