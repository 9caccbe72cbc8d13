//! Weighted categorical column generator.

use super::{wrong_kind, ColumnGenerator};
use crate::error::ColumnError;
use crate::faker::FakeSource;
use mock_core::{ColumnData, GenerationParams, ParamValue};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;

/// Allowed distance between the probability sum and 1.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-9;

const INVALID_PROBABILITIES: &str =
    "Please ensure the sum of probabilities is equal to 1 and provide valid categories";

/// Validated categorical configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalGenerator {
    pub categories: Vec<String>,
    /// Same length as `categories`, non-negative, summing to 1
    pub probabilities: Vec<f64>,
}

fn parse_categories(params: &GenerationParams) -> Result<Vec<String>, ColumnError> {
    let value = params.get("categories").ok_or_else(|| {
        ColumnError::MissingParameter("Categorical generation requires 'categories'".to_string())
    })?;
    let items = value
        .as_list()
        .ok_or_else(|| wrong_kind("categories", "a list", value))?;
    if items.is_empty() {
        return Err(ColumnError::InvalidConfig(
            "'categories' must not be empty".to_string(),
        ));
    }
    items
        .iter()
        .map(|item| {
            item.as_label()
                .ok_or_else(|| wrong_kind("categories", "a list of scalar labels", item))
        })
        .collect()
}

fn parse_probabilities(params: &GenerationParams) -> Result<Vec<f64>, ColumnError> {
    let value = match params.get("probabilities") {
        None | Some(ParamValue::Null) => {
            return Err(ColumnError::InvalidConfig(format!(
                "{INVALID_PROBABILITIES}: 'probabilities' is missing"
            )))
        }
        Some(value) => value,
    };
    let items = value
        .as_list()
        .ok_or_else(|| wrong_kind("probabilities", "a list", value))?;
    items
        .iter()
        .map(|item| match item.as_f64() {
            Some(p) if p.is_finite() && p >= 0.0 => Ok(p),
            _ => Err(wrong_kind(
                "probabilities",
                "a list of non-negative numbers",
                item,
            )),
        })
        .collect()
}

impl ColumnGenerator for CategoricalGenerator {
    fn from_params(params: &GenerationParams) -> Result<Self, ColumnError> {
        let categories = parse_categories(params)?;
        let probabilities = parse_probabilities(params)?;

        if probabilities.len() != categories.len() {
            return Err(ColumnError::InvalidConfig(format!(
                "{INVALID_PROBABILITIES}: {} categories but {} probabilities",
                categories.len(),
                probabilities.len()
            )));
        }

        let sum: f64 = probabilities.iter().sum();
        if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(ColumnError::InvalidConfig(format!(
                "{INVALID_PROBABILITIES}: probabilities sum to {sum}"
            )));
        }

        Ok(CategoricalGenerator {
            categories,
            probabilities,
        })
    }

    fn generate(
        &self,
        source: &mut FakeSource,
        num_rows: usize,
    ) -> Result<ColumnData, ColumnError> {
        let distribution = WeightedIndex::new(&self.probabilities)
            .map_err(|e| ColumnError::InvalidConfig(format!("{INVALID_PROBABILITIES}: {e}")))?;
        let rng = source.rng_mut();
        let values = (0..num_rows)
            .map(|_| self.categories[distribution.sample(rng)].clone())
            .collect();
        Ok(ColumnData::Categorical(values))
    }
}
