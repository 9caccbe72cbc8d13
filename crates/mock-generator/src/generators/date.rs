//! Date column generator.

use super::ColumnGenerator;
use crate::error::ColumnError;
use crate::faker::FakeSource;
use chrono::NaiveDate;
use mock_core::{ColumnData, GenerationParams, ParamValue};

const INVALID_DATE_FORMAT: &str = "Invalid date format. Please enter format: YYYY-MM-DD";

/// Validated date configuration. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateGenerator {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Bounds must already be typed as dates; strings are never parsed here.
fn date_param(params: &GenerationParams, key: &str) -> Result<NaiveDate, ColumnError> {
    match params.get(key) {
        None => Err(ColumnError::MissingParameter(format!(
            "Date generation requires '{key}'"
        ))),
        Some(ParamValue::Date(date)) => Ok(*date),
        Some(other) => Err(ColumnError::InvalidFormat(format!(
            "{INVALID_DATE_FORMAT} ('{key}' is {} {other})",
            other.kind()
        ))),
    }
}

impl ColumnGenerator for DateGenerator {
    fn from_params(params: &GenerationParams) -> Result<Self, ColumnError> {
        let start_date = date_param(params, "start_date")?;
        let end_date = date_param(params, "end_date")?;
        if start_date > end_date {
            return Err(ColumnError::InvalidConfig(format!(
                "start_date ({start_date}) is after end_date ({end_date})"
            )));
        }
        Ok(DateGenerator {
            start_date,
            end_date,
        })
    }

    fn generate(
        &self,
        source: &mut FakeSource,
        num_rows: usize,
    ) -> Result<ColumnData, ColumnError> {
        let values = (0..num_rows)
            .map(|_| source.date_between(self.start_date, self.end_date))
            .collect();
        Ok(ColumnData::Date(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_generate_date_range() {
        let params = GenerationParams::new()
            .with("start_date", ymd(2020, 1, 1))
            .with("end_date", ymd(2024, 12, 31));
        let generator = DateGenerator::from_params(&params).unwrap();
        let mut source = FakeSource::seeded(42);

        let column = generator.generate(&mut source, 200).unwrap();
        let dates = column.as_dates().unwrap();
        assert_eq!(dates.len(), 200);
        assert!(dates.iter().all(|d| d.year() >= 2020 && d.year() <= 2024));
    }

    #[test]
    fn test_string_bound_is_invalid_format() {
        let params = GenerationParams::new()
            .with("start_date", ParamValue::String("2020-01-01".to_string()))
            .with("end_date", ymd(2024, 12, 31));

        let result = DateGenerator::from_params(&params);
        assert!(matches!(
            result,
            Err(ColumnError::InvalidFormat(msg)) if msg.starts_with(INVALID_DATE_FORMAT)
        ));
    }

    #[test]
    fn test_numeric_bound_is_invalid_format() {
        let params = GenerationParams::new()
            .with("start_date", ymd(2020, 1, 1))
            .with("end_date", 2024i64);
        assert!(matches!(
            DateGenerator::from_params(&params),
            Err(ColumnError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_missing_bound() {
        let params = GenerationParams::new().with("start_date", ymd(2020, 1, 1));
        assert!(matches!(
            DateGenerator::from_params(&params),
            Err(ColumnError::MissingParameter(msg)) if msg.contains("end_date")
        ));
    }

    #[test]
    fn test_inverted_bounds() {
        let params = GenerationParams::new()
            .with("start_date", ymd(2024, 1, 1))
            .with("end_date", ymd(2020, 1, 1));
        assert!(matches!(
            DateGenerator::from_params(&params),
            Err(ColumnError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_same_day_bounds() {
        let day = ymd(2022, 6, 15);
        let generator = DateGenerator {
            start_date: day,
            end_date: day,
        };
        let mut source = FakeSource::seeded(1);
        assert_eq!(
            generator.generate(&mut source, 3).unwrap(),
            ColumnData::Date(vec![day, day, day])
        );
    }
}
