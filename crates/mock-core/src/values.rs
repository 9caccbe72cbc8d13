//! Generated values, columns and the assembled table.

use crate::types::ColumnType;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A single generated cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Integer column value
    Int(i64),
    /// String or categorical label
    String(String),
    /// Calendar date, serialized as `YYYY-MM-DD`
    Date(NaiveDate),
    /// Boolean column value
    Bool(bool),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::String(s) => f.write_str(s),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// One generated column. Every variant holds exactly `num_rows` values.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Integer(Vec<i64>),
    String(Vec<String>),
    Date(Vec<NaiveDate>),
    Boolean(Vec<bool>),
    /// Labels drawn from the declared categories
    Categorical(Vec<String>),
}

impl ColumnData {
    /// Number of values in the column.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Integer(v) => v.len(),
            ColumnData::String(v) => v.len(),
            ColumnData::Date(v) => v.len(),
            ColumnData::Boolean(v) => v.len(),
            ColumnData::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The column type this data was generated for.
    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnData::Integer(_) => ColumnType::Integer,
            ColumnData::String(_) => ColumnType::String,
            ColumnData::Date(_) => ColumnType::Date,
            ColumnData::Boolean(_) => ColumnType::Boolean,
            ColumnData::Categorical(_) => ColumnType::Categorical,
        }
    }

    /// Get the value at `index` as a cell.
    pub fn cell(&self, index: usize) -> Option<CellValue> {
        match self {
            ColumnData::Integer(v) => v.get(index).copied().map(CellValue::Int),
            ColumnData::String(v) | ColumnData::Categorical(v) => {
                v.get(index).cloned().map(CellValue::String)
            }
            ColumnData::Date(v) => v.get(index).copied().map(CellValue::Date),
            ColumnData::Boolean(v) => v.get(index).copied().map(CellValue::Bool),
        }
    }

    pub fn as_integers(&self) -> Option<&[i64]> {
        match self {
            ColumnData::Integer(v) => Some(v),
            _ => None,
        }
    }

    /// Values of a string or categorical column.
    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            ColumnData::String(v) | ColumnData::Categorical(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_dates(&self) -> Option<&[NaiveDate]> {
        match self {
            ColumnData::Date(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_booleans(&self) -> Option<&[bool]> {
        match self {
            ColumnData::Boolean(v) => Some(v),
            _ => None,
        }
    }
}

/// Error type for table assembly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A column with this name is already in the table
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// A column does not have the table's row count
    #[error("Column '{name}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

/// Named, equal-length columns in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    num_rows: usize,
    columns: Vec<(String, ColumnData)>,
}

impl Table {
    /// Create an empty table whose columns must all have `num_rows` values.
    pub fn new(num_rows: usize) -> Self {
        Self {
            num_rows,
            columns: Vec::new(),
        }
    }

    /// Append a column, keeping insertion order.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        data: ColumnData,
    ) -> Result<(), TableError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(TableError::DuplicateColumn(name));
        }
        if data.len() != self.num_rows {
            return Err(TableError::LengthMismatch {
                name,
                expected: self.num_rows,
                actual: data.len(),
            });
        }
        self.columns.push((name, data));
        Ok(())
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Get a column by name.
    pub fn get(&self, name: &str) -> Option<&ColumnData> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, data)| data)
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Iterate over `(name, column)` pairs in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnData)> {
        self.columns.iter().map(|(n, d)| (n.as_str(), d))
    }

    /// Materialize one row, in column order.
    pub fn row(&self, index: usize) -> Option<Vec<CellValue>> {
        if index >= self.num_rows {
            return None;
        }
        self.columns.iter().map(|(_, data)| data.cell(index)).collect()
    }

    /// Lazily iterate over all rows.
    pub fn rows(&self) -> impl Iterator<Item = Vec<CellValue>> + '_ {
        (0..self.num_rows).filter_map(move |i| self.row(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        let mut table = Table::new(2);
        table
            .push_column("id", ColumnData::Integer(vec![1, 2]))
            .unwrap();
        table
            .push_column("active", ColumnData::Boolean(vec![true, false]))
            .unwrap();
        table
            .push_column(
                "tier",
                ColumnData::Categorical(vec!["gold".into(), "silver".into()]),
            )
            .unwrap();
        table
    }

    #[test]
    fn test_column_order_preserved() {
        let table = sample_table();
        assert_eq!(table.column_names(), vec!["id", "active", "tier"]);
        assert_eq!(table.num_columns(), 3);
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let mut table = sample_table();
        let result = table.push_column("id", ColumnData::Integer(vec![3, 4]));
        assert_eq!(result, Err(TableError::DuplicateColumn("id".to_string())));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut table = sample_table();
        let result = table.push_column("extra", ColumnData::Integer(vec![1]));
        assert_eq!(
            result,
            Err(TableError::LengthMismatch {
                name: "extra".to_string(),
                expected: 2,
                actual: 1,
            })
        );
        assert_eq!(table.num_columns(), 3);
    }

    #[test]
    fn test_rows() {
        let table = sample_table();
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            vec![
                CellValue::Int(2),
                CellValue::Bool(false),
                CellValue::String("silver".to_string()),
            ]
        );
        assert!(table.row(2).is_none());
    }

    #[test]
    fn test_zero_row_table() {
        let mut table = Table::new(0);
        table
            .push_column("id", ColumnData::Integer(Vec::new()))
            .unwrap();
        assert_eq!(table.rows().count(), 0);
        assert!(table.get("id").unwrap().is_empty());
    }

    #[test]
    fn test_cell_display_and_json() {
        let date = CellValue::Date(NaiveDate::from_ymd_opt(2021, 3, 4).unwrap());
        assert_eq!(date.to_string(), "2021-03-04");
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2021-03-04\"");
        assert_eq!(serde_json::to_string(&CellValue::Int(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&CellValue::Bool(true)).unwrap(), "true");
    }

    #[test]
    fn test_typed_accessors() {
        let table = sample_table();
        assert_eq!(table.get("id").unwrap().as_integers(), Some(&[1, 2][..]));
        assert_eq!(
            table.get("tier").unwrap().column_type(),
            ColumnType::Categorical
        );
        assert!(table.get("tier").unwrap().as_strings().is_some());
        assert!(table.get("active").unwrap().as_dates().is_none());
    }
}
