//! Column types supported by the generator.

use std::fmt;
use std::str::FromStr;

/// The fixed set of column types a schema may declare.
///
/// Schemas carry the type as a raw tag (`type: integer`) so that an unknown
/// tag can be reported with its original spelling when the column is
/// dispatched, rather than failing the whole file at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Arithmetic sequence or ranged random integers
    Integer,
    /// Values from a named faker method
    String,
    /// Random calendar dates in an inclusive range
    Date,
    /// Weighted coin flips
    Boolean,
    /// Weighted draws from a list of labels
    Categorical,
}

impl ColumnType {
    /// All supported types, in documentation order.
    pub const ALL: [ColumnType; 5] = [
        ColumnType::Integer,
        ColumnType::String,
        ColumnType::Date,
        ColumnType::Boolean,
        ColumnType::Categorical,
    ];

    /// The tag used for this type in schema files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::String => "string",
            ColumnType::Date => "date",
            ColumnType::Boolean => "boolean",
            ColumnType::Categorical => "categorical",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a type tag is not one of [`ColumnType::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported data type: {0}")]
pub struct UnsupportedType(pub String);

impl FromStr for ColumnType {
    type Err = UnsupportedType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "integer" => Ok(ColumnType::Integer),
            "string" => Ok(ColumnType::String),
            "date" => Ok(ColumnType::Date),
            "boolean" => Ok(ColumnType::Boolean),
            "categorical" => Ok(ColumnType::Categorical),
            other => Err(UnsupportedType(other.to_string())),
        }
    }
}
