//! Error types for column generation.

use mock_core::TableError;

/// Why a single column could not be generated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColumnError {
    /// Generation parameters failed validation
    #[error("{0}")]
    InvalidConfig(String),

    /// A required parameter is absent
    #[error("{0}")]
    MissingParameter(String),

    /// Date bounds are not typed dates
    #[error("{0}")]
    InvalidFormat(String),

    /// The named faker method is not registered
    #[error("The 'faker' method '{0}' doesn't exist")]
    UnknownFakerMethod(String),
}

/// Error type for table generation. Every variant aborts the whole table.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The column's type tag is not a supported type
    #[error("Column '{column}': unsupported data type: {type_name}")]
    UnsupportedType { column: String, type_name: String },

    /// The column's generator rejected its parameters
    #[error("Column '{column}': {source}")]
    Column {
        column: String,
        #[source]
        source: ColumnError,
    },

    /// Assembling the generated columns failed
    #[error("Table assembly failed: {0}")]
    Table(#[from] TableError),
}

impl GeneratorError {
    /// The column-level cause, if this error came from a generator.
    pub fn column_error(&self) -> Option<&ColumnError> {
        match self {
            GeneratorError::Column { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Name of the offending column, when known.
    pub fn column(&self) -> Option<&str> {
        match self {
            GeneratorError::UnsupportedType { column, .. } | GeneratorError::Column { column, .. } => {
                Some(column)
            }
            GeneratorError::Table(_) => None,
        }
    }
}
