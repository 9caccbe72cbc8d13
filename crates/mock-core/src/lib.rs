//! Core types for the mockgen framework.
//!
//! This crate provides the foundational types shared by the generator,
//! the exporters and the CLI:
//!
//! - [`ColumnType`] - The fixed set of column types a schema may declare
//! - [`ParamValue`] / [`GenerationParams`] - Typed per-column generation parameters
//! - [`ColumnSpec`] / [`MockConfig`] - Schema definitions loaded from YAML
//! - [`ColumnData`] / [`Table`] - Generated columns and the assembled table
//!
//! # Architecture
//!
//! ```text
//! mock-core (this crate)
//!    │
//!    ├─── mock-generator  (turns ColumnSpecs into a Table)
//!    │
//!    └─── mock-export     (renders and writes a Table)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_core::MockConfig;
//!
//! let config = MockConfig::from_yaml(r#"
//! num_rows: 3
//! schema:
//!   - name: id
//!     type: integer
//!     generation:
//!       start: 1
//!       step: 1
//! "#).unwrap();
//!
//! assert_eq!(config.num_rows, 3);
//! assert_eq!(config.schema[0].name, "id");
//! ```

pub mod params;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use params::{GenerationParams, ParamValue};
pub use schema::{ColumnSpec, ConfigError, MockConfig};
pub use types::{ColumnType, UnsupportedType};
pub use values::{CellValue, ColumnData, Table, TableError};
