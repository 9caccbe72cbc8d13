//! Column generators for the mockgen framework.
//!
//! This crate turns an ordered list of [`ColumnSpec`](mock_core::ColumnSpec)s
//! and a row count into a [`Table`](mock_core::Table). Each column is produced
//! independently by a type-specific generator, drawing from an explicitly
//! passed [`FakeSource`] so runs can be made reproducible with a seed.
//!
//! # Architecture
//!
//! ```text
//! MockConfig (YAML)
//!        │
//!        ▼
//! ┌─────────────────────┐
//! │    DataGenerator    │
//! │                     │
//! │  - FakeSource       │
//! │    - FakerRegistry  │
//! │    - rng (StdRng)   │
//! └──────────┬──────────┘
//!            │  one pass per column
//!            ▼
//!     Table { name -> ColumnData }
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_generator::DataGenerator;
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
//!   - name: email
//!     type: string
//!     generation:
//!       faker: email
//! "#).unwrap();
//!
//! let mut generator = DataGenerator::new(42);
//! let table = generator.generate_config(&config).unwrap();
//! assert_eq!(table.num_rows(), 3);
//! ```
//!
//! # Generators
//!
//! - `integer` - `start`/`step` sequence, or uniform `min`..=`max`
//! - `string` - values from a named faker method (`faker: email`)
//! - `date` - uniform dates in `start_date`..=`end_date`
//! - `boolean` - `true` with `probability` (default 0.5)
//! - `categorical` - weighted draws from `categories` with `probabilities`

pub mod dispatch;
pub mod error;
pub mod faker;
pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use dispatch::{generate_column, generate_table, validate_column, validate_schema};
pub use error::{ColumnError, GeneratorError};
pub use faker::{FakeFn, FakeSource, FakerRegistry, UnknownMethod};
pub use generator::DataGenerator;
