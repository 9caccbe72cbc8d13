//! Display and export for generated tables.
//!
//! This crate renders a [`Table`](mock_core::Table) as a text preview and
//! writes it to CSV or JSON Lines files.
//!
//! # Example
//!
//! ```ignore
//! use mock_export::{export_table, render_head, OutputFormat};
//!
//! print!("{}", render_head(&table, 5));
//! let metrics = export_table(&table, "/path/to/users.csv", OutputFormat::Csv, true)?;
//! ```

pub mod args;
mod error;
pub mod preview;
mod writer;

pub use args::{ExportArgs, OutputFormat};
pub use error::ExportError;
pub use preview::{render_head, DEFAULT_PREVIEW_ROWS};
pub use writer::{export_table, resolve_format, write_csv, write_jsonl, ExportMetrics};
