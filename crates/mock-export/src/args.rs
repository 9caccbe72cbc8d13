//! CLI argument definitions for table export.

use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

/// Output file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// One JSON object per line
    Jsonl,
}

impl OutputFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "csv" => Some(OutputFormat::Csv),
            "jsonl" | "ndjson" => Some(OutputFormat::Jsonl),
            _ => None,
        }
    }
}

/// Export arguments shared by commands that write tables.
#[derive(Args, Clone, Debug, Default)]
pub struct ExportArgs {
    /// Write the generated table to this file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Output format (inferred from the file extension when omitted)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Omit the CSV header row
    #[arg(long)]
    pub no_header: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out/users.csv")),
            Some(OutputFormat::Csv)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("users.JSONL")),
            Some(OutputFormat::Jsonl)
        );
        assert_eq!(OutputFormat::from_path(Path::new("users.txt")), None);
        assert_eq!(OutputFormat::from_path(Path::new("users")), None);
    }
}
