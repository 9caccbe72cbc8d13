//! CSV and JSON Lines writers for generated tables.

use crate::args::OutputFormat;
use crate::error::ExportError;
use csv::Writer;
use mock_core::{CellValue, Table};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for file writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from an export operation.
#[derive(Debug, Clone, Default)]
pub struct ExportMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl ExportMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Write a table as CSV. Returns the number of data rows written.
pub fn write_csv<W: Write>(
    table: &Table,
    writer: W,
    include_header: bool,
) -> Result<u64, ExportError> {
    let mut writer = Writer::from_writer(writer);

    if include_header {
        writer.write_record(table.column_names())?;
    }

    let mut rows_written = 0u64;
    for row in table.rows() {
        writer.write_record(row.iter().map(CellValue::to_string))?;
        rows_written += 1;
        if rows_written % 10000 == 0 {
            debug!("Written {} rows", rows_written);
        }
    }

    writer.flush()?;
    Ok(rows_written)
}

/// One row serialized as a JSON object with keys in column order.
struct JsonRow<'a> {
    names: &'a [&'a str],
    values: &'a [CellValue],
}

impl Serialize for JsonRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.names.len()))?;
        for (name, value) in self.names.iter().zip(self.values) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Write a table as JSON Lines. Returns the number of rows written.
pub fn write_jsonl<W: Write>(table: &Table, mut writer: W) -> Result<u64, ExportError> {
    let names = table.column_names();

    let mut rows_written = 0u64;
    for row in table.rows() {
        let json = JsonRow {
            names: &names,
            values: &row,
        };
        serde_json::to_writer(&mut writer, &json)?;
        writeln!(writer)?;
        rows_written += 1;
        if rows_written % 10000 == 0 {
            debug!("Written {} rows", rows_written);
        }
    }

    writer.flush()?;
    Ok(rows_written)
}

/// Write a table to a file in the given format.
pub fn export_table<P: AsRef<Path>>(
    table: &Table,
    output_path: P,
    format: OutputFormat,
    include_header: bool,
) -> Result<ExportMetrics, ExportError> {
    let start_time = Instant::now();
    let output_path = output_path.as_ref();
    info!(
        "Writing {:?} file '{}' with {} rows",
        format,
        output_path.display(),
        table.num_rows()
    );

    let file = File::create(output_path)?;
    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

    let rows_written = match format {
        OutputFormat::Csv => write_csv(table, buf_writer, include_header)?,
        OutputFormat::Jsonl => write_jsonl(table, buf_writer)?,
    };

    let metrics = ExportMetrics {
        rows_written,
        total_duration: start_time.elapsed(),
        file_size_bytes: std::fs::metadata(output_path)?.len(),
    };

    info!(
        "Export complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
        metrics.rows_written,
        metrics.file_size_bytes,
        metrics.total_duration,
        metrics.rows_per_second()
    );

    Ok(metrics)
}

/// Resolve the format from an explicit choice or the path's extension.
pub fn resolve_format(
    format: Option<OutputFormat>,
    output_path: &Path,
) -> Result<OutputFormat, ExportError> {
    format
        .or_else(|| OutputFormat::from_path(output_path))
        .ok_or_else(|| ExportError::UnknownFormat(output_path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mock_core::ColumnData;
    use tempfile::TempDir;

    fn sample_table() -> Table {
        let mut table = Table::new(2);
        table
            .push_column("id", ColumnData::Integer(vec![1, 2]))
            .unwrap();
        table
            .push_column(
                "name",
                ColumnData::String(vec!["Smith, Jane".to_string(), "Lee".to_string()]),
            )
            .unwrap();
        table
            .push_column(
                "joined",
                ColumnData::Date(vec![
                    NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
                    NaiveDate::from_ymd_opt(2021, 3, 4).unwrap(),
                ]),
            )
            .unwrap();
        table
            .push_column("active", ColumnData::Boolean(vec![true, false]))
            .unwrap();
        table
    }

    #[test]
    fn test_metrics() {
        let metrics = ExportMetrics {
            rows_written: 1000,
            total_duration: Duration::from_secs(10),
            file_size_bytes: 100000,
        };

        assert_eq!(metrics.rows_per_second(), 100.0);
        assert_eq!(ExportMetrics::default().rows_per_second(), 0.0);
    }

    #[test]
    fn test_write_csv() {
        let mut buf = Vec::new();
        let rows = write_csv(&sample_table(), &mut buf, true).unwrap();

        assert_eq!(rows, 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "id,name,joined,active\n1,\"Smith, Jane\",2020-01-02,true\n2,Lee,2021-03-04,false\n"
        );
    }

    #[test]
    fn test_write_csv_without_header() {
        let mut buf = Vec::new();
        write_csv(&sample_table(), &mut buf, false).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("1,"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_write_jsonl_preserves_column_order() {
        let mut buf = Vec::new();
        let rows = write_jsonl(&sample_table(), &mut buf).unwrap();

        assert_eq!(rows, 2);
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            r#"{"id":1,"name":"Smith, Jane","joined":"2020-01-02","active":true}"#
        );
        let parsed: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed["active"], serde_json::Value::Bool(false));
    }

    #[test]
    fn test_export_table_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.csv");

        let metrics = export_table(&sample_table(), &path, OutputFormat::Csv, true).unwrap();

        assert_eq!(metrics.rows_written, 2);
        assert!(metrics.file_size_bytes > 0);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("id,name,joined,active\n"));
    }

    #[test]
    fn test_resolve_format() {
        let path = Path::new("out.jsonl");
        assert_eq!(resolve_format(None, path).unwrap(), OutputFormat::Jsonl);
        assert_eq!(
            resolve_format(Some(OutputFormat::Csv), path).unwrap(),
            OutputFormat::Csv
        );
        assert!(matches!(
            resolve_format(None, Path::new("out.txt")),
            Err(ExportError::UnknownFormat(_))
        ));
    }
}
