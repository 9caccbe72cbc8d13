//! Plain-text preview of the first rows of a table.

use mock_core::{CellValue, Table};

/// Rows shown when no count is given.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

fn format_cell(value: &CellValue) -> String {
    match value {
        CellValue::Bool(true) => "True".to_string(),
        CellValue::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

/// Render the first `rows` rows as an aligned text table with a row index.
///
/// Columns are right-aligned and separated by two spaces.
pub fn render_head(table: &Table, rows: usize) -> String {
    let shown = rows.min(table.num_rows());

    let mut grid: Vec<Vec<String>> = Vec::with_capacity(shown + 1);
    let mut header = vec![String::new()];
    header.extend(table.column_names().iter().map(|s| s.to_string()));
    grid.push(header);
    for (index, row) in table.rows().take(shown).enumerate() {
        let mut line = vec![index.to_string()];
        line.extend(row.iter().map(format_cell));
        grid.push(line);
    }

    let widths: Vec<usize> = (0..grid[0].len())
        .map(|col| {
            grid.iter()
                .map(|line| line[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in &grid {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:>width$}"))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }

    if shown < table.num_rows() {
        out.push_str(&format!(
            "[{} rows x {} columns]\n",
            table.num_rows(),
            table.num_columns()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_core::ColumnData;

    fn sample_table(rows: usize) -> Table {
        let mut table = Table::new(rows);
        table
            .push_column("id", ColumnData::Integer((1..=rows as i64).collect()))
            .unwrap();
        table
            .push_column(
                "active",
                ColumnData::Boolean((0..rows).map(|i| i % 2 == 0).collect()),
            )
            .unwrap();
        table
    }

    #[test]
    fn test_render_head() {
        let rendered = render_head(&sample_table(3), DEFAULT_PREVIEW_ROWS);
        let expected = "   id  active\n0   1    True\n1   2   False\n2   3    True\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_head_truncates() {
        let rendered = render_head(&sample_table(10), 2);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "[10 rows x 2 columns]");
    }

    #[test]
    fn test_render_empty_table() {
        let rendered = render_head(&sample_table(0), 5);
        assert_eq!(rendered, "  id  active\n");
    }
}
