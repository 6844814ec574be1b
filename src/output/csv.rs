//! CSV export

use std::io::Write;

use anyhow::{Context, Result};

use crate::model::{CellValue, Table};

use super::OutputFormatter;

/// CSV output with a header row of column names
pub struct CsvOutput;

impl CsvOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for CsvOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(table.columns.iter().map(|c| c.name.as_str()))
            .context("Failed to write CSV header")?;

        for row in &table.rows {
            csv_writer
                .write_record(row.cells.iter().map(csv_field))
                .with_context(|| format!("Failed to write CSV row {}", row.source_index))?;
        }

        csv_writer.flush().context("Failed to flush CSV output")?;
        Ok(())
    }
}

/// Null cells become empty fields; everything else uses its display form
fn csv_field(cell: &CellValue) -> String {
    match cell {
        CellValue::Null => String::new(),
        other => other.display().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;

    fn sample_table() -> Table {
        let columns = vec![Column::new("a", 0), Column::new("b.c", 1)];
        let mut table = Table::new(columns);
        table.add_row(vec![CellValue::Int(1), CellValue::String("x, y".into())], 1);
        table.add_row(vec![CellValue::Int(2), CellValue::Null], 2);
        table
    }

    #[test]
    fn test_renders_header_and_rows() {
        let mut buffer = Vec::new();
        CsvOutput::new().render(&sample_table(), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "a,b.c\n1,\"x, y\"\n2,\n");
    }
}
