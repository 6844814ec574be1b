//! Aligned text output

use std::io::Write;

use anyhow::Result;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::model::Table;

use super::OutputFormatter;

/// Aligned text table output
pub struct TextOutput;

impl TextOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TextOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        let mut builder = Builder::default();
        builder.push_record(table.columns.iter().map(|c| c.name.clone()));
        for row in &table.rows {
            builder.push_record(row.cells.iter().map(|c| c.display().into_owned()));
        }

        let mut rendered = builder.build();
        rendered.with(Style::sharp());
        writeln!(writer, "{}", rendered)?;

        Ok(())
    }
}
