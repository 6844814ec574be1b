//! Output rendering for converted tables

mod csv;
mod json;
mod text;

use std::io::Write;

use anyhow::Result;

use crate::config::OutputFormat;
use crate::model::Table;

pub use self::csv::CsvOutput;
pub use self::json::JsonOutput;
pub use self::text::TextOutput;

/// Trait for table renderers
pub trait OutputFormatter {
    /// Render the table to a writer
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()>;
}

/// Factory for creating renderers
pub struct OutputFactory;

impl OutputFactory {
    /// Create a renderer for the given format
    pub fn create(format: OutputFormat) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextOutput::new()),
            OutputFormat::Csv => Box::new(CsvOutput::new()),
            OutputFormat::Json => Box::new(JsonOutput::new()),
        }
    }
}

/// Render a table to a writer in the given format
pub fn render_to_writer(table: &Table, format: OutputFormat, writer: &mut dyn Write) -> Result<()> {
    OutputFactory::create(format).render(table, writer)
}

/// Render a table to a string in the given format
pub fn render_to_string(table: &Table, format: OutputFormat) -> Result<String> {
    let mut buffer = Vec::new();
    render_to_writer(table, format, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
