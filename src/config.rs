//! Configuration handling for jsonflat

/// Output format for rendering a converted table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration for conversion operations
#[derive(Debug, Clone)]
pub struct Config {
    /// Separator joining nested field names into column names
    pub separator: char,
    /// Output format for rendering the converted table
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: '.',
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Create a new Config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compound key separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}
