//! jsonflat - Flatten nested JSON records into tabular data
//!
//! Converts a JSON array of objects (from a file or in memory) into a flat
//! table: one row per record, nested structure encoded into compound
//! column names joined with a configurable separator, columns unioned
//! across records, and missing cells filled with null.

pub mod builder;
pub mod config;
pub mod error;
pub mod flatten;
pub mod model;
pub mod normalize;
pub mod output;

pub use builder::{Input, TableBuilder};
pub use config::{Config, OutputFormat};
pub use error::ConvertError;
pub use flatten::{flatten, FlatRow};
pub use model::Table;
pub use normalize::normalize;
