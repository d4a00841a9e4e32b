use std::path::PathBuf;

use eyre::{Result, WrapErr};
use tracing::info;

use crate::data_types::{Table, TableConfig};
use crate::table::parse_with;

/// Where the raw table text comes from.
pub trait TableSource: Send + Sync {
    /// Returns the whole table as text.
    fn fetch(&self) -> Result<String>;

    /// Short human readable origin, used in logs and errors.
    fn describe(&self) -> String;
}

/// Table stored in a local file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableSource for FileSource {
    fn fetch(&self) -> Result<String> {
        std::fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("failed to read table {}", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Table text already in memory.
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TableSource for InlineSource {
    fn fetch(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        format!("<inline, {} bytes>", self.text.len())
    }
}

/// Fetches once and parses. Fetch failures are returned as is; parsing never fails.
pub fn load_table(source: &dyn TableSource, config: &TableConfig) -> Result<Table> {
    let text = source.fetch()?;
    let table = parse_with(&text, config);
    info!(
        source = %source.describe(),
        records = table.len(),
        fields = table.schema().metrics().len(),
        "loaded table"
    );
    Ok(table)
}
