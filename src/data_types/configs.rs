use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How a metric value of exactly zero is treated when scanning for the range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroPolicy {
    /// Zero counts as "not present", like an unparsable cell.
    #[default]
    Exclude,
    /// Zero is a regular observation; only unparsable cells are skipped.
    Include,
}

/// Geometry returned when the range has no extent (`min == max`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlatRangePolicy {
    /// `offset = 0%`, `width = 0%`
    #[default]
    Collapse,
    /// `offset = 0%`, `width = 100%`
    Full,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub row_separator: char,
    pub field_separator: char,
    pub code_column: String,
    pub name_column: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            row_separator: '\n',
            field_separator: ',',
            code_column: "dcode".to_string(),
            name_column: "name".to_string(),
        }
    }
}

impl TableConfig {
    pub fn is_identifier(&self, column: &str) -> bool {
        column == self.code_column || column == self.name_column
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    pub zero_policy: ZeroPolicy,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub flat_range: FlatRangePolicy,
}

/// Top-level configuration, usually read from a JSON file next to the table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub table: TableConfig,
    pub range: RangeConfig,
    pub geometry: GeometryConfig,
    /// Area selected on first load. Falls back to the first record.
    pub default_area: Option<String>,
}

impl ChartConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("invalid chart configuration")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        Self::from_json_str(&json).wrap_err_with(|| format!("in {}", path.display()))
    }
}
