use std::sync::Arc;

use super::configs::TableConfig;

/// A non-identifier column, one per time period.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricField {
    /// Position of the column in the header.
    pub index: usize,
    pub key: String,
}

/// Column layout shared by every record of a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
    code_index: Option<usize>,
    name_index: Option<usize>,
    metrics: Vec<MetricField>,
}

impl Schema {
    pub fn from_header<S: AsRef<str>>(columns: &[S], config: &TableConfig) -> Self {
        let columns: Vec<String> = columns.iter().map(|c| c.as_ref().to_string()).collect();
        let code_index = columns.iter().position(|c| *c == config.code_column);
        let name_index = columns.iter().position(|c| *c == config.name_column);
        let metrics = columns
            .iter()
            .enumerate()
            .filter(|(_, c)| !config.is_identifier(c))
            .map(|(index, key)| MetricField {
                index,
                key: key.clone(),
            })
            .collect();

        Self {
            columns,
            code_index,
            name_index,
            metrics,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn metrics(&self) -> &[MetricField] {
        &self.metrics
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == key)
    }
}

/// One data row. Values are kept as the raw strings found in the source.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    schema: Arc<Schema>,
    values: Vec<String>,
}

impl Record {
    /// `values` must have exactly one entry per schema column.
    pub(crate) fn new(schema: Arc<Schema>, values: Vec<String>) -> Self {
        debug_assert_eq!(schema.width(), values.len());
        Self { schema, values }
    }

    /// Builds a record from `(column, value)` pairs, treating the configured
    /// identifier columns as identifiers.
    pub fn from_pairs<K, V>(pairs: &[(K, V)], config: &TableConfig) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let columns: Vec<&str> = pairs.iter().map(|(k, _)| k.as_ref()).collect();
        let schema = Arc::new(Schema::from_header(&columns, config));
        let values = pairs.iter().map(|(_, v)| v.as_ref().to_string()).collect();
        Self::new(schema, values)
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.schema.index_of(key).map(|i| self.values[i].as_str())
    }

    pub fn code(&self) -> Option<&str> {
        self.schema.code_index.map(|i| self.values[i].as_str())
    }

    pub fn name(&self) -> Option<&str> {
        self.schema.name_index.map(|i| self.values[i].as_str())
    }

    /// Column names in header order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.schema.columns.iter().map(String::as_str)
    }

    /// Raw value of `field`, read by position so repeated column names
    /// resolve to their own cell.
    pub fn metric_value(&self, field: &MetricField) -> &str {
        &self.values[field.index]
    }

    /// Metric fields with their raw values, in header order.
    pub fn metrics(&self) -> impl Iterator<Item = (&MetricField, &str)> {
        self.schema
            .metrics
            .iter()
            .map(move |field| (field, self.metric_value(field)))
    }

    /// Key used to memoize per-record results.
    pub(crate) fn cache_key(&self) -> String {
        match (self.name(), self.code()) {
            (Some(name), _) => name.to_string(),
            (None, Some(code)) => code.to_string(),
            (None, None) => self.values.join("\u{1f}"),
        }
    }
}

/// Records in source row order. Immutable once parsed.
#[derive(Clone, Debug)]
pub struct Table {
    schema: Arc<Schema>,
    records: Vec<Record>,
}

impl Table {
    pub(crate) fn new(schema: Arc<Schema>, records: Vec<Record>) -> Self {
        Self { schema, records }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Metric column names, for the period pickers.
    pub fn metric_labels(&self) -> Vec<&str> {
        self.schema.metrics.iter().map(|f| f.key.as_str()).collect()
    }

    /// Display names in row order, for the area picker.
    pub fn area_names(&self) -> Vec<&str> {
        self.records.iter().filter_map(Record::name).collect()
    }

    /// First record whose name column equals `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == Some(name))
    }
}
