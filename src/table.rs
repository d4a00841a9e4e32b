//! Delimited text -> [`Table`].
//!
//! The first line is the header. Every later line is split on the field
//! separator and kept only when it has exactly as many fields as the header;
//! anything else is dropped without error. An empty line is a single empty
//! field, so it only survives under a one-column header.

use std::sync::Arc;

use tracing::debug;

use crate::data_types::{Record, Schema, Table, TableConfig};

/// Parses `text` with the default layout (`\n` rows, `,` fields, `dcode`/`name` identifiers).
pub fn parse(text: &str) -> Table {
    parse_with(text, &TableConfig::default())
}

pub fn parse_with(text: &str, config: &TableConfig) -> Table {
    let mut lines = text
        .split(config.row_separator)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate();

    let header: Vec<&str> = match lines.next() {
        Some((_, line)) => line.split(config.field_separator).collect(),
        None => Vec::new(),
    };
    let schema = Arc::new(Schema::from_header(&header, config));

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for (line_no, line) in lines {
        let fields: Vec<&str> = line.split(config.field_separator).collect();
        if fields.len() != schema.width() {
            debug!(
                line = line_no + 1,
                fields = fields.len(),
                expected = schema.width(),
                "dropping malformed row"
            );
            dropped += 1;
            continue;
        }
        let values = fields.into_iter().map(str::to_string).collect();
        records.push(Record::new(Arc::clone(&schema), values));
    }

    debug!(records = records.len(), dropped, "parsed table");
    Table::new(schema, records)
}
