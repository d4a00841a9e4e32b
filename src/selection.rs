//! Which area and which periods are on screen.
//!
//! The view layer owns a [`Selection`] and resolves it against a [`Table`]
//! once per render; the resulting [`ChartFrame`] is everything a surface
//! needs to draw.

use eyre::{eyre, Result};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::data_types::{BarGeometry, GeometryConfig, Table, ValueRange};
use crate::geometry::{bar_geometry, parse_percent};
use crate::range::RangeCache;

/// Selected area plus an inclusive window `[from, to]` over metric field indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub area: String,
    pub from: usize,
    pub to: usize,
    field_count: usize,
}

impl Selection {
    pub fn new(area: impl Into<String>, from: usize, to: usize, field_count: usize) -> Self {
        Self {
            area: area.into(),
            from,
            to,
            field_count,
        }
    }

    /// Initial selection for a freshly loaded table: `default_area` when the
    /// table has it, else the first record, with every period visible.
    /// `None` for a table without named records.
    pub fn for_table(table: &Table, default_area: Option<&str>) -> Option<Self> {
        let area = match default_area.and_then(|name| table.find_by_name(name)) {
            Some(record) => record.name()?,
            None => {
                if let Some(name) = default_area {
                    warn!(area = name, "default area not in table, using first record");
                }
                table.records().first()?.name()?
            }
        };
        let field_count = table.schema().metrics().len();
        Some(Self::new(area, 0, field_count.saturating_sub(1), field_count))
    }

    pub fn set_area(&mut self, area: impl Into<String>) {
        self.area = area.into();
    }

    /// Moves the window start. Ignored unless `from < to`.
    pub fn set_from(&mut self, from: usize) -> bool {
        if from < self.to {
            self.from = from;
            true
        } else {
            false
        }
    }

    /// Moves the window end. Ignored unless `to > from` and `to` names a field.
    pub fn set_to(&mut self, to: usize) -> bool {
        if to > self.from && to < self.field_count {
            self.to = to;
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self, field_index: usize) -> bool {
        (self.from..=self.to).contains(&field_index)
    }

    /// Computes the bars for the current selection.
    pub fn resolve(
        &self,
        table: &Table,
        ranges: &RangeCache,
        config: &GeometryConfig,
    ) -> Result<ChartFrame> {
        let record = table
            .find_by_name(&self.area)
            .ok_or_else(|| eyre!("unknown area {:?}", self.area))?;

        let metrics = table.schema().metrics();
        if self.from > self.to || self.to >= metrics.len() {
            return Err(eyre!(
                "period window [{}, {}] outside {} fields",
                self.from,
                self.to,
                metrics.len()
            ));
        }

        let range = ranges.get_or_compute(record);
        let rows: Vec<BarRow> = metrics[self.from..=self.to]
            .par_iter()
            .map(|field| {
                let raw = record.metric_value(field);
                let value = parse_percent(raw);
                BarRow {
                    label: field.key.clone(),
                    raw: raw.to_string(),
                    value,
                    geometry: bar_geometry(value, range, config),
                }
            })
            .collect();

        debug!(area = %self.area, rows = rows.len(), min = range.min, max = range.max, "resolved frame");

        Ok(ChartFrame {
            area: self.area.clone(),
            range,
            label_min: range.label_min(),
            label_max: range.label_max(),
            rows,
        })
    }
}

/// One visible period.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarRow {
    pub label: String,
    pub raw: String,
    pub value: f64,
    pub geometry: BarGeometry,
}

/// Drawing parameters for one render of the chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartFrame {
    pub area: String,
    pub range: ValueRange,
    pub label_min: String,
    pub label_max: String,
    pub rows: Vec<BarRow>,
}
