//! Min/max scan over a record's metric fields.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use crate::data_types::{Record, RangeConfig, ValueRange, ZeroPolicy};
use crate::geometry::parse_percent;

/// Range of `record` with zero values excluded. `(0, 0)` when nothing qualifies.
pub fn find_range(record: &Record) -> ValueRange {
    find_range_with(record, &RangeConfig::default())
}

pub fn find_range_with(record: &Record, config: &RangeConfig) -> ValueRange {
    try_find_range_with(record, config).unwrap_or_default()
}

/// `None` when no metric value is present under the configured policy.
pub fn try_find_range_with(record: &Record, config: &RangeConfig) -> Option<ValueRange> {
    let mut range: Option<ValueRange> = None;

    for (field, raw) in record.metrics() {
        let value = parse_percent(raw);
        let present = match config.zero_policy {
            ZeroPolicy::Exclude => !value.is_nan() && value != 0.0,
            ZeroPolicy::Include => !value.is_nan(),
        };
        if !present {
            trace!(key = %field.key, raw, "skipping value");
            continue;
        }
        range = Some(match range {
            None => ValueRange::new(value, value),
            Some(r) => ValueRange::new(r.min.min(value), r.max.max(value)),
        });
    }

    range
}

/// Per-record memo of [`find_range_with`], keyed by the record's name.
///
/// Clones share the same storage.
#[derive(Clone, Default)]
pub struct RangeCache {
    config: RangeConfig,
    ranges: Arc<RwLock<HashMap<String, ValueRange>>>,
}

impl RangeCache {
    pub fn new(config: RangeConfig) -> Self {
        Self {
            config,
            ranges: Arc::default(),
        }
    }

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    pub fn get_or_compute(&self, record: &Record) -> ValueRange {
        let key = record.cache_key();
        if let Some(range) = self.ranges.read().get(&key) {
            return *range;
        }
        let range = find_range_with(record, &self.config);
        self.ranges.write().insert(key, range);
        range
    }

    pub fn invalidate_all(&self) {
        self.ranges.write().clear();
    }

    pub fn len(&self) -> usize {
        self.ranges.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
