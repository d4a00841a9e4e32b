//! Diverging bar layout.
//!
//! A bar's `offset` and `width` are percentages of a track that spans the
//! record's whole range. Three layouts exist depending on the sign of the
//! range:
//!
//! * all negative: bars are anchored at the right end of the track and grow
//!   leftwards as the value approaches `min`;
//! * all positive: bars start at the left edge, the `max` bar fills the track;
//! * mixed: the zero line sits at `|min| / span`, positive bars extend right
//!   of it and negative bars end on it.

use crate::data_types::{BarGeometry, FlatRangePolicy, GeometryConfig, Record, ValueRange};

/// Parses a cell such as `"-1.23%"`. Unparsable or non-finite input
/// (`inf%`, `NaN%`) yields `NaN`.
pub fn parse_percent(raw: &str) -> f64 {
    raw.trim()
        .replacen('%', "", 1)
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(f64::NAN)
}

/// Geometry of the bar for `key`, scaled to `range`.
///
/// `key` must be a metric column of `record`; otherwise the result is `NaN%`.
pub fn geometry(record: &Record, key: &str, range: ValueRange) -> BarGeometry {
    geometry_with(record, key, range, &GeometryConfig::default())
}

pub fn geometry_with(
    record: &Record,
    key: &str,
    range: ValueRange,
    config: &GeometryConfig,
) -> BarGeometry {
    let value = record.get(key).map_or(f64::NAN, parse_percent);
    bar_geometry(value, range, config)
}

pub fn bar_geometry(value: f64, range: ValueRange, config: &GeometryConfig) -> BarGeometry {
    let ValueRange { min, max } = range;
    let dis = range.span();

    if dis == 0.0 {
        return match config.flat_range {
            FlatRangePolicy::Collapse => BarGeometry::new(0.0, 0.0),
            FlatRangePolicy::Full => BarGeometry::new(0.0, 100.0),
        };
    }

    if range.is_all_negative() {
        if value == min {
            BarGeometry::new(0.0, 100.0)
        } else {
            let from_min = 100.0 * (value - min).abs() / dis;
            BarGeometry::new(from_min, 100.0 - from_min)
        }
    } else if range.is_all_positive() {
        if value == max {
            BarGeometry::new(0.0, 100.0)
        } else {
            BarGeometry::new(0.0, 100.0 - 100.0 * (value - max).abs() / dis)
        }
    } else {
        let width = 100.0 * value.abs() / dis;
        if value > 0.0 {
            BarGeometry::new(100.0 * min.abs() / dis, width)
        } else if value == min {
            BarGeometry::new(0.0, width)
        } else {
            BarGeometry::new(100.0 * (value - min).abs() / dis, width)
        }
    }
}
