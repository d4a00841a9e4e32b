use diverging_chart::data_types::{
    BarGeometry, FlatRangePolicy, GeometryConfig, Percent, Record, TableConfig, ValueRange,
};
use diverging_chart::geometry::{bar_geometry, geometry, geometry_with, parse_percent};
use diverging_chart::range::find_range;

fn at(value: f64, min: f64, max: f64) -> BarGeometry {
    bar_geometry(value, ValueRange::new(min, max), &GeometryConfig::default())
}

fn assert_close(actual: Percent, expected: f64) {
    assert!(
        (actual.value() - expected).abs() < 1e-9,
        "expected {}%, got {}",
        expected,
        actual
    );
}

#[test]
fn test_parse_percent() {
    assert_eq!(parse_percent("-1.23%"), -1.23);
    assert_eq!(parse_percent(" 4.5% "), 4.5);
    assert_eq!(parse_percent("7"), 7.0);
    assert_eq!(parse_percent("+2%"), 2.0);
    assert!(parse_percent("abc").is_nan());
    assert!(parse_percent("%").is_nan());
    assert!(parse_percent("").is_nan());
}

#[test]
fn test_parse_percent_rejects_non_finite() {
    assert!(parse_percent("inf%").is_nan());
    assert!(parse_percent("-Infinity%").is_nan());
    assert!(parse_percent("NaN%").is_nan());
    assert!(parse_percent("1e400%").is_nan(), "overflow parses to inf");
}

#[test]
fn test_all_positive_max_fills_track() {
    let g = at(20.0, 10.0, 20.0);
    assert_eq!(g.offset.to_string(), "0%");
    assert_eq!(g.width.to_string(), "100%");
}

#[test]
fn test_all_positive_scaled_to_max() {
    assert_eq!(at(15.0, 10.0, 20.0), BarGeometry::new(0.0, 50.0));
    assert_eq!(at(10.0, 10.0, 20.0), BarGeometry::new(0.0, 0.0));
}

#[test]
fn test_straddling_positive_value() {
    let g = at(5.0, -10.0, 10.0);
    assert_eq!(g.offset.to_string(), "50%");
    assert_eq!(g.width.to_string(), "25%");
}

#[test]
fn test_straddling_negative_values() {
    // the minimum starts at the left edge
    assert_eq!(at(-10.0, -10.0, 10.0), BarGeometry::new(0.0, 50.0));
    // other negatives end on the zero line
    let g = at(-5.0, -10.0, 10.0);
    assert_eq!(g, BarGeometry::new(25.0, 25.0));
    assert_eq!(g.offset.value() + g.width.value(), 50.0);
}

#[test]
fn test_straddling_zero_value_has_no_width() {
    assert_eq!(at(0.0, -10.0, 10.0), BarGeometry::new(50.0, 0.0));
}

#[test]
fn test_zero_minimum_uses_diverging_layout() {
    assert_eq!(at(10.0, 0.0, 10.0), BarGeometry::new(0.0, 100.0));
    assert_eq!(at(5.0, 0.0, 10.0), BarGeometry::new(0.0, 50.0));
}

#[test]
fn test_all_negative_min_fills_track() {
    let g = at(-20.0, -20.0, -5.0);
    assert_eq!(g.offset.to_string(), "0%");
    assert_eq!(g.width.to_string(), "100%");
}

#[test]
fn test_all_negative_anchored_right() {
    let g = at(-10.0, -20.0, -5.0);
    assert_close(g.offset, 200.0 / 3.0);
    assert_close(g.width, 100.0 / 3.0);

    assert_eq!(at(-5.0, -20.0, -5.0), BarGeometry::new(100.0, 0.0));
}

#[test]
fn test_flat_range_collapses_by_default() {
    let g = at(3.0, 3.0, 3.0);
    assert_eq!(g, BarGeometry::new(0.0, 0.0));
    assert!(g.is_finite());

    assert_eq!(at(0.0, 0.0, 0.0), BarGeometry::new(0.0, 0.0));
}

#[test]
fn test_flat_range_full_policy() {
    let config = GeometryConfig {
        flat_range: FlatRangePolicy::Full,
    };
    let g = bar_geometry(3.0, ValueRange::new(3.0, 3.0), &config);
    assert_eq!(g, BarGeometry::new(0.0, 100.0));
}

#[test]
fn test_geometry_from_record() {
    let record = Record::from_pairs(
        &[("dcode", "A"), ("name", "X"), ("2550", "10%"), ("2551", "20%")],
        &TableConfig::default(),
    );
    let range = find_range(&record);

    assert_eq!(geometry(&record, "2551", range), BarGeometry::new(0.0, 100.0));
    assert_eq!(geometry(&record, "2550", range), BarGeometry::new(0.0, 0.0));
}

#[test]
fn test_flat_record_through_config() {
    let record = Record::from_pairs(
        &[("dcode", "A"), ("name", "X"), ("2550", "4%"), ("2551", "4%")],
        &TableConfig::default(),
    );
    let range = find_range(&record);
    let config = GeometryConfig {
        flat_range: FlatRangePolicy::Full,
    };
    assert_eq!(geometry_with(&record, "2550", range, &config), BarGeometry::new(0.0, 100.0));
}

#[test]
fn test_missing_key_propagates_nan() {
    let record = Record::from_pairs(
        &[("dcode", "A"), ("name", "X"), ("2550", "10%"), ("2551", "20%")],
        &TableConfig::default(),
    );
    let g = geometry(&record, "2600", ValueRange::new(10.0, 20.0));
    assert!(!g.is_finite());
    assert_eq!(g.width.to_string(), "NaN%");
}

#[test]
fn test_percent_formatting() {
    assert_eq!(Percent(25.0).to_string(), "25%");
    assert_eq!(Percent(-0.0).to_string(), "0%");
    assert_eq!(Percent(12.5).to_string(), "12.5%");
    assert_eq!(Percent(100.0 / 3.0).to_string(), "33.333333333333336%");
}

#[test]
fn test_geometry_json() {
    let json = serde_json::to_string(&BarGeometry::new(50.0, 25.0)).unwrap();
    assert_eq!(json, r#"{"offset":"50%","width":"25%"}"#);

    let back: BarGeometry = serde_json::from_str(r#"{"offset":"12.5%","width":"0%"}"#).unwrap();
    assert_eq!(back, BarGeometry::new(12.5, 0.0));

    assert!(serde_json::from_str::<Percent>(r#""wide""#).is_err());
}
