//! Text rendering of a diverging bar chart.
//!
//! cargo run --example bars -- <table.csv> [area] [from] [to] [--json] [--config cfg.json]

use diverging_chart::data_types::ChartConfig;
use diverging_chart::transform::TrackTransform;
use diverging_chart::{load_table, FileSource, RangeCache, Selection};
use eyre::{eyre, Result};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const TRACK_CELLS: f32 = 50.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = take_flag(&mut args, "--json");
    let config = match take_option(&mut args, "--config") {
        Some(path) => ChartConfig::from_path(path)?,
        None => ChartConfig::default(),
    };

    let path = args
        .first()
        .ok_or_else(|| eyre!("usage: bars <table.csv> [area] [from] [to] [--json] [--config cfg.json]"))?;
    let table = load_table(&FileSource::new(path), &config.table)?;

    let default_area = args.get(1).map(String::as_str).or(config.default_area.as_deref());
    let mut selection =
        Selection::for_table(&table, default_area).ok_or_else(|| eyre!("table has no named rows"))?;
    if let Some(to) = args.get(3) {
        if !selection.set_to(to.parse()?) {
            warn!(to = %to, from = selection.from, "ignoring window end outside the table");
        }
    }
    if let Some(from) = args.get(2) {
        if !selection.set_from(from.parse()?) {
            warn!(from = %from, to = selection.to, "ignoring window start not before the end");
        }
    }

    let ranges = RangeCache::new(config.range.clone());
    let frame = selection.resolve(&table, &ranges, &config.geometry)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&frame)?);
        return Ok(());
    }

    let label_w = frame.rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
    let track = TrackTransform::new(0.0, TRACK_CELLS);

    println!("{}", frame.area);
    println!(
        "{:label_w$} |{:<half$}{:>half$}|",
        "",
        frame.label_min,
        frame.label_max,
        half = TRACK_CELLS as usize / 2
    );
    for row in &frame.rows {
        let mut cells = vec![' '; TRACK_CELLS as usize];
        if let Some((start, extent)) = track.bar_span(&row.geometry) {
            let first = start.round() as usize;
            let last = (start + extent).round() as usize;
            for cell in cells.iter_mut().take(last).skip(first) {
                *cell = '#';
            }
        }
        let bar: String = cells.into_iter().collect();
        println!("{:label_w$} |{}| {}", row.label, bar, row.raw);
    }

    Ok(())
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    match args.iter().position(|a| a == flag) {
        Some(i) => {
            args.remove(i);
            true
        }
        None => false,
    }
}

fn take_option(args: &mut Vec<String>, name: &str) -> Option<String> {
    let i = args.iter().position(|a| a == name)?;
    args.remove(i);
    (i < args.len()).then(|| args.remove(i))
}
