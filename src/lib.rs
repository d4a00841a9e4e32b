//! diverging_chart crate: diverging bar geometry for percentage time-series tables

pub mod data_types;
pub mod geometry;
pub mod range;
pub mod selection;
pub mod source;
pub mod table;
pub mod transform;

#[cfg(feature = "gpui")]
pub mod plot_types;
#[cfg(feature = "gpui")]
pub mod utils;

pub use data_types::{BarGeometry, ChartConfig, Percent, Record, Table, ValueRange};
pub use geometry::{bar_geometry, geometry, geometry_with, parse_percent};
pub use range::{find_range, find_range_with, try_find_range_with, RangeCache};
pub use selection::{BarRow, ChartFrame, Selection};
pub use source::{load_table, FileSource, InlineSource, TableSource};
pub use table::{parse, parse_with};

#[cfg(feature = "gpui")]
pub use plot_types::{DivergingBarConfig, DivergingBarPlot, PlotRenderer};
