// Plot types module

pub mod diverging_bar;

pub use diverging_bar::{DivergingBarConfig, DivergingBarPlot};

use crate::data_types::ValueRange;
use gpui::*;

/// Trait for rendering plot types
pub trait PlotRenderer: Send + Sync {
    fn render(&self, window: &mut Window, bounds: Bounds<Pixels>);

    /// Range the bars are scaled to, if there is anything to draw.
    fn value_range(&self) -> Option<ValueRange>;
}
