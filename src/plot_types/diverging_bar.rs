use super::PlotRenderer;
use crate::data_types::{Percent, ValueRange};
use crate::selection::ChartFrame;
use crate::transform::TrackTransform;
use crate::utils::PixelsExt;
use gpui::*;

#[derive(Clone, Debug, PartialEq)]
pub struct DivergingBarConfig {
    pub color: Hsla,
    pub zero_line_color: Hsla,
    /// 0.0 to 1.0 relative to the row height
    pub bar_height_pct: f32,
}

impl Default for DivergingBarConfig {
    fn default() -> Self {
        Self {
            color: rgb(0xED2E7C).into(),
            zero_line_color: gpui::white().alpha(0.3),
            bar_height_pct: 1.0,
        }
    }
}

/// One horizontal bar per visible period, stacked top to bottom.
pub struct DivergingBarPlot {
    pub frame: ChartFrame,
    pub config: DivergingBarConfig,
}

impl DivergingBarPlot {
    pub fn new(frame: ChartFrame) -> Self {
        Self {
            frame,
            config: DivergingBarConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DivergingBarConfig) -> Self {
        self.config = config;
        self
    }

    /// Screen rectangles of the bars, in row order. Rows whose geometry is
    /// not finite are skipped.
    pub fn bar_rects(&self, bounds: Bounds<Pixels>) -> Vec<Bounds<Pixels>> {
        let rows = self.frame.rows.len();
        if rows == 0 {
            return Vec::new();
        }

        let track = TrackTransform::new(bounds.origin.x.as_f32(), bounds.size.width.as_f32());
        let row_h = bounds.size.height.as_f32() / rows as f32;
        let bar_h = row_h * self.config.bar_height_pct.clamp(0.0, 1.0);
        let inset = (row_h - bar_h) / 2.0;

        self.frame
            .rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| {
                let (x, w) = track.bar_span(&row.geometry)?;
                let y = bounds.origin.y.as_f32() + row_h * i as f32 + inset;
                Some(Bounds::new(
                    Point::new(px(x), px(y)),
                    Size::new(px(w), px(bar_h)),
                ))
            })
            .collect()
    }

    /// Vertical zero line for ranges that straddle zero.
    pub fn zero_line(&self, bounds: Bounds<Pixels>) -> Option<Bounds<Pixels>> {
        let range = self.frame.range;
        if range.is_flat() || range.is_all_negative() || range.is_all_positive() {
            return None;
        }
        let track = TrackTransform::new(bounds.origin.x.as_f32(), bounds.size.width.as_f32());
        let x = track.map_percent(Percent(100.0 * range.min.abs() / range.span()));
        Some(Bounds::new(
            Point::new(px(x), bounds.origin.y),
            Size::new(px(1.0), bounds.size.height),
        ))
    }
}

impl PlotRenderer for DivergingBarPlot {
    fn render(&self, window: &mut Window, bounds: Bounds<Pixels>) {
        for rect in self.bar_rects(bounds) {
            if rect.size.width.as_f32() <= 0.0 {
                continue;
            }
            window.paint_quad(fill(rect, self.config.color));
        }

        if let Some(line) = self.zero_line(bounds) {
            window.paint_quad(fill(line, self.config.zero_line_color));
        }
    }

    fn value_range(&self) -> Option<ValueRange> {
        if self.frame.rows.is_empty() {
            None
        } else {
            Some(self.frame.range)
        }
    }
}
