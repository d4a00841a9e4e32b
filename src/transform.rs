//! Projection of percentage geometry onto a concrete track

use crate::data_types::{BarGeometry, Percent};

/// A horizontal track of `length` units starting at `origin` (pixels, cells, ...).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackTransform {
    pub origin: f32,
    pub length: f32,
}

impl TrackTransform {
    pub fn new(origin: f32, length: f32) -> Self {
        Self { origin, length }
    }

    pub fn map_percent(&self, p: Percent) -> f32 {
        let res = self.origin + self.length * (p.value() / 100.0) as f32;
        if res.is_nan() || res.is_infinite() {
            self.origin
        } else {
            res
        }
    }

    /// Returns `(start, extent)` of the bar, clipped to the track.
    /// `None` when the geometry is not finite.
    pub fn bar_span(&self, geometry: &BarGeometry) -> Option<(f32, f32)> {
        if !geometry.is_finite() {
            return None;
        }
        let end_of_track = self.origin + self.length;
        let start = self
            .map_percent(geometry.offset)
            .clamp(self.origin, end_of_track);
        let end = self
            .map_percent(Percent(geometry.offset.value() + geometry.width.value()))
            .clamp(start, end_of_track);
        Some((start, end - start))
    }
}
