use serde::{Deserialize, Serialize};

/// Min/max of one record's metric values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        (self.min - self.max).abs()
    }

    pub fn is_flat(&self) -> bool {
        self.span() == 0.0
    }

    pub fn is_all_negative(&self) -> bool {
        self.min < 0.0 && self.max < 0.0
    }

    pub fn is_all_positive(&self) -> bool {
        self.min > 0.0 && self.max > 0.0
    }

    /// Left axis label, e.g. `"-1.5%"`.
    pub fn label_min(&self) -> String {
        format!("{}%", self.min)
    }

    /// Right axis label.
    pub fn label_max(&self) -> String {
        format!("{}%", self.max)
    }
}
