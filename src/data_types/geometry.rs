use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A percentage of the bar track, written as `"<number>%"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Percent(pub f64);

impl Percent {
    pub const ZERO: Percent = Percent(0.0);
    pub const FULL: Percent = Percent(100.0);

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.0 prints as "-0"
        let v = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{}%", v)
    }
}

impl FromStr for Percent {
    type Err = std::num::ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.strip_suffix('%').unwrap_or(s).trim().parse().map(Percent)
    }
}

impl Serialize for Percent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Where a bar starts inside its track and how much of the track it covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub offset: Percent,
    pub width: Percent,
}

impl BarGeometry {
    pub fn new(offset: f64, width: f64) -> Self {
        Self {
            offset: Percent(offset),
            width: Percent(width),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.offset.is_finite() && self.width.is_finite()
    }
}
