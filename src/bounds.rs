//! Filter criterion expressed as a ceiling or a full range.

/* project use */
use crate::error;

/// Default GC content interval in percent
pub const GC_DEFAULT: Interval = Interval {
    low: 0.0,
    high: 100.0,
};

/// Default length interval
pub const LENGTH_DEFAULT: Interval = Interval {
    low: 0.0,
    high: 4_294_967_296.0,
};

/// Closed interval, caller is expected to provide low <= high
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub low: f64,
    pub high: f64,
}

impl Interval {
    /// Return true if value is in [low, high]
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

/// A single value is an upper bound, a pair is used as is
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds {
    Max(f64),
    Range(f64, f64),
}

impl Bounds {
    /// Convert bounds in interval, a scalar start at default_low
    pub fn normalize(&self, default_low: f64, _default_high: f64) -> Interval {
        match *self {
            Bounds::Max(high) => Interval {
                low: default_low,
                high,
            },
            Bounds::Range(low, high) => Interval { low, high },
        }
    }
}

/// Free function form of [Bounds::normalize]
pub fn normalize(bounds: Bounds, default_low: f64, default_high: f64) -> Interval {
    bounds.normalize(default_low, default_high)
}

impl From<f64> for Bounds {
    fn from(value: f64) -> Self {
        Bounds::Max(value)
    }
}

impl From<(f64, f64)> for Bounds {
    fn from((low, high): (f64, f64)) -> Self {
        Bounds::Range(low, high)
    }
}

impl From<Interval> for Bounds {
    fn from(interval: Interval) -> Self {
        Bounds::Range(interval.low, interval.high)
    }
}

impl std::str::FromStr for Bounds {
    type Err = error::Error;

    fn from_str(value: &str) -> error::Result<Self> {
        let invalid = || error::Error::InvalidBounds {
            value: value.to_string(),
        };

        match value.split_once(',') {
            Some((low, high)) => Ok(Bounds::Range(
                low.trim().parse().map_err(|_| invalid())?,
                high.trim().parse().map_err(|_| invalid())?,
            )),
            None => Ok(Bounds::Max(value.trim().parse().map_err(|_| invalid())?)),
        }
    }
}
