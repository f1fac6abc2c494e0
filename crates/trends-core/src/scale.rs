// File: crates/trends-core/src/scale.rs
// Summary: Affine domain -> pixel scales for the year (X), gross (Y) and score (Y) axes.

use crate::data::{ChartData, MIN_YEAR};
use crate::grid;
use crate::types::ChartLayout;

/// Domain value (year, dollars, score).
pub type Value = f64;
/// Pixel coordinate inside the plot area.
pub type Pixel = f64;

/// Linear interpolation from `domain` onto `range`. No clamping: values outside
/// the domain extrapolate along the same line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (Value, Value),
    pub range: (Pixel, Pixel),
}

impl LinearScale {
    pub const fn new(domain: (Value, Value), range: (Pixel, Pixel)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to a pixel. A zero-width domain maps everything to the
    /// middle of the range.
    #[inline]
    pub fn apply(&self, v: Value) -> Pixel {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 {
            if v.is_nan() { f64::NAN } else { 0.5 }
        } else {
            (v - d0) / span
        };
        r0 + t * (r1 - r0)
    }

    pub fn ticks(&self, count: usize) -> Vec<Value> {
        grid::ticks(self.domain.0, self.domain.1, count)
    }

    pub fn tick_step(&self, count: usize) -> Value {
        grid::tick_step(self.domain.0, self.domain.1, count)
    }
}

/// Fixed upper bound of the IMDb score axis.
pub const MAX_SCORE: Value = 10.0;

/// The three scales shared by both series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScales {
    pub x_year: LinearScale,
    pub y_gross: LinearScale,
    pub y_score: LinearScale,
}

impl ChartScales {
    /// Year and gross domains come from the gross aggregate. When it is empty,
    /// each domain collapses onto its lower bound.
    pub fn from_data(data: &ChartData, layout: &ChartLayout) -> Self {
        let (w, h) = (layout.width(), layout.height());
        let min_year = MIN_YEAR as Value;
        let max_year = data.max_gross_year().map_or(min_year, |y| y as Value);
        let max_gross = data.max_gross().unwrap_or(0.0);
        Self {
            x_year: LinearScale::new((min_year, max_year), (0.0, w)),
            y_gross: LinearScale::new((0.0, max_gross), (h, 0.0)),
            y_score: LinearScale::new((0.0, MAX_SCORE), (h, 0.0)),
        }
    }
}
