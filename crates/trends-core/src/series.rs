// File: crates/trends-core/src/series.rs
// Summary: Line series model and polyline path geometry (straight segments, no smoothing).

use std::fmt::Write as _;

use crate::data::{YearlyGross, YearlyScore};
use crate::scale::LinearScale;
use crate::svg::Num;
use crate::theme::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub name: &'static str,
    pub data_xy: Vec<(f64, f64)>, // (year, value), ascending by year
    pub stroke: Color,
    pub stroke_width: f64,
}

impl LineSeries {
    pub fn with_data(name: &'static str, data: Vec<(f64, f64)>, stroke: Color, stroke_width: f64) -> Self {
        Self { name, data_xy: data, stroke, stroke_width }
    }

    pub fn gross(rows: &[YearlyGross], stroke: Color, stroke_width: f64) -> Self {
        let data = rows.iter().map(|g| (g.year as f64, g.gross)).collect();
        Self::with_data("gross", data, stroke, stroke_width)
    }

    pub fn score(rows: &[YearlyScore], stroke: Color, stroke_width: f64) -> Self {
        let data = rows.iter().map(|s| (s.year as f64, s.score)).collect();
        Self::with_data("score", data, stroke, stroke_width)
    }

    /// Pixel coordinates of each point, in sequence order.
    pub fn project(&self, x: &LinearScale, y: &LinearScale) -> Vec<(f64, f64)> {
        self.data_xy.iter().map(|&(vx, vy)| (x.apply(vx), y.apply(vy))).collect()
    }

    /// SVG path data visiting every point in order, or `None` when there are no points.
    pub fn path_data(&self, x: &LinearScale, y: &LinearScale) -> Option<String> {
        line_path(&self.project(x, y))
    }
}

/// `M x0,y0 L x1,y1 ...` with no whitespace. A lone point closes on itself (`M x,yZ`).
pub fn line_path(points: &[(f64, f64)]) -> Option<String> {
    let (&(x0, y0), rest) = points.split_first()?;
    let mut d = String::with_capacity(points.len() * 16);
    let _ = write!(d, "M{},{}", Num(x0), Num(y0));
    for &(x, y) in rest {
        let _ = write!(d, "L{},{}", Num(x), Num(y));
    }
    if rest.is_empty() {
        d.push('Z');
    }
    Some(d)
}
