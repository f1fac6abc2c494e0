// File: crates/trends-core/src/axis.rs
// Summary: Axis model: orientation, tick placement and tick label formatting.

use crate::grid::precision_fixed;
use crate::scale::LinearScale;
use crate::svg::Num;
use crate::text::Anchor;
use crate::types::ChartLayout;

/// Half-pixel shift that keeps 1px axis strokes crisp.
pub const CRISP_OFFSET: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
    Right,
}

impl Orientation {
    pub const fn is_vertical(self) -> bool {
        matches!(self, Orientation::Left | Orientation::Right)
    }

    /// Direction ticks point away from the plot: -1 for left, +1 otherwise.
    pub const fn k(self) -> f64 {
        match self {
            Orientation::Left => -1.0,
            Orientation::Bottom | Orientation::Right => 1.0,
        }
    }

    /// Tick labels sit on the outside of the axis line.
    pub const fn text_anchor(self) -> Anchor {
        match self {
            Orientation::Left => Anchor::End,
            Orientation::Right => Anchor::Start,
            Orientation::Bottom => Anchor::Middle,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Rounded to a whole number (years).
    Integer,
    /// Raw dollars shown as billions with a `B` suffix.
    Billions,
    /// Fixed precision derived from the tick step.
    Default,
}

impl TickFormat {
    pub fn format(self, v: f64, step: f64) -> String {
        if !v.is_finite() {
            return v.to_string();
        }
        match self {
            TickFormat::Integer => format!("{}", Num(v.round())),
            TickFormat::Billions => format!("{}B", Num(v / 1e9)),
            TickFormat::Default => format!("{:.*}", precision_fixed(step), v),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Pixel position along the axis (before the crisp offset).
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orientation: Orientation,
    pub scale: LinearScale,
    /// Placement of the axis group relative to the plot origin.
    pub translate: (f64, f64),
    pub ticks: Vec<Tick>,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
}

impl Axis {
    pub const DEFAULT_TICK_COUNT: usize = 10;

    pub fn new(orientation: Orientation, scale: LinearScale, format: TickFormat, translate: (f64, f64)) -> Self {
        let step = scale.tick_step(Self::DEFAULT_TICK_COUNT);
        let ticks = scale
            .ticks(Self::DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|value| Tick { value, position: scale.apply(value), label: format.format(value, step) })
            .collect();
        Self { orientation, scale, translate, ticks, tick_size_inner: 6.0, tick_size_outer: 6.0, tick_padding: 3.0 }
    }

    /// Year axis along the bottom edge of the plot.
    pub fn bottom(scale: LinearScale, layout: &ChartLayout) -> Self {
        Self::new(Orientation::Bottom, scale, TickFormat::Integer, (0.0, layout.height()))
    }

    /// Gross axis along the left edge.
    pub fn left(scale: LinearScale) -> Self {
        Self::new(Orientation::Left, scale, TickFormat::Billions, (0.0, 0.0))
    }

    /// Score axis along the right edge.
    pub fn right(scale: LinearScale, layout: &ChartLayout) -> Self {
        Self::new(Orientation::Right, scale, TickFormat::Default, (layout.width(), 0.0))
    }

    /// Distance from the axis line to the tick label.
    pub fn label_spacing(&self) -> f64 {
        self.tick_size_inner.max(0.0) + self.tick_padding
    }

    /// Vertices of the axis line including the outer ticks, in drawing order.
    pub fn domain_points(&self) -> Vec<(f64, f64)> {
        let (r0, r1) = self.scale.range;
        let (r0, r1) = (r0 + CRISP_OFFSET, r1 + CRISP_OFFSET);
        let outer = self.orientation.k() * self.tick_size_outer;
        let o = CRISP_OFFSET;
        let along = if self.orientation.is_vertical() {
            [(outer, r0), (o, r0), (o, r1), (outer, r1)]
        } else {
            [(r0, outer), (r0, o), (r1, o), (r1, outer)]
        };
        if self.tick_size_outer != 0.0 { along.to_vec() } else { along[1..3].to_vec() }
    }

    /// The axis line with outer ticks at both ends, as SVG path data.
    pub fn domain_path(&self) -> String {
        let k = self.orientation.k();
        let (r0, r1) = self.scale.range;
        let (r0, r1) = (r0 + CRISP_OFFSET, r1 + CRISP_OFFSET);
        let outer = k * self.tick_size_outer;
        let o = CRISP_OFFSET;
        if self.orientation.is_vertical() {
            if self.tick_size_outer != 0.0 {
                format!("M{},{}H{}V{}H{}", Num(outer), Num(r0), Num(o), Num(r1), Num(outer))
            } else {
                format!("M{},{}V{}", Num(o), Num(r0), Num(r1))
            }
        } else if self.tick_size_outer != 0.0 {
            format!("M{},{}V{}H{}V{}", Num(r0), Num(outer), Num(o), Num(r1), Num(outer))
        } else {
            format!("M{},{}H{}", Num(r0), Num(o), Num(r1))
        }
    }
}
