// File: crates/trends-core/src/types.rs
// Summary: Layout types and constants (outer size, margins, plot interior).

/// Default outer surface width in pixels.
pub const WIDTH: u32 = 800;
/// Default outer surface height in pixels.
pub const HEIGHT: u32 = 350;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(70, 30, 50, 60)
    }
}

/// Immutable chart layout: outer surface size and the margins around the plot area.
///
/// Every component that positions something receives the layout explicitly;
/// there is no process-wide layout state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartLayout {
    pub outer_width: u32,
    pub outer_height: u32,
    pub insets: Insets,
}

impl ChartLayout {
    pub const fn new(outer_width: u32, outer_height: u32, insets: Insets) -> Self {
        Self { outer_width, outer_height, insets }
    }

    /// Plot interior width (outer width minus horizontal margins).
    pub fn width(&self) -> f64 {
        self.outer_width.saturating_sub(self.insets.hsum()) as f64
    }

    /// Plot interior height (outer height minus vertical margins).
    pub fn height(&self) -> f64 {
        self.outer_height.saturating_sub(self.insets.vsum()) as f64
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}
