// File: crates/trends-core/src/lib.rs
// Summary: Core library entry point; CSV -> yearly aggregates -> scales -> chart scene -> SVG.

pub mod axis;
pub mod chart;
pub mod data;
pub mod error;
pub mod grid;
pub mod scale;
pub mod series;
pub mod svg;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{Axis, Orientation, Tick, TickFormat};
pub use chart::ChartScene;
pub use data::{load_chart_data, ChartData, NormalizedRow, RawRow, YearlyGross, YearlyScore};
pub use error::{ChartError, LoadFailure};
pub use scale::{ChartScales, LinearScale};
pub use series::LineSeries;
pub use text::{Anchor, LabelRole, TextLabel};
pub use theme::{Color, Theme};
pub use types::{ChartLayout, Insets};

use std::path::Path;

/// Run the whole pipeline once: load, aggregate, lay out.
pub async fn build_scene(path: impl AsRef<Path>, layout: &ChartLayout, theme: &Theme) -> error::Result<(ChartData, ChartScene)> {
    let data = load_chart_data(path).await?;
    let scene = ChartScene::build(&data, layout, theme);
    Ok((data, scene))
}
