// File: crates/trends-core/src/chart.rs
// Summary: ChartScene assembly (scales, series, axes, labels) and SVG file output.

use std::path::Path;

use tracing::{debug, info};

use crate::axis::Axis;
use crate::data::ChartData;
use crate::error::{ChartError, Result};
use crate::scale::ChartScales;
use crate::series::LineSeries;
use crate::svg;
use crate::text::{chart_labels, LabelRole, TextLabel};
use crate::theme::Theme;
use crate::types::ChartLayout;

/// Fully laid-out chart: two series sharing the year axis, with gross on the
/// left and score on the right. Built once and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartScene {
    pub layout: ChartLayout,
    pub theme: Theme,
    pub scales: ChartScales,
    pub gross: LineSeries,
    pub score: LineSeries,
    pub gross_path: Option<String>,
    pub score_path: Option<String>,
    pub x_axis: Axis,
    pub gross_axis: Axis,
    pub score_axis: Axis,
    pub labels: Vec<TextLabel>,
}

impl ChartScene {
    pub fn build(data: &ChartData, layout: &ChartLayout, theme: &Theme) -> Self {
        let scales = ChartScales::from_data(data, layout);
        debug!(?scales, "built scales");

        let gross = LineSeries::gross(&data.gross_by_year, theme.gross_stroke, theme.stroke_width);
        let score = LineSeries::score(&data.score_by_year, theme.score_stroke, theme.stroke_width);
        let gross_path = gross.path_data(&scales.x_year, &scales.y_gross);
        let score_path = score.path_data(&scales.x_year, &scales.y_score);

        Self {
            layout: *layout,
            theme: *theme,
            scales,
            gross,
            score,
            gross_path,
            score_path,
            x_axis: Axis::bottom(scales.x_year, layout),
            gross_axis: Axis::left(scales.y_gross),
            score_axis: Axis::right(scales.y_score, layout),
            labels: chart_labels(layout),
        }
    }

    pub fn label(&self, role: LabelRole) -> Option<&TextLabel> {
        self.labels.iter().find(|l| l.role == role)
    }

    pub fn to_svg(&self) -> String {
        svg::write_document(self)
    }

    /// Write the SVG document to `path`, creating parent directories as needed.
    pub fn render_to_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let out = |source| ChartError::Output { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(out)?;
        }
        let doc = self.to_svg();
        std::fs::write(path, doc.as_bytes()).map_err(out)?;
        info!(path = %path.display(), bytes = doc.len(), "wrote SVG chart");
        Ok(())
    }
}
