// File: crates/trends-render-skia/src/lib.rs
// Summary: Headless PNG rasterization of a ChartScene using Skia CPU raster surfaces.

use std::path::Path;

use anyhow::Result;
use skia_safe as skia;
use tracing::info;

use trends_core::axis::CRISP_OFFSET;
use trends_core::theme::Color;
use trends_core::{Axis, ChartScene, LinearScale, LineSeries, TextLabel};

mod text;
pub use text::TextShaper;

const TICK_FONT_SIZE: f32 = 10.0;
const TITLE_FONT_SIZE: f32 = 16.0;
const LABEL_FONT_SIZE: f32 = 13.0;

fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(255, c.r, c.g, c.b)
}

pub struct SkiaRenderer {
    text: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    /// Rasterize the scene at its layout's outer size and encode as PNG.
    pub fn render_png_bytes(&self, scene: &ChartScene) -> Result<Vec<u8>> {
        let (w, h) = (scene.layout.outer_width as i32, scene.layout.outer_height as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(sk_color(scene.theme.background));

        canvas.save();
        canvas.translate((scene.layout.insets.left as f32, scene.layout.insets.top as f32));

        let scales = &scene.scales;
        draw_line_series(canvas, &scene.gross, &scales.x_year, &scales.y_gross);
        self.draw_axis(canvas, &scene.x_axis, scene.theme.axis);
        self.draw_axis(canvas, &scene.gross_axis, scene.theme.axis);
        draw_line_series(canvas, &scene.score, &scales.x_year, &scales.y_score);
        self.draw_axis(canvas, &scene.score_axis, scene.theme.axis);
        for label in &scene.labels {
            self.draw_label(canvas, label, scene.theme.label);
        }

        canvas.restore();

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scene to a PNG at `output_png_path`.
    pub fn render_to_png(&self, scene: &ChartScene, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_png_bytes(scene)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote PNG chart");
        Ok(())
    }

    fn draw_axis(&self, canvas: &skia::Canvas, axis: &Axis, color: Color) {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(sk_color(color));

        canvas.save();
        canvas.translate((axis.translate.0 as f32, axis.translate.1 as f32));

        if let Some(domain) = polyline(&axis.domain_points()) {
            canvas.draw_path(&domain, &stroke);
        }

        let o = axis.orientation;
        let k = o.k() as f32;
        let inner = k * axis.tick_size_inner as f32;
        let spacing = k * axis.label_spacing() as f32;
        let anchor = o.text_anchor();
        for tick in &axis.ticks {
            let p = (tick.position + CRISP_OFFSET) as f32;
            if o.is_vertical() {
                canvas.draw_line((0.0, p), (inner, p), &stroke);
                let baseline = p + 0.32 * TICK_FONT_SIZE;
                self.text.draw_anchored(canvas, &tick.label, spacing, baseline, anchor, TICK_FONT_SIZE, sk_color(color), false);
            } else {
                canvas.draw_line((p, 0.0), (p, inner), &stroke);
                let baseline = spacing + 0.71 * TICK_FONT_SIZE;
                self.text.draw_anchored(canvas, &tick.label, p, baseline, anchor, TICK_FONT_SIZE, sk_color(color), false);
            }
        }
        canvas.restore();
    }

    fn draw_label(&self, canvas: &skia::Canvas, label: &TextLabel, color: Color) {
        let title = label.class == "title";
        let size = if title { TITLE_FONT_SIZE } else { LABEL_FONT_SIZE };

        canvas.save();
        if let Some((tx, ty)) = label.translate {
            canvas.translate((tx as f32, ty as f32));
        }
        if let Some(deg) = label.rotate {
            canvas.rotate(deg as f32, None);
        }
        let (x, y) = (label.x.unwrap_or(0.0) as f32, label.y.unwrap_or(0.0) as f32);
        self.text.draw_anchored(canvas, &label.text, x, y, label.anchor, size, sk_color(color), title);
        canvas.restore();
    }
}

// ---- helpers ----------------------------------------------------------------

fn polyline(points: &[(f64, f64)]) -> Option<skia::Path> {
    let (&(x0, y0), rest) = points.split_first()?;
    let mut path = skia::Path::new();
    path.move_to((x0 as f32, y0 as f32));
    for &(x, y) in rest {
        path.line_to((x as f32, y as f32));
    }
    Some(path)
}

/// Series outline matching the SVG path data: a lone point closes on itself.
fn series_path(points: &[(f64, f64)]) -> Option<skia::Path> {
    let mut path = polyline(points)?;
    if points.len() == 1 {
        path.close();
    }
    Some(path)
}

fn draw_line_series(canvas: &skia::Canvas, series: &LineSeries, x: &LinearScale, y: &LinearScale) {
    let Some(path) = series_path(&series.project(x, y)) else { return };

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.stroke_width as f32);
    stroke.set_color(sk_color(series.stroke));

    canvas.draw_path(&path, &stroke);
}
