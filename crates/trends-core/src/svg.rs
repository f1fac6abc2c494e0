// File: crates/trends-core/src/svg.rs
// Summary: SVG document serialization of a chart scene (string building, no DOM).

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use crate::axis::{Axis, CRISP_OFFSET};
use crate::chart::ChartScene;
use crate::series::LineSeries;
use crate::text::{Anchor, LabelRole, TextLabel};
use crate::theme::Theme;

/// Container id the chart fragment is attached under.
pub const CONTAINER_ID: &str = "lineChart";

/// Shortest round-trip formatting for coordinates; negative zero prints as `0`.
#[derive(Clone, Copy, Debug)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Escape text content and attribute values.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Serialize the whole scene as a standalone SVG document.
pub fn write_document(scene: &ChartScene) -> String {
    let layout = &scene.layout;
    let theme = &scene.theme;
    let (ow, oh) = (layout.outer_width, layout.outer_height);
    let mut svg = String::with_capacity(16 * 1024);

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" id="{CONTAINER_ID}" width="{ow}" height="{oh}" viewBox="0 0 {ow} {oh}">"#
    );
    let _ = writeln!(
        svg,
        "<style>.title{{font:bold 16px sans-serif;fill:{c}}}.axis-label{{font:13px sans-serif;fill:{c}}}</style>",
        c = theme.label.css
    );
    let _ = writeln!(svg, r#"<rect width="{ow}" height="{oh}" fill="{}"/>"#, theme.background.css);
    let _ = writeln!(svg, r#"<g transform="translate({},{})">"#, layout.insets.left, layout.insets.top);

    write_series(&mut svg, &scene.gross, scene.gross_path.as_deref());
    write_axis(&mut svg, &scene.x_axis, theme);
    write_axis(&mut svg, &scene.gross_axis, theme);
    for role in [LabelRole::Title, LabelRole::XAxis, LabelRole::LeftAxis] {
        if let Some(label) = scene.label(role) {
            write_label(&mut svg, label);
        }
    }
    write_series(&mut svg, &scene.score, scene.score_path.as_deref());
    write_axis(&mut svg, &scene.score_axis, theme);
    if let Some(label) = scene.label(LabelRole::RightAxis) {
        write_label(&mut svg, label);
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

fn write_series(svg: &mut String, series: &LineSeries, d: Option<&str>) {
    let _ = write!(
        svg,
        r#"<path class="series-{}" fill="none" stroke="{}" stroke-width="{}""#,
        series.name,
        series.stroke.css,
        Num(series.stroke_width)
    );
    if let Some(d) = d {
        let _ = write!(svg, r#" d="{d}""#);
    }
    svg.push_str("/>\n");
}

fn write_axis(svg: &mut String, axis: &Axis, theme: &Theme) {
    let o = axis.orientation;
    let stroke = theme.axis.css;
    let _ = write!(
        svg,
        r#"<g fill="none" font-size="10" font-family="sans-serif" text-anchor="{}""#,
        o.text_anchor().as_str()
    );
    if axis.translate != (0.0, 0.0) {
        let _ = write!(svg, r#" transform="translate({},{})""#, Num(axis.translate.0), Num(axis.translate.1));
    }
    svg.push_str(">\n");
    let _ = writeln!(svg, r#"<path class="domain" stroke="{stroke}" d="{}"/>"#, axis.domain_path());

    let k = o.k();
    let inner = Num(k * axis.tick_size_inner);
    let spacing = Num(k * axis.label_spacing());
    for tick in &axis.ticks {
        let p = Num(tick.position + CRISP_OFFSET);
        let label = escape(&tick.label);
        if o.is_vertical() {
            let _ = writeln!(
                svg,
                r#"<g class="tick" opacity="1" transform="translate(0,{p})"><line stroke="{stroke}" x2="{inner}"/><text fill="{stroke}" x="{spacing}" dy="0.32em">{label}</text></g>"#
            );
        } else {
            let _ = writeln!(
                svg,
                r#"<g class="tick" opacity="1" transform="translate({p},0)"><line stroke="{stroke}" y2="{inner}"/><text fill="{stroke}" y="{spacing}" dy="0.71em">{label}</text></g>"#
            );
        }
    }
    svg.push_str("</g>\n");
}

fn write_label(svg: &mut String, label: &TextLabel) {
    let _ = write!(svg, r#"<text class="{}""#, label.class);
    // start is the SVG default and is left implicit
    if label.anchor != Anchor::Start {
        let _ = write!(svg, r#" text-anchor="{}""#, label.anchor.as_str());
    }
    if let Some(t) = label.transform_attr() {
        let _ = write!(svg, r#" transform="{t}""#);
    }
    if let Some(x) = label.x {
        let _ = write!(svg, r#" x="{}""#, Num(x));
    }
    if let Some(y) = label.y {
        let _ = write!(svg, r#" y="{}""#, Num(y));
    }
    let _ = writeln!(svg, ">{}</text>", escape(&label.text));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_print_like_coordinates() {
        assert_eq!(Num(0.0).to_string(), "0");
        assert_eq!(Num(-0.0).to_string(), "0");
        assert_eq!(Num(240.0).to_string(), "240");
        assert_eq!(Num(-6.0).to_string(), "-6");
        assert_eq!(Num(120.5).to_string(), "120.5");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("Gross Revenue (Billion $)"), "Gross Revenue (Billion $)");
        assert_eq!(escape("Tom & Jerry <3"), "Tom &amp; Jerry &lt;3");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn only_centered_labels_carry_an_anchor() {
        let scene = ChartScene::build(&Default::default(), &Default::default(), &Theme::light());
        let svg = write_document(&scene);
        assert!(svg.contains(r#"<text class="title" x="360" y="-25">"#));
        assert!(svg.contains(r#"<text class="axis-label" text-anchor="middle" x="360" y="270">Year</text>"#));
        assert!(svg.contains(r#"<text class="axis-label" transform="rotate(-90)" x="-120" y="-35">"#));
        assert!(svg.contains(r#"<text class="axis-label" text-anchor="middle" transform="translate(740, 120) rotate(90)">"#));
    }
}
