// File: crates/trends-core/src/text.rs
// Summary: Static chart annotations (title and axis titles) placed from layout constants.

use crate::types::ChartLayout;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelRole {
    Title,
    XAxis,
    LeftAxis,
    RightAxis,
}

/// A text element. Drawing order: translate, then rotate, then place at `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub role: LabelRole,
    pub class: &'static str,
    pub text: String,
    pub anchor: Anchor,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub translate: Option<(f64, f64)>,
    pub rotate: Option<f64>,
}

impl TextLabel {
    fn new(role: LabelRole, class: &'static str, text: &str) -> Self {
        Self { role, class, text: text.to_string(), anchor: Anchor::Start, x: None, y: None, translate: None, rotate: None }
    }

    fn centered(mut self) -> Self {
        self.anchor = Anchor::Middle;
        self
    }

    fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    fn transformed(mut self, translate: Option<(f64, f64)>, rotate: f64) -> Self {
        self.translate = translate;
        self.rotate = Some(rotate);
        self
    }

    /// SVG `transform` attribute value, if any.
    pub fn transform_attr(&self) -> Option<String> {
        use crate::svg::Num;
        match (self.translate, self.rotate) {
            (Some((tx, ty)), Some(r)) => Some(format!("translate({}, {}) rotate({})", Num(tx), Num(ty), Num(r))),
            (Some((tx, ty)), None) => Some(format!("translate({}, {})", Num(tx), Num(ty))),
            (None, Some(r)) => Some(format!("rotate({})", Num(r))),
            (None, None) => None,
        }
    }
}

pub const TITLE: &str = "Trends in Total Gross Movie Revenue";
pub const X_LABEL: &str = "Year";
pub const LEFT_LABEL: &str = "Gross Revenue (Billion $)";
pub const RIGHT_LABEL: &str = "Average IMDb Score";

/// The four annotations: title, x-axis title, left and right y-axis titles.
pub fn chart_labels(layout: &ChartLayout) -> Vec<TextLabel> {
    let (w, h) = (layout.width(), layout.height());
    let m = layout.insets;
    vec![
        TextLabel::new(LabelRole::Title, "title", TITLE).at(w / 2.0, -(m.top as f64) / 2.0),
        TextLabel::new(LabelRole::XAxis, "axis-label", X_LABEL).centered().at(w / 2.0, h + m.bottom as f64 / 2.0),
        TextLabel::new(LabelRole::LeftAxis, "axis-label", LEFT_LABEL)
            .at(-h / 2.0, -(m.left as f64) / 2.0)
            .transformed(None, -90.0),
        TextLabel::new(LabelRole::RightAxis, "axis-label", RIGHT_LABEL)
            .centered()
            .transformed(Some((w + m.right as f64 - 10.0, h / 2.0)), 90.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_sit_at_layout_derived_positions() {
        let labels = chart_labels(&ChartLayout::default());
        assert_eq!(labels.len(), 4);

        let title = &labels[0];
        assert_eq!((title.x, title.y), (Some(360.0), Some(-25.0)));
        assert_eq!(title.class, "title");
        assert_eq!(title.anchor, Anchor::Start);

        let x = &labels[1];
        assert_eq!((x.x, x.y), (Some(360.0), Some(270.0)));
        assert_eq!(x.text, "Year");
        assert_eq!(x.anchor, Anchor::Middle);

        let left = &labels[2];
        assert_eq!((left.x, left.y), (Some(-120.0), Some(-35.0)));
        assert_eq!(left.transform_attr().as_deref(), Some("rotate(-90)"));
        assert_eq!(left.anchor, Anchor::Start);

        let right = &labels[3];
        assert_eq!((right.x, right.y), (None, None));
        assert_eq!(right.transform_attr().as_deref(), Some("translate(740, 120) rotate(90)"));
        assert_eq!(right.anchor, Anchor::Middle);
    }
}
