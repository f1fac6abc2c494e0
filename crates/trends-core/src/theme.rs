// File: crates/trends-core/src/theme.rs
// Summary: Light/Dark theming for chart colors; series strokes stay fixed across themes.

/// An sRGB color together with the CSS text used for it in SVG output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub css: &'static str,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(css: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self { css, r, g, b }
    }
}

pub const STEEL_BLUE: Color = Color::new("steelblue", 70, 130, 180);
pub const ORANGE: Color = Color::new("orange", 255, 165, 0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis: Color,
    pub label: Color,
    pub gross_stroke: Color,
    pub score_stroke: Color,
    pub stroke_width: f64,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::new("white", 255, 255, 255),
            axis: Color::new("black", 0, 0, 0),
            label: Color::new("#333333", 0x33, 0x33, 0x33),
            gross_stroke: STEEL_BLUE,
            score_stroke: ORANGE,
            stroke_width: 2.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::new("#121214", 18, 18, 20),
            axis: Color::new("#b4b4be", 180, 180, 190),
            label: Color::new("#ebebf5", 235, 235, 245),
            gross_stroke: STEEL_BLUE,
            score_stroke: ORANGE,
            stroke_width: 2.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
