// File: crates/trends-core/src/data/normalize.rs
// Summary: Coerces raw string fields into typed rows; bad values become sentinels, never errors.

use super::loader::{RawRow, DIRECTOR_NAME, GROSS, IMDB_SCORE, MOVIE_TITLE, TITLE_YEAR};

/// A dataset record after type coercion, prior to filtering.
///
/// `score` and `year` are either finite or `NaN`. `gross` is `None` when the
/// source value was absent or not a finite number.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedRow {
    pub score: f64,
    pub year: f64,
    pub director: String,
    pub title: String,
    pub gross: Option<f64>,
}

impl NormalizedRow {
    pub fn has_valid_score(&self) -> bool {
        self.score.is_finite()
    }

    /// Year as a grouping key. Only whole years within `i32` qualify.
    pub fn year_key(&self) -> Option<i32> {
        let y = self.year;
        if y.is_finite() && y.fract() == 0.0 && y >= i32::MIN as f64 && y <= i32::MAX as f64 {
            Some(y as i32)
        } else {
            None
        }
    }
}

/// Trimmed finite number, or `None` for empty/missing/non-numeric/non-finite input.
pub fn parse_number(raw: Option<&str>) -> Option<f64> {
    let t = raw?.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn normalize(row: &RawRow) -> NormalizedRow {
    NormalizedRow {
        score: parse_number(row.get(IMDB_SCORE)).unwrap_or(f64::NAN),
        year: parse_number(row.get(TITLE_YEAR)).unwrap_or(f64::NAN),
        director: row.get(DIRECTOR_NAME).unwrap_or_default().to_string(),
        // titles in the public dataset carry a trailing non-breaking space
        title: row.get(MOVIE_TITLE).unwrap_or_default().trim().to_string(),
        gross: parse_number(row.get(GROSS)),
    }
}

pub fn normalize_all(rows: &[RawRow]) -> Vec<NormalizedRow> {
    rows.iter().map(normalize).collect()
}
