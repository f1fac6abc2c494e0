// File: crates/trends-core/src/data/mod.rs
// Summary: Data stages (load -> normalize -> aggregate) and the one-shot async pipeline.

pub mod aggregate;
pub mod loader;
pub mod normalize;

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::Result;

pub use aggregate::{gross_by_year, score_by_year, ChartData, YearlyGross, YearlyScore, MIN_YEAR};
pub use loader::{load_rows, parse_rows, RawRow};
pub use normalize::{normalize, normalize_all, NormalizedRow};

/// Load the CSV at `path` and reduce it to the two yearly series.
///
/// Fails only with `DataUnavailable`; malformed rows are filtered, not reported.
pub async fn load_chart_data(path: impl AsRef<Path>) -> Result<ChartData> {
    let raw = load_rows(path).await?;
    let rows = normalize_all(&raw);
    let data = ChartData::from_rows(&rows);

    let top = rows
        .iter()
        .filter(|r| r.year_key().is_some_and(|y| y >= MIN_YEAR))
        .filter_map(|r| r.gross.map(|g| (g, r)))
        .max_by(|a, b| a.0.total_cmp(&b.0));
    if let Some((gross, r)) = top {
        debug!(title = %r.title, director = %r.director, year = r.year, gross, "highest-grossing title");
    }

    let usable = rows.iter().filter(|r| r.year_key().is_some_and(|y| y >= MIN_YEAR)).count();
    info!(
        rows = rows.len(),
        since_min_year = usable,
        gross_years = data.gross_by_year.len(),
        score_years = data.score_by_year.len(),
        "aggregated dataset"
    );
    if data.gross_by_year.is_empty() {
        warn!("no rows with gross revenue since {MIN_YEAR}; gross axis collapses to a single value");
    }
    if data.score_by_year.is_empty() {
        warn!("no rows with a valid IMDb score since {MIN_YEAR}");
    }
    Ok(data)
}
