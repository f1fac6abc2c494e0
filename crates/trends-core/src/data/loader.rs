// File: crates/trends-core/src/data/loader.rs
// Summary: Async CSV loader producing untyped raw rows keyed by header name.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{ChartError, LoadFailure, Result};

pub const IMDB_SCORE: &str = "imdb_score";
pub const TITLE_YEAR: &str = "title_year";
pub const DIRECTOR_NAME: &str = "director_name";
pub const GROSS: &str = "gross";
pub const MOVIE_TITLE: &str = "movie_title";

/// Columns that must be present in the header row (case-sensitive).
pub const REQUIRED_COLUMNS: [&str; 4] = [IMDB_SCORE, TITLE_YEAR, DIRECTOR_NAME, GROSS];

/// Header name -> column position, shared by every row of one file.
#[derive(Debug, Default)]
struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    fn new(headers: &csv::StringRecord) -> Self {
        let mut positions = HashMap::with_capacity(headers.len());
        for (i, h) in headers.iter().enumerate() {
            // first occurrence wins on duplicate headers
            positions.entry(h.to_string()).or_insert(i);
        }
        Self { positions }
    }

    fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }
}

/// One CSV line as untyped strings. Unused columns are kept but never read.
#[derive(Debug, Clone)]
pub struct RawRow {
    index: Arc<HeaderIndex>,
    record: csv::StringRecord,
}

impl RawRow {
    /// Field value for `column`, or `None` when the column is unknown or the line is short.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.index.position(column).and_then(|i| self.record.get(i))
    }

    pub fn len(&self) -> usize {
        self.record.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }
}

/// Read and parse the CSV at `path`. Any read or parse failure is `DataUnavailable`.
pub async fn load_rows(path: impl AsRef<Path>) -> Result<Vec<RawRow>> {
    let path = path.as_ref();
    let locator = path.display().to_string();

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ChartError::unavailable(locator.as_str(), e))?;
    debug!(bytes = bytes.len(), path = %locator, "read CSV resource");

    let rows = parse_rows(&bytes).map_err(|e| ChartError::unavailable(locator.as_str(), e))?;
    info!(rows = rows.len(), path = %locator, "loaded CSV rows");
    Ok(rows)
}

/// Parse CSV bytes with a required header row. Short lines are accepted (their
/// trailing fields read as absent).
pub fn parse_rows(bytes: &[u8]) -> Result<Vec<RawRow>, LoadFailure> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let index = HeaderIndex::new(rdr.headers()?);
    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| index.position(c).is_none()) {
        return Err(LoadFailure::MissingColumn(*missing));
    }
    let index = Arc::new(index);

    let mut rows = Vec::new();
    for rec in rdr.records() {
        rows.push(RawRow { index: Arc::clone(&index), record: rec? });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
director_name,gross,movie_title,title_year,imdb_score
James Cameron,760505847,Avatar,2009,7.9
Christopher Nolan,292568851,Inception,2010,8.8
Someone,,Short Row
";

    #[test]
    fn parses_rows_by_header_name() {
        let rows = parse_rows(SAMPLE.as_bytes()).expect("parse");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].get(DIRECTOR_NAME), Some("Christopher Nolan"));
        assert_eq!(rows[1].get(TITLE_YEAR), Some("2010"));
        assert_eq!(rows[0].get(GROSS), Some("760505847"));
    }

    #[test]
    fn short_rows_read_as_absent_fields() {
        let rows = parse_rows(SAMPLE.as_bytes()).expect("parse");
        let short = &rows[2];
        assert_eq!(short.get(GROSS), Some(""));
        assert_eq!(short.get(TITLE_YEAR), None);
        assert_eq!(short.get(IMDB_SCORE), None);
        assert_eq!(short.get("no_such_column"), None);
    }

    #[test]
    fn missing_required_column_is_rejected() {
        let csv = "director_name,gross,title_year\nA,1,2010\n";
        match parse_rows(csv.as_bytes()) {
            Err(LoadFailure::MissingColumn(col)) => assert_eq!(col, IMDB_SCORE),
            other => panic!("expected missing column, got {other:?}"),
        }
    }

    #[test]
    fn header_names_are_case_sensitive() {
        let csv = "Director_Name,gross,title_year,imdb_score\nA,1,2010,7\n";
        assert!(matches!(parse_rows(csv.as_bytes()), Err(LoadFailure::MissingColumn(DIRECTOR_NAME))));
    }

    #[tokio::test]
    async fn unreadable_path_is_data_unavailable() {
        let err = load_rows("definitely/not/here/movies.csv").await.unwrap_err();
        match err {
            ChartError::DataUnavailable { locator, source: LoadFailure::Io(_) } => {
                assert!(locator.ends_with("movies.csv"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
