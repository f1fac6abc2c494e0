// File: crates/trends-core/src/data/aggregate.rs
// Summary: Group-by-year reductions (summed gross, mean score) over normalized rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::normalize::NormalizedRow;

/// Earliest title year that contributes to either aggregate.
pub const MIN_YEAR: i32 = 2010;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearlyGross {
    pub year: i32,
    pub gross: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearlyScore {
    pub year: i32,
    pub score: f64,
}

/// Fold every qualifying row into its year bucket. `pick` both filters and
/// extracts the value; rows before `MIN_YEAR` or without a whole-year key are skipped.
/// The map keeps keys ordered, so iteration is ascending by year.
fn rollup<A: Default>(
    rows: &[NormalizedRow],
    pick: impl Fn(&NormalizedRow) -> Option<f64>,
    fold: impl Fn(&mut A, f64),
) -> BTreeMap<i32, A> {
    let mut groups: BTreeMap<i32, A> = BTreeMap::new();
    for row in rows {
        let Some(year) = row.year_key() else { continue };
        if year < MIN_YEAR {
            continue;
        }
        let Some(v) = pick(row) else { continue };
        fold(groups.entry(year).or_default(), v);
    }
    groups
}

/// Total gross per year, ascending by year.
pub fn gross_by_year(rows: &[NormalizedRow]) -> Vec<YearlyGross> {
    rollup(rows, |r| r.gross, |sum: &mut f64, v| *sum += v)
        .into_iter()
        .map(|(year, gross)| YearlyGross { year, gross })
        .collect()
}

/// Mean score per year, ascending by year. Years with no valid score are absent.
pub fn score_by_year(rows: &[NormalizedRow]) -> Vec<YearlyScore> {
    rollup(
        rows,
        |r| r.has_valid_score().then_some(r.score),
        |(sum, n): &mut (f64, usize), v| {
            *sum += v;
            *n += 1;
        },
    )
    .into_iter()
    .map(|(year, (sum, n))| YearlyScore { year, score: sum / n as f64 })
    .collect()
}

/// Output of the aggregation stage: two independent, year-sorted series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub gross_by_year: Vec<YearlyGross>,
    pub score_by_year: Vec<YearlyScore>,
}

impl ChartData {
    pub fn from_rows(rows: &[NormalizedRow]) -> Self {
        Self { gross_by_year: gross_by_year(rows), score_by_year: score_by_year(rows) }
    }

    pub fn max_gross_year(&self) -> Option<i32> {
        self.gross_by_year.iter().map(|g| g.year).max()
    }

    pub fn max_gross(&self) -> Option<f64> {
        self.gross_by_year.iter().map(|g| g.gross).reduce(f64::max)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: f64, score: f64, gross: Option<f64>) -> NormalizedRow {
        NormalizedRow { score, year, director: String::new(), title: String::new(), gross }
    }

    #[test]
    fn gross_sums_per_year() {
        let rows = vec![
            row(2010.0, f64::NAN, Some(1_000_000_000.0)),
            row(2010.0, f64::NAN, Some(500_000_000.0)),
            row(2011.0, f64::NAN, Some(2_000_000_000.0)),
        ];
        assert_eq!(
            gross_by_year(&rows),
            vec![
                YearlyGross { year: 2010, gross: 1_500_000_000.0 },
                YearlyGross { year: 2011, gross: 2_000_000_000.0 },
            ]
        );
    }

    #[test]
    fn score_means_per_year() {
        let rows = vec![row(2012.0, 8.0, None), row(2012.0, 6.0, None)];
        assert_eq!(score_by_year(&rows), vec![YearlyScore { year: 2012, score: 7.0 }]);
    }

    #[test]
    fn rows_before_2010_and_invalid_values_are_dropped() {
        let rows = vec![
            row(2009.0, 9.0, Some(10.0)),
            row(f64::NAN, 9.0, Some(10.0)),
            row(2013.0, f64::NAN, None),
            row(2013.5, 5.0, Some(10.0)),
            row(2014.0, 5.0, None),
        ];
        assert!(gross_by_year(&rows).is_empty());
        assert_eq!(score_by_year(&rows), vec![YearlyScore { year: 2014, score: 5.0 }]);
    }

    #[test]
    fn output_is_sorted_even_when_input_is_not() {
        let rows = vec![
            row(2015.0, 6.0, Some(3.0)),
            row(2011.0, 7.0, Some(1.0)),
            row(2013.0, 8.0, Some(2.0)),
            row(2011.0, 9.0, Some(4.0)),
        ];
        let years: Vec<i32> = gross_by_year(&rows).iter().map(|g| g.year).collect();
        assert_eq!(years, vec![2011, 2013, 2015]);
        let scores = score_by_year(&rows);
        assert_eq!(scores.iter().map(|s| s.year).collect::<Vec<_>>(), vec![2011, 2013, 2015]);
        assert_eq!(scores[0].score, 8.0);
    }

    #[test]
    fn series_are_independent() {
        let rows = vec![row(2010.0, f64::NAN, Some(5.0)), row(2011.0, 7.0, None)];
        let data = ChartData::from_rows(&rows);
        assert_eq!(data.gross_by_year, vec![YearlyGross { year: 2010, gross: 5.0 }]);
        assert_eq!(data.score_by_year, vec![YearlyScore { year: 2011, score: 7.0 }]);
        assert_eq!(data.max_gross_year(), Some(2010));
        assert_eq!(data.max_gross(), Some(5.0));
    }

    #[test]
    fn empty_input_yields_empty_aggregates() {
        let data = ChartData::from_rows(&[]);
        assert!(data.gross_by_year.is_empty());
        assert!(data.score_by_year.is_empty());
        assert_eq!(data.max_gross(), None);
    }

    #[test]
    fn json_dump_names_fields() {
        let data = ChartData::from_rows(&[row(2012.0, 8.0, Some(3.0))]);
        let json = data.to_json_pretty().expect("json");
        let back: ChartData = serde_json::from_str(&json).expect("round trip");
        assert_eq!(back, data);
        assert!(json.contains("\"gross_by_year\""));
    }
}
