// File: crates/trends-core/tests/pipeline.rs
// Purpose: Aggregation and scale properties over the fixture dataset and synthetic rows.

use trends_core::data::{gross_by_year, load_chart_data, normalize_all, parse_rows, score_by_year, MIN_YEAR};
use trends_core::{ChartLayout, ChartScales, ChartScene, Theme};

fn fixture() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/movies.csv")
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[tokio::test]
async fn fixture_aggregates() {
    let data = load_chart_data(fixture()).await.expect("load");

    let gross: Vec<(i32, f64)> = data.gross_by_year.iter().map(|g| (g.year, g.gross)).collect();
    assert_eq!(
        gross,
        vec![
            (2010, 707_553_348.0),
            (2011, 622_075_094.0),
            (2012, 1_071_410_189.0),
            (2013, 825_382_177.0),
        ]
    );

    let scores = &data.score_by_year;
    assert_eq!(scores.iter().map(|s| s.year).collect::<Vec<_>>(), vec![2010, 2011, 2012, 2013]);
    assert!(approx(scores[0].score, 8.55));
    assert!(approx(scores[1].score, 7.4));
    assert!(approx(scores[2].score, 8.3));
    assert!(approx(scores[3].score, 22.4 / 3.0));
}

#[test]
fn aggregates_are_unique_sorted_and_recent() {
    let csv = "\
director_name,gross,title_year,imdb_score
a,5,2016,6
b,7,2012,7
c,1,2016,8
d,2,2008,9
e,x,2012,
f,3,2014,abc
";
    let rows = normalize_all(&parse_rows(csv.as_bytes()).expect("parse"));
    let gross = gross_by_year(&rows);
    let scores = score_by_year(&rows);

    for w in gross.windows(2) {
        assert!(w[0].year < w[1].year);
    }
    for w in scores.windows(2) {
        assert!(w[0].year < w[1].year);
    }
    assert!(gross.iter().all(|g| g.year >= MIN_YEAR));
    assert!(scores.iter().all(|s| s.year >= MIN_YEAR));

    // sums contain exactly the contributing rows
    let total: f64 = gross.iter().map(|g| g.gross).sum();
    assert_eq!(total, 5.0 + 7.0 + 1.0 + 3.0);
    // 2014 has gross but no valid score: present in one series only
    assert!(gross.iter().any(|g| g.year == 2014));
    assert!(!scores.iter().any(|s| s.year == 2014));
    assert_eq!(scores.iter().find(|s| s.year == 2016).map(|s| s.score), Some(7.0));
}

#[tokio::test]
async fn scales_hit_range_ends_on_fixture() {
    let data = load_chart_data(fixture()).await.expect("load");
    let layout = ChartLayout::default();
    let s = ChartScales::from_data(&data, &layout);
    assert_eq!(s.x_year.apply(2010.0), 0.0);
    assert_eq!(s.x_year.apply(2013.0), layout.width());
    assert_eq!(s.y_gross.apply(0.0), layout.height());
    assert_eq!(s.y_gross.apply(1_071_410_189.0), 0.0);
}

#[tokio::test]
async fn rerunning_pipeline_is_byte_identical() {
    let layout = ChartLayout::default();
    let theme = Theme::light();
    let first = ChartScene::build(&load_chart_data(fixture()).await.expect("load"), &layout, &theme).to_svg();
    let second = ChartScene::build(&load_chart_data(fixture()).await.expect("load"), &layout, &theme).to_svg();
    assert_eq!(first, second);
}
