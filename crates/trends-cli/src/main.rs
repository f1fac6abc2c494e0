// File: crates/trends-cli/src/main.rs
// Summary: Loads the movies CSV once, aggregates by year and writes the two-series trend chart.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use trends_core::{ChartLayout, ChartScene};
use trends_render_skia::SkiaRenderer;

/// Render total gross revenue and average IMDb score by year as an SVG line chart.
#[derive(Debug, Parser)]
#[command(name = "movie-trends", version)]
struct Args {
    /// CSV with imdb_score, title_year, director_name and gross columns.
    #[arg(short, long, default_value = "movies.csv")]
    input: PathBuf,

    /// Where to write the SVG chart.
    #[arg(short, long, default_value = "target/out/line_chart.svg")]
    output: PathBuf,

    /// Also rasterize the chart to this PNG path.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Also dump the yearly aggregates as JSON to this path.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Color theme (light or dark).
    #[arg(long, default_value = "light")]
    theme: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(log_filter(EnvFilter::DEFAULT_ENV)).init();

    let args = Args::parse();
    info!("Starting movie-trends v{}", env!("CARGO_PKG_VERSION"));
    run(&args).await
}

/// Directives from `var` when set and valid, otherwise `info`.
fn log_filter(var: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_env_var(var)
        .try_from_env()
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

async fn run(args: &Args) -> Result<()> {
    info!("Using input file: {}", args.input.display());

    // No retry: without data nothing is drawn.
    let data = trends_core::load_chart_data(&args.input)
        .await
        .inspect_err(|e| error!("{e}"))?;

    let theme = trends_core::theme::find(&args.theme);
    let scene = ChartScene::build(&data, &ChartLayout::default(), &theme);

    scene
        .render_to_svg(&args.output)
        .with_context(|| format!("writing SVG to {}", args.output.display()))?;
    info!("Wrote {}", args.output.display());

    if let Some(png) = &args.png {
        SkiaRenderer::new()
            .render_to_png(&scene, png)
            .with_context(|| format!("writing PNG to {}", png.display()))?;
        info!("Wrote {}", png.display());
    }

    if let Some(json) = &args.json {
        write_json(&data, json)?;
        info!("Wrote {}", json.display());
    }

    Ok(())
}

fn write_json(data: &trends_core::ChartData, path: &Path) -> Result<()> {
    let text = data.to_json_pretty().context("serializing aggregates")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text).with_context(|| format!("writing JSON to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trends_core::ChartError;

    fn args_for(dir: &Path, input: &str) -> Args {
        Args::parse_from([
            "movie-trends",
            "--input",
            dir.join(input).to_str().expect("utf8"),
            "--output",
            dir.join("out/chart.svg").to_str().expect("utf8"),
        ])
    }

    #[tokio::test]
    async fn missing_input_fails_even_with_similar_file_nearby() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("movies.cvs"),
            "imdb_score,title_year,director_name,gross,movie_title\n8,2011,A,1,T\n",
        )
        .expect("write");

        let err = run(&args_for(dir.path(), "movies.csv")).await.expect_err("input is missing");
        let chart_err = err.downcast_ref::<ChartError>().expect("chart error");
        assert!(matches!(chart_err, ChartError::DataUnavailable { locator, .. } if locator.ends_with("movies.csv")));
        assert!(!dir.path().join("out/chart.svg").exists());
    }

    #[tokio::test]
    async fn run_writes_svg_for_named_input() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("movies.csv"),
            "imdb_score,title_year,director_name,gross,movie_title\n8,2011,A,1,T\n",
        )
        .expect("write");

        run(&args_for(dir.path(), "movies.csv")).await.expect("run");
        let svg = std::fs::read_to_string(dir.path().join("out/chart.svg")).expect("svg");
        assert!(svg.contains(r#"id="lineChart""#));
    }

    #[test]
    fn log_filter_honors_env_directives() {
        use tracing::level_filters::LevelFilter;
        let var = "MOVIE_TRENDS_LOG_FILTER_TEST";
        std::env::set_var(var, "debug");
        assert_eq!(log_filter(var).max_level_hint(), Some(LevelFilter::DEBUG));
        std::env::remove_var(var);
        assert_eq!(log_filter(var).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn args_have_defaults() {
        let args = Args::parse_from(["movie-trends"]);
        assert_eq!(args.input, PathBuf::from("movies.csv"));
        assert_eq!(args.output, PathBuf::from("target/out/line_chart.svg"));
        assert!(args.png.is_none() && args.json.is_none());
        assert_eq!(args.theme, "light");
    }
}
