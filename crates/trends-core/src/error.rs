// File: crates/trends-core/src/error.rs
// Summary: Error taxonomy for loading the dataset and writing chart output.

use std::path::PathBuf;

use thiserror::Error;

/// Why the dataset could not be turned into rows.
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV parse failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
}

#[derive(Debug, Error)]
pub enum ChartError {
    /// The CSV resource could not be fetched or parsed. Aborts the whole render.
    #[error("data unavailable at {locator}: {source}")]
    DataUnavailable {
        locator: String,
        #[source]
        source: LoadFailure,
    },
    #[error("failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ChartError {
    pub(crate) fn unavailable(locator: impl Into<String>, source: impl Into<LoadFailure>) -> Self {
        Self::DataUnavailable { locator: locator.into(), source: source.into() }
    }
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
