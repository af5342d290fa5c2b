//! Error type shared by the sampling, engine and plotting layers.

use plotters::drawing::DrawingAreaErrorKind;
use std::path::PathBuf;

/// Errors surfaced by library operations and lesson binaries
#[derive(Debug, thiserror::Error)]
pub enum NotebookError {
    #[error("distance matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("sample size must be at least 1")]
    EmptySample,

    #[error("requested {requested} landmarks from a cloud of {available} points")]
    SampleTooLarge { requested: usize, available: usize },

    #[error("point cloud is empty")]
    EmptyCloud,

    #[error("point clouds live in different dimensions ({0} vs {1})")]
    DimensionMismatch(usize, usize),

    #[error("homology dimension {0} is not supported (max 2)")]
    UnsupportedDimension(usize),

    #[error("coefficient field characteristic {0} is not a prime")]
    InvalidCoefficient(u32),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("plotting failed: {0}")]
    Plot(String),

    #[error("could not read {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("bad lesson config: {0}")]
    Config(#[from] serde_json::Error),
}

impl<E> From<DrawingAreaErrorKind<E>> for NotebookError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        NotebookError::Plot(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NotebookError>;
