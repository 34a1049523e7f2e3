use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Data Format Error in {}: {reason}", path.display())]
    DataFormat { path: PathBuf, reason: String },

    #[error("Empty Series Error: no rows for algorithm '{0}'")]
    EmptySeries(String),

    #[error("Invalid Algorithm Name '{0}': path separators are not allowed in file names")]
    AlgorithmName(String),

    #[error("Render Error for {}: {reason}", path.display())]
    Render { path: PathBuf, reason: String },

    #[error("Viewer Error: {0}")]
    Viewer(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlotResult<T> = Result<T, PlotError>;
