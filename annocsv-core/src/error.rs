use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No difficulty line in {}: {line_count} line(s), at least 2 expected", path.display())]
    MissingDifficulty { path: PathBuf, line_count: usize },

    #[error("Ambiguous difficulty in {}: expected one label, found {}", path.display(), labels.join(" "))]
    AmbiguousDifficulty { path: PathBuf, labels: Vec<String> },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl AnnotationError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnnotationError::Io {
            path: path.into(),
            source,
        }
    }

    /// Path of the file the error relates to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            AnnotationError::Io { path, .. }
            | AnnotationError::MissingDifficulty { path, .. }
            | AnnotationError::AmbiguousDifficulty { path, .. } => Some(path),
            AnnotationError::Csv(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnnotationError>;
