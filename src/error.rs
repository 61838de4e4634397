use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("File name is not valid UTF-8: {}", .0.display())]
    NonUtf8Name(PathBuf),
    #[error("Duplicate entry in snapshot: {0}")]
    DuplicateEntry(String),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
impl SnapshotError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnapshotError::Io {
            path: path.into(),
            source,
        }
    }
}
