/// Errors surfaced by the core crate.
///
/// Only startup can fail. An unreadable directory during a scan is a
/// [`ScanIssue`](crate::scanner::ScanIssue), not an error, and an empty
/// selection is an [`ExportOutcome`](crate::model::ExportOutcome).
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeClipError {
    /// The start path does not exist.
    #[error("The path {} does not exist.", .0.display())]
    PathNotFound(PathBuf),

    /// The start path exists but could not be resolved to an absolute path.
    #[error("Cannot resolve {}: {source}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TreeClipError>;
