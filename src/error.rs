//! Error types for tomlgraft operations

use std::path::PathBuf;

/// Result type for tomlgraft operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating, fetching, or merging documents.
///
/// Every variant is terminal for the invocation: the CLI reports it on stderr
/// and exits non-zero. Nothing is retried and nothing is partially applied.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No target file resolvable under the searched directory
    #[error("no pyproject.toml found in {}; initialize the project first (e.g. with `poetry init`) or pass an explicit --dst", .dir.display())]
    TargetNotFound { dir: PathBuf },

    /// Local read or remote fetch of the source document failed
    #[error("cannot load source '{reference}'")]
    SourceUnavailable {
        reference: String,
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Malformed TOML in either document
    #[error("invalid TOML in {origin}")]
    Parse {
        origin: String,
        #[source]
        cause: toml::de::Error,
    },

    /// Target file cannot be opened for reading
    #[error("cannot read target {}", .path.display())]
    TargetUnreadable {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    /// Target file cannot be opened for writing
    #[error("cannot write target {}", .path.display())]
    TargetUnwritable {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    /// TOML serialization error
    #[error(transparent)]
    Render(#[from] toml::ser::Error),
}
