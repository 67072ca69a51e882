//! Errors raised at the filesystem boundary.

use std::path::PathBuf;

/// Fatal ingestion/emission errors. Every variant aborts the run before the
/// artifact is replaced.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// A required input source is missing or unreadable.
    #[error("required input unavailable: {path}: {message}")]
    Configuration { path: PathBuf, message: String },

    /// A structured input's content is malformed.
    #[error("parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A keycode filename fails the version/category naming pattern.
    #[error("keycode filename does not match `keycodes_<version>[_<category>].json`: {file_name}")]
    PatternMismatch { file_name: String },

    /// The descriptor list could not be serialized.
    #[error("artifact serialization error: {0}")]
    Serialize(String),

    /// The output artifact could not be written.
    #[error("failed to write artifact {path}: {message}")]
    Write { path: PathBuf, message: String },
}
