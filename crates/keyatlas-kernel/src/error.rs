//! Error types for kernel operations.

/// Errors raised while reconciling the merged table.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    /// A merged-table key is not a parseable hexadecimal code.
    #[error("invalid hex code `{code}` for `{key}`: {source}")]
    InvalidCode {
        code: String,
        key: String,
        source: std::num::ParseIntError,
    },
}
