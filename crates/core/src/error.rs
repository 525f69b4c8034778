//! Error types for teletext page parsing.

use thiserror::Error;

/// Primary error type for teletext parsing operations.
///
/// A parse error in any content row fails the whole page; the renderer is
/// never handed a partially parsed grid.
#[derive(Error, Debug)]
pub enum TeletekstError {
    #[error("malformed markup at row {row}: {msg}")]
    MalformedMarkup { row: usize, msg: String },

    #[error("unknown color class {token:?} at row {row}")]
    UnknownColorClass { row: usize, token: String },

    #[error("invalid page document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type alias for TeletekstError.
pub type Result<T> = std::result::Result<T, TeletekstError>;
