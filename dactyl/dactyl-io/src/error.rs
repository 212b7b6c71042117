//! Error types for export.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for export operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while writing output files.
#[derive(Debug, Error)]
pub enum IoError {
    /// A face refers to a vertex the solid does not have.
    #[error("face {face} refers to vertex {index}, but the solid has {vertex_count} vertices")]
    InvalidFace {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the solid.
        vertex_count: usize,
    },

    /// The solid has more faces than binary STL can count.
    #[error("too many faces for binary STL: {count}")]
    TooManyFaces {
        /// Number of faces in the solid.
        count: usize,
    },

    /// The output file could not be created.
    #[error("cannot create {path}: {source}")]
    Create {
        /// Path that could not be created.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
