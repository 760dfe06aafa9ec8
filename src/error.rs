//! Error types surfaced by the engine.

use std::io;
use thiserror::Error;

/// Convenience alias used across the engine.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors surfaced synchronously by the failing call; nothing is swallowed
/// inside the engine.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The edge-list source could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// An edge line did not parse as exactly two non-negative integers.
    /// The loader fails fast on the first such line.
    #[error("malformed edge line {line_no}: {line:?}")]
    Parse {
        /// 1-based line number in the source.
        line_no: usize,
        /// Offending line content, trimmed.
        line: String,
    },
    /// A query result could not be serialized for output.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// A query argument was out of range for the loaded graph.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A degree query was issued against a graph with no vertices.
    #[error("empty graph")]
    EmptyGraph,
}
