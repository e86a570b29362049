//! This module defines the single, unified error type for the entire
//! triax-codec library. It uses the `thiserror` crate to provide ergonomic,
//! context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    /// An error originating from the underlying I/O subsystem, including the
    /// gzip stream filter. Fatal to the in-flight `write`/`read` call; the
    /// caller must discard any partially written output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended in the middle of a fixed-width numeric field.
    #[error("stream truncated: expected {expected} bytes for a field, got {got}")]
    TruncatedStream { expected: usize, got: usize },

    /// Per-axis extrema and compression ratios are undefined on an empty set.
    #[error("reading set is empty")]
    EmptyDataset,

    /// A reading component was NaN or infinite. Rejected at ingestion so that
    /// malformed sensor callbacks never reach the codec path.
    #[error("non-finite reading component: {0}")]
    NonFiniteComponent(f32),

    /// The record-count prefix of a serialized reading set was negative.
    #[error("invalid record count: {0}")]
    InvalidCount(i32),

    /// A checkpoint record was missing one of the named scalar fields.
    #[error("checkpoint record is missing field '{0}'")]
    MissingField(&'static str),
}
