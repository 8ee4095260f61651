//! Error and result types for the cipher engine.

use thiserror::Error;

/// Result alias used throughout `aesf-core`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by key expansion and block-level entry points.
///
/// Every table lookup and field operation is total; only input lengths can be
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A key longer than 16 bytes was supplied.
    #[error("invalid key length: {0} bytes (at most 16)")]
    InvalidKeyLength(usize),
    /// A block-level input was not exactly 16 bytes.
    #[error("invalid block length: {0} bytes (expected 16)")]
    InvalidBlockLength(usize),
}
