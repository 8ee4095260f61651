//! Error and result types for stream framing.

use thiserror::Error;

/// Result alias used throughout `aesf-stream`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while framing or unframing a byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Key or block length rejected by the cipher engine.
    #[error(transparent)]
    Cipher(#[from] aesf_core::Error),
    /// PKCS#7 trailer is malformed (wrong key or corrupted ciphertext).
    #[error("invalid padding")]
    InvalidPadding,
}
