//! Block representation helpers.

use crate::error::{Error, Result};

/// Size of one cipher block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// Copies a 16-byte slice into a [`Block`].
///
/// Fails with [`Error::InvalidBlockLength`] carrying the offending length.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    bytes
        .try_into()
        .map_err(|_| Error::InvalidBlockLength(bytes.len()))
}
