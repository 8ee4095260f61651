//! Key types for AES-128.

use crate::block::Block;
use crate::error::{Error, Result};

/// Key length in bytes.
pub const KEY_SIZE: usize = 16;

/// Byte appended to short keys until they reach [`KEY_SIZE`].
pub const KEY_PAD_BYTE: u8 = 0x01;

/// Number of key-schedule columns: `NB * (NR + 1)`.
pub(crate) const SCHEDULE_COLUMNS: usize = 44;

/// AES-128 key wrapper, always 16 bytes after padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl Aes128Key {
    /// Builds a key from at most 16 bytes, right-padding with `0x01`.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > KEY_SIZE {
            return Err(Error::InvalidKeyLength(bytes.len()));
        }
        let mut key = [KEY_PAD_BYTE; KEY_SIZE];
        key[..bytes.len()].copy_from_slice(bytes);
        Ok(Self(key))
    }
}

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

/// Expanded round keys for AES-128.
///
/// Logically a 4×44 byte matrix; round `k` owns columns `4k..4k+3`. Each round
/// key is stored column-major so it lines up with a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; 11]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Returns schedule column `col` (0..44) as rows 0..3.
    pub fn column(&self, col: usize) -> [u8; 4] {
        let offset = (col % 4) * 4;
        let key = &self.0[col / 4];
        [key[offset], key[offset + 1], key[offset + 2], key[offset + 3]]
    }
}
