//! Arbitrary-length encryption over the fixed-size block cipher.

use aesf_core::{Aes128, Block, Direction, Error as CipherError, BLOCK_SIZE};
use log::debug;

use crate::error::Result;
use crate::mode::{BlockMode, Ecb};
use crate::padding::Padding;

/// Tunables for a [`StreamCipher`] running in ECB.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamConfig {
    /// Final-block padding scheme.
    pub padding: Padding,
    /// ECB worker threads (`1` runs on the calling thread).
    pub workers: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            padding: Padding::Legacy,
            workers: 1,
        }
    }
}

/// Encrypts and decrypts whole byte streams under one expanded key.
#[derive(Clone, Debug)]
pub struct StreamCipher<M = Ecb> {
    cipher: Aes128,
    mode: M,
    padding: Padding,
}

impl StreamCipher<Ecb> {
    /// Sequential ECB with legacy padding.
    pub fn new(key: &[u8]) -> Result<Self> {
        Self::with_config(key, StreamConfig::default())
    }

    /// ECB configured from `config`.
    pub fn with_config(key: &[u8], config: StreamConfig) -> Result<Self> {
        Self::with_mode(key, Ecb::with_workers(config.workers), config.padding)
    }
}

impl<M: BlockMode> StreamCipher<M> {
    /// Builds a stream cipher around an arbitrary chaining mode.
    pub fn with_mode(key: &[u8], mode: M, padding: Padding) -> Result<Self> {
        Ok(Self {
            cipher: Aes128::new(key)?,
            mode,
            padding,
        })
    }

    /// Padding scheme in use.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Pads `data`, encrypts every block and concatenates the result.
    pub fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        let mut blocks = self.padding.pad(data);
        debug!(
            "encrypting {} bytes as {} blocks ({}, {} padding)",
            data.len(),
            blocks.len(),
            self.mode.name(),
            self.padding
        );
        self.mode
            .process(&self.cipher, Direction::Encrypt, &mut blocks);
        blocks.concat()
    }

    /// Decrypts `data` block by block and strips the padding.
    ///
    /// `data` must be a whole number of blocks; otherwise the length of the
    /// trailing partial block is reported.
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        let trailing = data.len() % BLOCK_SIZE;
        if trailing != 0 {
            return Err(CipherError::InvalidBlockLength(trailing).into());
        }
        let mut blocks: Vec<Block> = data
            .chunks_exact(BLOCK_SIZE)
            .map(aesf_core::block_from_slice)
            .collect::<std::result::Result<_, _>>()?;
        debug!(
            "decrypting {} blocks ({}, {} padding)",
            blocks.len(),
            self.mode.name(),
            self.padding
        );
        self.mode
            .process(&self.cipher, Direction::Decrypt, &mut blocks);
        self.padding.unpad(blocks.concat())
    }
}

/// Encrypts `data` under `key` with ECB and legacy padding.
pub fn encrypt_stream(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    Ok(StreamCipher::new(key)?.encrypt(data))
}

/// Decrypts `data` under `key` with ECB and legacy padding.
pub fn decrypt_stream(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    StreamCipher::new(key)?.decrypt(data)
}
