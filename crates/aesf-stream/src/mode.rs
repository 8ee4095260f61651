//! Block chaining modes.
//!
//! A mode decides how consecutive blocks are combined around the single-block
//! cipher. Only ECB is provided; a chaining mode would carry its IV or counter
//! in its own state and implement [`BlockMode`] without touching the rounds.

use std::num::NonZeroUsize;
use std::thread;

use aesf_core::{Aes128, Block, Direction};
use log::trace;

/// Combines the single-block cipher over a run of blocks.
pub trait BlockMode {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Transforms `blocks` in place.
    fn process(&self, cipher: &Aes128, direction: Direction, blocks: &mut [Block]);
}

/// Electronic codebook: every block is transformed independently.
///
/// Identical plaintext blocks produce identical ciphertext blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ecb {
    workers: NonZeroUsize,
}

impl Ecb {
    /// Sequential ECB.
    pub const fn new() -> Self {
        Self {
            workers: NonZeroUsize::MIN,
        }
    }

    /// ECB spread over `workers` scoped threads; `0` is treated as `1`.
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers: NonZeroUsize::new(workers).unwrap_or(NonZeroUsize::MIN),
        }
    }

    /// Number of worker threads.
    pub fn workers(&self) -> usize {
        self.workers.get()
    }
}

impl Default for Ecb {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockMode for Ecb {
    fn name(&self) -> &'static str {
        "ecb"
    }

    fn process(&self, cipher: &Aes128, direction: Direction, blocks: &mut [Block]) {
        let workers = self.workers.get().min(blocks.len());
        if workers <= 1 {
            cipher.apply(direction, blocks);
            return;
        }

        let per_worker = blocks.len().div_ceil(workers);
        thread::scope(|scope| {
            for (idx, run) in blocks.chunks_mut(per_worker).enumerate() {
                scope.spawn(move || {
                    trace!("ecb worker {idx}: {} blocks", run.len());
                    cipher.apply(direction, run);
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_blocks(count: usize) -> Vec<Block> {
        (0..count)
            .map(|i| std::array::from_fn(|j| (i * 16 + j) as u8))
            .collect()
    }

    #[test]
    fn equal_plaintext_blocks_encrypt_equally() {
        let cipher = Aes128::new(b"codebook").unwrap();
        let mut blocks = vec![[0x5a; 16]; 3];
        Ecb::new().process(&cipher, Direction::Encrypt, &mut blocks);
        assert_eq!(blocks[0], blocks[1]);
        assert_eq!(blocks[1], blocks[2]);
        assert_eq!(blocks[0], cipher.encrypt(&[0x5a; 16]));
    }

    #[test]
    fn workers_produce_sequential_output() {
        let cipher = Aes128::new(b"parallel").unwrap();
        let mut sequential = sample_blocks(37);
        let mut parallel = sequential.clone();
        Ecb::new().process(&cipher, Direction::Encrypt, &mut sequential);
        Ecb::with_workers(4).process(&cipher, Direction::Encrypt, &mut parallel);
        assert_eq!(sequential, parallel);

        Ecb::with_workers(8).process(&cipher, Direction::Decrypt, &mut parallel);
        assert_eq!(parallel, sample_blocks(37));
    }

    #[test]
    fn zero_workers_falls_back_to_one() {
        assert_eq!(Ecb::with_workers(0).workers(), 1);
        let cipher = Aes128::new(b"").unwrap();
        let mut empty: Vec<Block> = Vec::new();
        Ecb::with_workers(4).process(&cipher, Direction::Encrypt, &mut empty);
        assert!(empty.is_empty());
    }
}
