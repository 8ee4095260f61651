//! AES-128 key schedule and block encryption/decryption.

use crate::block::Block;
use crate::error::Result;
use crate::key::{Aes128Key, RoundKeys, SCHEDULE_COLUMNS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes, State,
};
use crate::sbox::{sbox, RCON};

/// Number of rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

const NK: usize = 4;

fn xor_columns(a: [u8; 4], b: [u8; 4]) -> [u8; 4] {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// Expands a 128-bit key into 11 round keys.
///
/// Columns are produced left to right; each depends only on the column
/// before it and the column `NK` positions back.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [[0u8; 4]; SCHEDULE_COLUMNS];
    for (col, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        col.copy_from_slice(chunk);
    }

    for i in NK..SCHEDULE_COLUMNS {
        let mut temp = w[i - 1];
        if i % NK == 0 {
            temp.rotate_left(1);
            for byte in temp.iter_mut() {
                *byte = sbox(*byte);
            }
            temp = xor_columns(temp, RCON[i / NK - 1]);
        }
        w[i] = xor_columns(w[i - NK], temp);
    }

    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    for (round, key) in round_keys.iter_mut().enumerate() {
        for (word_idx, bytes) in key.chunks_exact_mut(4).enumerate() {
            bytes.copy_from_slice(&w[round * NK + word_idx]);
        }
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);

    add_round_key(&mut state, round_keys, 0);

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys, round);
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys, ROUNDS);

    state.to_block()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);

    add_round_key(&mut state, round_keys, ROUNDS);
    for round in (1..ROUNDS).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys, round);
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys, 0);

    state.to_block()
}

/// Which way a block transform runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

/// Block transform signature shared by [`encrypt_block`] and [`decrypt_block`].
pub type BlockFn = fn(&Block, &RoundKeys) -> Block;

/// AES-128 with its key schedule expanded once.
///
/// The schedule is never mutated after construction, so a shared reference can
/// be handed to any number of threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Pads `key` to 16 bytes with `0x01` and expands it.
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self::from_key(&Aes128Key::new(key)?))
    }

    /// Expands an already padded key.
    pub fn from_key(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Returns the expanded schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block.
    #[inline]
    pub fn encrypt(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block.
    #[inline]
    pub fn decrypt(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }

    /// Selects the block transform for `direction`, so loops branch once.
    pub fn block_fn(direction: Direction) -> BlockFn {
        match direction {
            Direction::Encrypt => encrypt_block,
            Direction::Decrypt => decrypt_block,
        }
    }

    /// Transforms `blocks` in place in the given direction.
    pub fn apply(&self, direction: Direction, blocks: &mut [Block]) {
        let transform = Self::block_fn(direction);
        for block in blocks.iter_mut() {
            *block = transform(block, &self.round_keys);
        }
    }
}
