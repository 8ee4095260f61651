//! AES-128 cipher engine for the `aesf` file encryptor.
//!
//! This crate follows the FIPS-197 round structure and provides:
//! - GF(2^8) constant multiplication and the substitution tables.
//! - Key schedule for AES-128, with short keys right-padded by `0x01`.
//! - Single-block encryption and decryption over a 4×4 state matrix.
//!
//! A 16-byte key therefore behaves exactly like standard AES-128. The
//! implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
mod round;
mod sbox;

pub use crate::block::{block_from_slice, Block, BLOCK_SIZE};
pub use crate::cipher::{
    decrypt_block, encrypt_block, expand_key, Aes128, BlockFn, Direction, ROUNDS,
};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, RoundKeys, KEY_PAD_BYTE, KEY_SIZE};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes, State,
};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, RCON, SBOX};
