//! AES round transformations over the 4×4 state matrix.

use crate::block::Block;
use crate::gf::{mul02, mul03, mul09, mul0b, mul0d, mul0e};
use crate::key::RoundKeys;
use crate::sbox::{inv_sbox, sbox};

/// One block as a 4×4 byte matrix, indexed `[row][column]`.
///
/// Loaded column-major: `state[r][c] == block[r + 4 * c]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State(pub [[u8; 4]; 4]);

impl State {
    /// Loads a block column-major.
    pub fn from_block(block: &Block) -> Self {
        let mut rows = [[0u8; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = block[r + 4 * c];
            }
        }
        Self(rows)
    }

    /// Stores the state back into a block, column-major.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; 16];
        for (r, row) in self.0.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                block[r + 4 * c] = *cell;
            }
        }
        block
    }

    #[inline]
    fn column(&self, c: usize) -> [u8; 4] {
        [self.0[0][c], self.0[1][c], self.0[2][c], self.0[3][c]]
    }

    #[inline]
    fn set_column(&mut self, c: usize, col: [u8; 4]) {
        for (row, value) in self.0.iter_mut().zip(col) {
            row[c] = value;
        }
    }
}

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.0.iter_mut().flatten() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.0.iter_mut().flatten() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r`.
#[inline]
pub fn shift_rows(state: &mut State) {
    for (r, row) in state.0.iter_mut().enumerate().skip(1) {
        row.rotate_left(r);
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for (r, row) in state.0.iter_mut().enumerate().skip(1) {
        row.rotate_right(r);
    }
}

fn mix_single_column([a0, a1, a2, a3]: [u8; 4]) -> [u8; 4] {
    [
        mul02(a0) ^ mul03(a1) ^ a2 ^ a3,
        a0 ^ mul02(a1) ^ mul03(a2) ^ a3,
        a0 ^ a1 ^ mul02(a2) ^ mul03(a3),
        mul03(a0) ^ a1 ^ a2 ^ mul02(a3),
    ]
}

fn inv_mix_single_column([a0, a1, a2, a3]: [u8; 4]) -> [u8; 4] {
    [
        mul0e(a0) ^ mul0b(a1) ^ mul0d(a2) ^ mul09(a3),
        mul09(a0) ^ mul0e(a1) ^ mul0b(a2) ^ mul0d(a3),
        mul0d(a0) ^ mul09(a1) ^ mul0e(a2) ^ mul0b(a3),
        mul0b(a0) ^ mul0d(a1) ^ mul09(a2) ^ mul0e(a3),
    ]
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for c in 0..4 {
        let mixed = mix_single_column(state.column(c));
        state.set_column(c, mixed);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for c in 0..4 {
        let mixed = inv_mix_single_column(state.column(c));
        state.set_column(c, mixed);
    }
}

/// XORs the round key for `round` (schedule columns `4 * round..4 * round + 4`)
/// into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_keys: &RoundKeys, round: usize) {
    for c in 0..4 {
        let key_col = round_keys.column(4 * round + c);
        for (row, k) in state.0.iter_mut().zip(key_col) {
            row[c] ^= k;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::expand_key;
    use crate::key::Aes128Key;

    fn counting_block() -> Block {
        std::array::from_fn(|i| i as u8)
    }

    #[test]
    fn state_loads_column_major() {
        let state = State::from_block(&counting_block());
        assert_eq!(state.0[0], [0, 4, 8, 12]);
        assert_eq!(state.0[3], [3, 7, 11, 15]);
        assert_eq!(state.to_block(), counting_block());
    }

    #[test]
    fn shift_rows_rotates_each_row_by_its_index() {
        let mut state = State::from_block(&counting_block());
        shift_rows(&mut state);
        assert_eq!(state.0[0], [0, 4, 8, 12]);
        assert_eq!(state.0[1], [5, 9, 13, 1]);
        assert_eq!(state.0[2], [10, 14, 2, 6]);
        assert_eq!(state.0[3], [15, 3, 7, 11]);
        inv_shift_rows(&mut state);
        assert_eq!(state.to_block(), counting_block());
    }

    #[test]
    fn mix_columns_matches_known_column() {
        // Standard MixColumns test column db 13 53 45 -> 8e 4d a1 bc.
        let mut block = [0u8; 16];
        block[..4].copy_from_slice(&[0xdb, 0x13, 0x53, 0x45]);
        let mut state = State::from_block(&block);
        mix_columns(&mut state);
        assert_eq!(state.to_block()[..4], [0x8e, 0x4d, 0xa1, 0xbc]);
        inv_mix_columns(&mut state);
        assert_eq!(state.to_block(), block);
    }

    #[test]
    fn sub_bytes_inverts() {
        let mut state = State::from_block(&counting_block());
        sub_bytes(&mut state);
        assert_eq!(state.0[0][0], 0x63);
        inv_sub_bytes(&mut state);
        assert_eq!(state.to_block(), counting_block());
    }

    #[test]
    fn round_zero_key_is_the_raw_key() {
        let key = Aes128Key::new(b"0123456789ABCDEF").unwrap();
        let rks = expand_key(&key);
        let mut state = State::default();
        add_round_key(&mut state, &rks, 0);
        assert_eq!(&state.to_block(), b"0123456789ABCDEF");
        add_round_key(&mut state, &rks, 0);
        assert_eq!(state, State::default());
    }
}
