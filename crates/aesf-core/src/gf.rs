//! Multiplication by the fixed MixColumns constants in GF(2^8).
//!
//! The field is reduced by `x^8 + x^4 + x^3 + x + 1` (`0x11b`). Doubling is the
//! only primitive; every other constant is a chain of doublings and XORs.

/// Multiplies by `{02}`.
#[inline]
pub const fn mul02(b: u8) -> u8 {
    let shifted = b << 1;
    if b & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

/// Multiplies by `{03}`.
#[inline]
pub const fn mul03(b: u8) -> u8 {
    mul02(b) ^ b
}

/// Multiplies by `{09}`.
#[inline]
pub const fn mul09(b: u8) -> u8 {
    mul02(mul02(mul02(b))) ^ b
}

/// Multiplies by `{0b}`.
#[inline]
pub const fn mul0b(b: u8) -> u8 {
    mul02(mul02(mul02(b))) ^ mul02(b) ^ b
}

/// Multiplies by `{0d}`.
#[inline]
pub const fn mul0d(b: u8) -> u8 {
    mul02(mul02(mul02(b))) ^ mul02(mul02(b)) ^ b
}

/// Multiplies by `{0e}`.
#[inline]
pub const fn mul0e(b: u8) -> u8 {
    mul02(mul02(mul02(b))) ^ mul02(mul02(b)) ^ mul02(b)
}

/// General product of two field elements (shift-and-add).
pub fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = mul02(a);
        b >>= 1;
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_reduces_high_bit() {
        assert_eq!(mul02(0x57), 0xae);
        assert_eq!(mul02(0xae), 0x47);
        assert_eq!(mul02(0x80), 0x1b);
        assert_eq!(mul02(0x00), 0x00);
    }

    #[test]
    fn fips_197_worked_example() {
        // {57} . {13} = {fe}
        assert_eq!(mul(0x57, 0x13), 0xfe);
        assert_eq!(mul(0x57, 0x83), 0xc1);
    }

    #[test]
    fn constants_agree_with_general_product() {
        for b in 0..=255u8 {
            assert_eq!(mul02(b), mul(b, 0x02));
            assert_eq!(mul03(b), mul(b, 0x03));
            assert_eq!(mul09(b), mul(b, 0x09));
            assert_eq!(mul0b(b), mul(b, 0x0b));
            assert_eq!(mul0d(b), mul(b, 0x0d));
            assert_eq!(mul0e(b), mul(b, 0x0e));
        }
    }

    #[test]
    fn constants_decompose_into_doublings() {
        for b in 0..=255u8 {
            let x2 = mul02(b);
            let x4 = mul02(x2);
            let x8 = mul02(x4);
            assert_eq!(mul03(b), x2 ^ b);
            assert_eq!(mul09(b), x8 ^ b);
            assert_eq!(mul0b(b), x8 ^ x2 ^ b);
            assert_eq!(mul0d(b), x8 ^ x4 ^ b);
            assert_eq!(mul0e(b), x8 ^ x4 ^ x2);
        }
    }

    #[test]
    fn inverse_mix_constants_undo_forward_ones() {
        // {0e,0b,0d,09} is the inverse of the circulant {02,03,01,01}.
        for b in 0..=255u8 {
            let col = [mul02(b), b, b, mul03(b)];
            let back = mul0e(col[0]) ^ mul0b(col[1]) ^ mul0d(col[2]) ^ mul09(col[3]);
            assert_eq!(back, b);
        }
    }
}
