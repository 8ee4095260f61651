//! Final-block padding schemes.

use aesf_core::{Block, BLOCK_SIZE};

use crate::error::{Error, Result};

/// Marker byte closing a legacy-padded block.
const LEGACY_SENTINEL: u8 = 0x01;

/// How the final partial block is filled and later removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Padding {
    /// Zero bytes followed by a single `0x01` in the last slot; nothing is
    /// added when the stream length is already a multiple of 16.
    ///
    /// Unpadding strips every trailing `0x00`/`0x01`, so plaintext that itself
    /// ends in those bytes loses them.
    #[default]
    Legacy,
    /// `n` bytes of value `n` (`1..=16`), always added. Lossless.
    Pkcs7,
}

impl Padding {
    /// Splits `data` into blocks, padding the tail according to the scheme.
    pub fn pad(self, data: &[u8]) -> Vec<Block> {
        let mut chunks = data.chunks_exact(BLOCK_SIZE);
        let mut blocks: Vec<Block> = chunks
            .by_ref()
            .map(|chunk| {
                let mut block = [0u8; BLOCK_SIZE];
                block.copy_from_slice(chunk);
                block
            })
            .collect();
        let tail = chunks.remainder();

        match self {
            Padding::Legacy => {
                if !tail.is_empty() {
                    let mut block = [0u8; BLOCK_SIZE];
                    block[..tail.len()].copy_from_slice(tail);
                    block[BLOCK_SIZE - 1] = LEGACY_SENTINEL;
                    blocks.push(block);
                }
            }
            Padding::Pkcs7 => {
                let fill = (BLOCK_SIZE - tail.len()) as u8;
                let mut block = [fill; BLOCK_SIZE];
                block[..tail.len()].copy_from_slice(tail);
                blocks.push(block);
            }
        }
        blocks
    }

    /// Removes the padding from a fully decrypted stream.
    pub fn unpad(self, mut data: Vec<u8>) -> Result<Vec<u8>> {
        match self {
            Padding::Legacy => {
                while let Some(&last) = data.last() {
                    if last != 0x00 && last != LEGACY_SENTINEL {
                        break;
                    }
                    data.pop();
                }
                Ok(data)
            }
            Padding::Pkcs7 => {
                let fill = *data.last().ok_or(Error::InvalidPadding)? as usize;
                if fill == 0 || fill > BLOCK_SIZE || fill > data.len() {
                    return Err(Error::InvalidPadding);
                }
                let body = data.len() - fill;
                if data[body..].iter().any(|&b| b as usize != fill) {
                    return Err(Error::InvalidPadding);
                }
                data.truncate(body);
                Ok(data)
            }
        }
    }
}

impl std::str::FromStr for Padding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Padding::Legacy),
            "pkcs7" => Ok(Padding::Pkcs7),
            other => Err(format!("unknown padding scheme `{other}`")),
        }
    }
}

impl std::fmt::Display for Padding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Padding::Legacy => f.write_str("legacy"),
            Padding::Pkcs7 => f.write_str("pkcs7"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_pads_short_tail_with_zeros_and_sentinel() {
        let blocks = Padding::Legacy.pad(b"hello");
        assert_eq!(blocks.len(), 1);
        assert_eq!(&blocks[0][..5], b"hello");
        assert!(blocks[0][5..15].iter().all(|&b| b == 0));
        assert_eq!(blocks[0][15], 0x01);
    }

    #[test]
    fn legacy_fifteen_bytes_leaves_room_only_for_sentinel() {
        let blocks = Padding::Legacy.pad(&[0xaa; 15]);
        assert_eq!(blocks[0][..15], [0xaa; 15]);
        assert_eq!(blocks[0][15], 0x01);
    }

    #[test]
    fn legacy_adds_nothing_to_aligned_or_empty_input() {
        assert!(Padding::Legacy.pad(&[]).is_empty());
        let blocks = Padding::Legacy.pad(&[0x42; 32]);
        assert_eq!(blocks, vec![[0x42; 16], [0x42; 16]]);
    }

    #[test]
    fn legacy_unpad_stops_at_first_other_byte() {
        let data = vec![0x01, 0x00, 0x7f, 0x00, 0x01, 0x00, 0x00, 0x01];
        assert_eq!(Padding::Legacy.unpad(data).unwrap(), vec![0x01, 0x00, 0x7f]);
    }

    #[test]
    fn legacy_unpad_truncates_plaintext_ending_in_marker_bytes() {
        // Known lossy case: the scheme cannot tell data from padding.
        let blocks = Padding::Legacy.pad(b"data\x00\x01");
        let flat: Vec<u8> = blocks.concat();
        assert_eq!(Padding::Legacy.unpad(flat).unwrap(), b"data");
    }

    #[test]
    fn pkcs7_always_adds_a_block_when_aligned() {
        let blocks = Padding::Pkcs7.pad(&[0x42; 16]);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1], [16; 16]);
        assert_eq!(Padding::Pkcs7.pad(&[]), vec![[16; 16]]);
    }

    #[test]
    fn pkcs7_preserves_trailing_marker_bytes() {
        let original = b"data\x00\x01".to_vec();
        let flat: Vec<u8> = Padding::Pkcs7.pad(&original).concat();
        assert_eq!(flat[15], 10);
        assert_eq!(Padding::Pkcs7.unpad(flat).unwrap(), original);
    }

    #[test]
    fn pkcs7_rejects_malformed_trailers() {
        assert_eq!(Padding::Pkcs7.unpad(vec![]), Err(Error::InvalidPadding));
        assert_eq!(Padding::Pkcs7.unpad(vec![0; 16]), Err(Error::InvalidPadding));
        assert_eq!(Padding::Pkcs7.unpad(vec![17; 16]), Err(Error::InvalidPadding));
        let mut bad = vec![3u8; 16];
        bad[14] = 2;
        assert_eq!(Padding::Pkcs7.unpad(bad), Err(Error::InvalidPadding));
    }

    #[test]
    fn parses_scheme_names() {
        assert_eq!("legacy".parse::<Padding>(), Ok(Padding::Legacy));
        assert_eq!("PKCS7".parse::<Padding>(), Ok(Padding::Pkcs7));
        assert!("zero".parse::<Padding>().is_err());
        assert_eq!(Padding::Pkcs7.to_string(), "pkcs7");
    }
}
