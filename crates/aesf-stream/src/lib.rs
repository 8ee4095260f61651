//! Stream framing for the `aesf` AES-128 engine.
//!
//! Splits arbitrary byte streams into 16-byte blocks, pads the final block,
//! runs every block through a [`BlockMode`] and strips the padding again on
//! decryption. Only ECB is implemented; there is no IV and no authentication.
//!
//! The default [`Padding::Legacy`] scheme matches files written by earlier
//! releases of the tool but cannot represent plaintext ending in `0x00`/`0x01`;
//! [`Padding::Pkcs7`] is lossless at the cost of a different file format.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod mode;
mod padding;
mod stream;

pub use crate::error::{Error, Result};
pub use crate::mode::{BlockMode, Ecb};
pub use crate::padding::Padding;
pub use crate::stream::{decrypt_stream, encrypt_stream, StreamCipher, StreamConfig};
