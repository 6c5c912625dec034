//! # RFC 1924 Base85 Encoding
//!
//! rfc1924-base85 maps arbitrary bytes to the 85 printable characters listed in
//! [RFC 1924](https://www.rfc-editor.org/rfc/rfc1924): `0-9`, `A-Z`, `a-z` and
//! ``!#$%&()*+-;<=>?@^_`{|}~``. Every 4 bytes become 5 characters; a trailing
//! group of 1 to 3 bytes becomes 2 to 4 characters. No length marker or
//! framing is added.
//!
//! Space, LF, VT and CR are skipped while decoding. Any other byte outside the
//! alphabet is rejected.
//!
//! ## Decode Example
//!
//! ```
//! use rfc1924_base85::decode;
//!
//! assert_eq!(decode("Xk~0{Zy<MX\na%^M").unwrap(), b"hello world");
//! assert!(decode("Xk~0{\"").is_err());
//! ```
//!
//! ## Encode Example
//!
//! ```
//! use rfc1924_base85::encode;
//!
//! assert_eq!(encode(b"Man "), "O<`^z");
//! assert_eq!(encode(&[0xFF; 4]), "|NsC0");
//! ```

mod alphabet;
mod decode;
mod encode;

pub use alphabet::{symbol, DecodeTable, ALPHABET, DECODE_TABLE};
pub use decode::{decode, DecodeError};
pub use encode::{encode, encode_to_vec, encoded_len};

/// Place values of the five digits of a group, most significant first.
const POWERS: [u32; 5] = [85 * 85 * 85 * 85, 85 * 85 * 85, 85 * 85, 85, 1];

/// Digit value substituted for the characters missing from a trailing group.
///
/// It exceeds the largest real digit (84), which rounds the partial group up
/// far enough to recover the truncated bytes.
pub const PAD_DIGIT: u8 = 126;
