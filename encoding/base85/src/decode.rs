use thiserror::Error;

use crate::alphabet::{is_whitespace, DECODE_TABLE};
use crate::PAD_DIGIT;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A byte that is neither whitespace nor part of the alphabet.
    #[error("bad value {byte} in data at offset {offset}")]
    InvalidByte { byte: u8, offset: usize },
}

#[inline]
const fn push_digit(acc: u32, digit: u8) -> u32 {
    acc.wrapping_mul(85).wrapping_add(digit as u32)
}

/// Decodes RFC 1924 base 85 data.
///
/// Space, LF, VT and CR are skipped anywhere in the input. A trailing group of
/// `k` characters yields `k - 1` bytes; the missing digits are filled with
/// [`PAD_DIGIT`](crate::PAD_DIGIT) before the group is split into bytes.
/// A single trailing character therefore contributes nothing.
///
/// Groups whose value exceeds `u32::MAX` wrap around.
pub fn decode<T: AsRef<[u8]>>(input: T) -> Result<Vec<u8>, DecodeError> {
    let data = input.as_ref();
    let mut out = Vec::with_capacity(data.len());

    let symbols = data
        .iter()
        .enumerate()
        .filter(|&(_, &b)| !is_whitespace(b));

    let mut acc = 0u32;
    let mut count = 0;
    for (offset, &byte) in symbols {
        let digit = match DECODE_TABLE.lookup(byte) {
            Some(digit) => digit,
            None => {
                tracing::debug!(byte, offset, "invalid base85 character");
                return Err(DecodeError::InvalidByte { byte, offset });
            }
        };
        acc = push_digit(acc, digit);
        count += 1;
        if count == 5 {
            out.extend_from_slice(&acc.to_be_bytes());
            acc = 0;
            count = 0;
        }
    }

    if count > 0 {
        for _ in count..5 {
            acc = push_digit(acc, PAD_DIGIT);
        }
        out.extend_from_slice(&acc.to_be_bytes()[..count - 1]);
    }

    tracing::trace!(input = data.len(), output = out.len(), "base85 decode");
    Ok(out)
}
