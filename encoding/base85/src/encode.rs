use crate::{ALPHABET, POWERS};

fn divmod(n: u32, m: u32) -> (u32, u32) {
    (n / m, n % m)
}

/// Encodes 4 bytes (big endian) to 5 characters, most significant digit first.
fn encode_word(word: [u8; 4]) -> [u8; 5] {
    let mut n = u32::from_be_bytes(word);
    let mut out = [0; 5];
    for (digit, &power) in out.iter_mut().zip(POWERS.iter()) {
        let (q, r) = divmod(n, power);
        *digit = ALPHABET[q as usize];
        n = r;
    }
    out
}

/// Length of the encoding of `n` bytes.
///
/// A trailing group of `k` bytes takes `k + 1` characters.
pub const fn encoded_len(n: usize) -> usize {
    let tail = n % 4;
    n / 4 * 5 + if tail > 0 { tail + 1 } else { 0 }
}

/// Encodes `data`, returning the ASCII characters as bytes.
pub fn encode_to_vec(data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len(data.len()));
    let chunks = data.chunks_exact(4);
    let remainder = chunks.remainder();
    for chunk in chunks {
        let mut c = [0; 4];
        c.copy_from_slice(chunk);
        buf.extend_from_slice(&encode_word(c));
    }

    if !remainder.is_empty() {
        // missing low-order bytes count as zero; the last digit is dropped
        let mut c = [0; 4];
        c[..remainder.len()].copy_from_slice(remainder);
        let out = encode_word(c);
        buf.extend_from_slice(&out[..remainder.len() + 1]);
    }

    tracing::trace!(input = data.len(), output = buf.len(), "base85 encode");
    buf
}

/// Encodes `data` as a base 85 string.
pub fn encode(data: &[u8]) -> String {
    encode_to_vec(data)
        .into_iter()
        .map(char::from)
        .collect()
}
