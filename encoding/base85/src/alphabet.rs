/// The RFC 1924 character set, ordered by digit value.
pub const ALPHABET: &[u8; 85] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~";

/// Inverse of [`ALPHABET`], evaluated at compile time.
pub static DECODE_TABLE: DecodeTable = DecodeTable::build(ALPHABET);

/// Marks a byte that is not part of the alphabet.
const ABSENT: u8 = 0xFF;

/// Maps every byte value to its base 85 digit.
#[derive(Debug, Clone, Copy)]
pub struct DecodeTable([u8; 256]);

impl DecodeTable {
    /// Builds the inverse lookup for `alphabet`.
    ///
    /// Panics, or fails const evaluation, if a character occurs twice.
    pub const fn build(alphabet: &[u8; 85]) -> Self {
        let mut table = [ABSENT; 256];
        let mut i = 0;
        while i < alphabet.len() {
            let c = alphabet[i] as usize;
            if table[c] != ABSENT {
                panic!("duplicate character in base85 alphabet");
            }
            table[c] = i as u8;
            i += 1;
        }
        DecodeTable(table)
    }

    /// Returns the digit value of `byte`, or `None` if it is not an alphabet character.
    #[inline]
    pub const fn lookup(&self, byte: u8) -> Option<u8> {
        match self.0[byte as usize] {
            ABSENT => None,
            n => Some(n),
        }
    }
}

/// Returns the character for digit `index`, or `None` if `index >= 85`.
pub fn symbol(index: u8) -> Option<char> {
    ALPHABET.get(index as usize).map(|&c| c as char)
}

/// Whitespace that decoding skips: space, LF, VT and CR.
#[inline]
pub(crate) const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\n' | 0x0B | b'\r')
}
