use proptest::prelude::*;
use rfc1924_base85::{decode, encode, encode_to_vec, encoded_len, DecodeError, ALPHABET};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn whitespace() -> impl Strategy<Value = char> {
    prop_oneof![Just(' '), Just('\n'), Just('\x0b'), Just('\r')]
}

/// Inserts `(position, char)` pairs into `encoded`, positions taken modulo the current length.
fn sprinkle(encoded: &str, inserts: &[(usize, char)]) -> String {
    let mut chars: Vec<char> = encoded.chars().collect();
    for &(pos, c) in inserts {
        let at = pos % (chars.len() + 1);
        chars.insert(at, c);
    }
    chars.into_iter().collect()
}

#[test]
fn empty_input() {
    init_tracing();
    assert_eq!(encode(&[]), "");
    assert_eq!(decode(""), Ok(Vec::new()));
}

#[test]
fn man_round_trip() {
    init_tracing();
    let plain = [0x4D, 0x61, 0x6E, 0x20];
    let encoded = encode(&plain);
    assert_eq!(encoded.len(), 5);
    assert_eq!(decode(&encoded).unwrap(), plain);
}

#[test]
fn invalid_suffix_is_reported() {
    init_tracing();
    for byte in (0..=255u8).filter(|b| !ALPHABET.contains(b) && !b" \n\x0b\r".contains(b)) {
        let mut data = b"0000!".to_vec();
        data.push(byte);
        assert_eq!(
            decode(&data),
            Err(DecodeError::InvalidByte { byte, offset: 5 }),
            "byte {:#04x}",
            byte
        );
    }
}

proptest! {
    #[test]
    fn aligned_round_trip(words in proptest::collection::vec(any::<[u8; 4]>(), 0..64)) {
        init_tracing();
        let data: Vec<u8> = words.concat();
        let decoded = decode(encode(&data)).unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn round_trip(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        init_tracing();
        let decoded = decode(encode(&data)).unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn whitespace_is_transparent(
        data in proptest::collection::vec(any::<u8>(), 0..128),
        inserts in proptest::collection::vec((any::<usize>(), whitespace()), 0..32),
    ) {
        init_tracing();
        let encoded = encode(&data);
        let spaced = sprinkle(&encoded, &inserts);
        prop_assert_eq!(decode(&spaced).unwrap(), decode(&encoded).unwrap());
    }

    #[test]
    fn output_stays_in_alphabet(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        init_tracing();
        let encoded = encode_to_vec(&data);
        prop_assert_eq!(encoded.len(), encoded_len(data.len()));
        prop_assert!(encoded.iter().all(|b| ALPHABET.contains(b)));
        prop_assert_ne!(encoded.len() % 5, 1);
    }

    #[test]
    fn alphabet_strings_decode(digits in proptest::collection::vec(0..85usize, 0..64)) {
        init_tracing();
        let text: String = digits.iter().map(|&d| ALPHABET[d] as char).collect();
        let decoded = decode(&text).unwrap();
        let full = digits.len() / 5 * 4;
        let tail = match digits.len() % 5 {
            0 | 1 => 0,
            n => n - 1,
        };
        prop_assert_eq!(decoded.len(), full + tail);
    }
}
