use proptest::prelude::*;

use pkm_core::crypto::{KeyStream, crypt_array};

#[test]
fn keystream_is_deterministic_per_seed() {
    let a: Vec<u16> = KeyStream::new(0x1234_5678).take(16).collect();
    let b: Vec<u16> = KeyStream::new(0x1234_5678).take(16).collect();
    let c: Vec<u16> = KeyStream::new(0x1234_5679).take(16).collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn keystream_word_is_xored_little_endian() {
    let key = KeyStream::new(7).next_word();
    let mut data = [0u8; 2];
    crypt_array(&mut data, 7);
    assert_eq!(u16::from_le_bytes(data), key);
}

proptest! {
    #[test]
    fn transform_is_an_involution(data in proptest::collection::vec(any::<u8>(), 0..512), seed: u32) {
        let mut buf = data.clone();
        crypt_array(&mut buf, seed);
        crypt_array(&mut buf, seed);
        prop_assert_eq!(buf, data);
    }
}
