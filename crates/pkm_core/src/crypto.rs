//! Seed-keyed XOR keystream used by Gen 4/5 save substructures.
//!
//! The keystream is an LCG advanced once per 16-bit word; the high half of
//! each state is XORed into the word. Applying the transform twice with the
//! same seed restores the input.

const LCG_MULT: u32 = 0x41C6_4E6D;
const LCG_ADD: u32 = 0x0000_6073;

/// Keystream seeded once per transform.
#[derive(Debug, Clone)]
pub struct KeyStream {
    state: u32,
}

impl KeyStream {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the generator and returns the next 16-bit key word.
    pub fn next_word(&mut self) -> u16 {
        self.state = self.state.wrapping_mul(LCG_MULT).wrapping_add(LCG_ADD);
        (self.state >> 16) as u16
    }
}

impl Iterator for KeyStream {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        Some(self.next_word())
    }
}

/// XORs the keystream for `seed` over `data` in place.
///
/// A trailing odd byte is XORed with the low byte of one more key word.
pub fn crypt_array(data: &mut [u8], seed: u32) {
    let mut keys = KeyStream::new(seed);
    let mut words = data.chunks_exact_mut(2);
    for word in &mut words {
        let key = keys.next_word().to_le_bytes();
        word[0] ^= key[0];
        word[1] ^= key[1];
    }
    if let [last] = words.into_remainder() {
        *last ^= keys.next_word().to_le_bytes()[0];
    }
}
