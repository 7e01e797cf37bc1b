use proptest::prelude::*;

use pkm_core::bits::{LEVEL_7, SPECIES_9, pack_species_level, unpack_species_level};

#[test]
fn max_species_survives_level_reset() {
    let word = u32::from(pack_species_level(0, 100));
    let word = SPECIES_9.set(word, 511);
    let word = LEVEL_7.set(word, 0);
    assert_eq!(SPECIES_9.get(word), 511);
    assert_eq!(LEVEL_7.get(word), 0);
}

#[test]
fn known_word_layout() {
    // level 50, species 0x115
    assert_eq!(pack_species_level(0x115, 50), (50 << 9) | 0x115);
    assert_eq!(unpack_species_level(0x6515), (0x115, 0x32));
}

proptest! {
    #[test]
    fn pack_then_unpack_is_identity(species in 0u16..=511, level in 0u8..=127) {
        let word = pack_species_level(species, level);
        prop_assert_eq!(unpack_species_level(word), (species, level));
    }

    #[test]
    fn setting_one_field_preserves_the_other(word: u16, species in 0u32..=511) {
        let updated = SPECIES_9.set(u32::from(word), species);
        prop_assert_eq!(LEVEL_7.get(updated), LEVEL_7.get(u32::from(word)));
        prop_assert_eq!(SPECIES_9.get(updated), species);
    }

    #[test]
    fn oversized_level_truncates(level in 128u32..=u32::from(u16::MAX), species in 0u32..=511) {
        let word = SPECIES_9.set(0, species);
        let word = LEVEL_7.set(word, level);
        prop_assert_eq!(LEVEL_7.get(word), level & 0x7F);
        prop_assert_eq!(SPECIES_9.get(word), species);
        prop_assert!(word <= 0xFFFF);
    }
}
