//! Sub-word fields packed into a little-endian integer.

/// A run of `width` bits starting at bit `shift`.
///
/// Setters never validate the incoming value: anything wider than the field
/// is truncated to `width` bits, and the neighbouring fields are preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedField {
    pub shift: u32,
    pub width: u32,
}

impl PackedField {
    pub const fn new(shift: u32, width: u32) -> Self {
        Self { shift, width }
    }

    /// Mask of the field once shifted into place.
    pub const fn mask(self) -> u32 {
        let unshifted = if self.width >= 32 {
            u32::MAX
        } else {
            (1u32 << self.width) - 1
        };
        unshifted << self.shift
    }

    pub const fn max_value(self) -> u32 {
        self.mask() >> self.shift
    }

    pub const fn get(self, word: u32) -> u32 {
        (word & self.mask()) >> self.shift
    }

    pub const fn set(self, word: u32, value: u32) -> u32 {
        (word & !self.mask()) | ((value << self.shift) & self.mask())
    }

    pub const fn get_flag(self, word: u32) -> bool {
        self.get(word) != 0
    }

    pub const fn set_flag(self, word: u32, value: bool) -> u32 {
        self.set(word, value as u32)
    }
}

/// Species index in a Gen 3 species/level word (bits 0-8).
pub const SPECIES_9: PackedField = PackedField::new(0, 9);
/// Level in a Gen 3 species/level word (bits 9-15).
pub const LEVEL_7: PackedField = PackedField::new(9, 7);

pub fn unpack_species_level(word: u16) -> (u16, u8) {
    let word = u32::from(word);
    (SPECIES_9.get(word) as u16, LEVEL_7.get(word) as u8)
}

pub fn pack_species_level(species: u16, level: u8) -> u16 {
    let word = SPECIES_9.set(0, u32::from(species));
    LEVEL_7.set(word, u32::from(level)) as u16
}
