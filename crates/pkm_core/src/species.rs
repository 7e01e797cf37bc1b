//! Translation between Gen 3 internal species indexes and national dex numbers.
//!
//! Indexes 1-251 match the national dex. 252-276 are unused placeholder
//! slots, and 277-411 hold the Hoenn species in the game's own order.
//! Lookups never fail: an index without a counterpart maps to 0.

/// Highest internal species index used by Gen 3 data tables.
pub const MAX_SPECIES_INDEX_3: u16 = 411;
/// Highest national dex number present in Gen 3.
pub const MAX_SPECIES_ID_3: u16 = 386;

const FIRST_HOENN_INDEX: u16 = 277;
const SHARED_SPECIES_MAX: u16 = 251;

#[rustfmt::skip]
const HOENN_NATIONAL: [u16; (MAX_SPECIES_INDEX_3 - FIRST_HOENN_INDEX + 1) as usize] = [
    252, 253, 254, 255, 256, 257, 258, 259, 260, 261, // 277
    262, 263, 264, 265, 266, 267, 268, 269, 270, 271, // 287
    272, 273, 274, 275, 290, 291, 292, 276, 277, 285, // 297
    286, 327, 278, 279, 283, 284, 320, 321, 300, 301, // 307
    352, 343, 344, 299, 324, 302, 339, 340, 370, 341, // 317
    342, 349, 350, 318, 319, 328, 329, 330, 296, 297, // 327
    309, 310, 322, 323, 363, 364, 365, 331, 332, 361, // 337
    362, 337, 338, 298, 325, 326, 311, 312, 303, 307, // 347
    308, 333, 334, 360, 355, 356, 315, 287, 288, 289, // 357
    316, 317, 357, 293, 294, 295, 366, 367, 368, 359, // 367
    353, 354, 336, 335, 369, 304, 305, 306, 351, 313, // 377
    314, 345, 346, 347, 348, 280, 281, 282, 371, 372, // 387
    373, 374, 375, 376, 377, 378, 379, 382, 383, 384, // 397
    380, 381, 385, 386, 358,                          // 407
];

const NATIONAL_TO_HOENN_INDEX: [u16; (MAX_SPECIES_ID_3 - SHARED_SPECIES_MAX) as usize] =
    invert_hoenn_table();

const fn invert_hoenn_table() -> [u16; (MAX_SPECIES_ID_3 - SHARED_SPECIES_MAX) as usize] {
    let mut out = [0u16; (MAX_SPECIES_ID_3 - SHARED_SPECIES_MAX) as usize];
    let mut i = 0;
    while i < HOENN_NATIONAL.len() {
        let national = HOENN_NATIONAL[i];
        out[(national - SHARED_SPECIES_MAX - 1) as usize] = FIRST_HOENN_INDEX + i as u16;
        i += 1;
    }
    out
}

/// Maps a Gen 3 internal species index to its national dex number, or 0.
pub fn national_from_gen3(index: u16) -> u16 {
    match index {
        0..=SHARED_SPECIES_MAX => index,
        FIRST_HOENN_INDEX..=MAX_SPECIES_INDEX_3 => {
            HOENN_NATIONAL[(index - FIRST_HOENN_INDEX) as usize]
        }
        _ => 0,
    }
}

/// Maps a national dex number to the Gen 3 internal species index, or 0.
pub fn gen3_from_national(species: u16) -> u16 {
    match species {
        0..=SHARED_SPECIES_MAX => species,
        _ if species <= MAX_SPECIES_ID_3 => {
            NATIONAL_TO_HOENN_INDEX[(species - SHARED_SPECIES_MAX - 1) as usize]
        }
        _ => 0,
    }
}
