use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, ensure_span};
use crate::reader::read_u16;
use crate::species::national_from_gen3;

/// Canonical evolution methods, numbered the same way across generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EvolutionType {
    LevelUpFriendship = 1,
    LevelUpFriendshipMorning = 2,
    LevelUpFriendshipNight = 3,
    LevelUp = 4,
    Trade = 5,
    TradeHeldItem = 6,
    TradeSpecies = 7,
    UseItem = 8,
    /// Attack greater than Defense.
    LevelUpAtk = 9,
    /// Attack equal to Defense.
    LevelUpAeqD = 10,
    /// Defense greater than Attack.
    LevelUpDef = 11,
    /// Personality-derived value below 5.
    LevelUpECl5 = 12,
    /// Personality-derived value 5 or above.
    LevelUpECgeq5 = 13,
    LevelUpNinjask = 14,
    /// Spawns a second species into a free party slot.
    LevelUpShedinja = 15,
    LevelUpBeauty = 16,
}

impl EvolutionType {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        use EvolutionType::*;
        Some(match code {
            1 => LevelUpFriendship,
            2 => LevelUpFriendshipMorning,
            3 => LevelUpFriendshipNight,
            4 => LevelUp,
            5 => Trade,
            6 => TradeHeldItem,
            7 => TradeSpecies,
            8 => UseItem,
            9 => LevelUpAtk,
            10 => LevelUpAeqD,
            11 => LevelUpDef,
            12 => LevelUpECl5,
            13 => LevelUpECgeq5,
            14 => LevelUpNinjask,
            15 => LevelUpShedinja,
            16 => LevelUpBeauty,
            _ => return None,
        })
    }

    /// Methods whose argument doubles as a minimum level.
    pub fn is_level_gated(self) -> bool {
        matches!(
            self,
            Self::LevelUp
                | Self::LevelUpAtk
                | Self::LevelUpAeqD
                | Self::LevelUpDef
                | Self::LevelUpECl5
                | Self::LevelUpECgeq5
                | Self::LevelUpNinjask
                | Self::LevelUpShedinja
        )
    }
}

impl fmt::Display for EvolutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.code())
    }
}

/// One evolution branch. `species` is a national dex number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionMethod {
    pub method: EvolutionType,
    pub species: u16,
    pub level: Option<u16>,
    pub argument: u16,
}

/// Width of one Gen 3 evolution entry: method, argument, species, padding.
pub const GEN3_ENTRY_SIZE: usize = 8;

/// A Gen 3 entry whose method word is zero ends the species' branch list.
pub fn is_gen3_terminator(entry: &[u8]) -> bool {
    entry.get(..2) == Some(&[0, 0][..])
}

/// Decodes one 8-byte Gen 3 entry, remapping the raw method code.
pub fn decode_gen3_method(entry: &[u8]) -> Result<EvolutionMethod, CodecError> {
    ensure_span(entry.len(), 0, GEN3_ENTRY_SIZE, "gen 3 evolution entry")?;
    let raw = read_u16(entry, 0);
    let argument = read_u16(entry, 2);
    let species = national_from_gen3(read_u16(entry, 4));

    let (method, level) = match raw {
        // friendship, trade: no level
        1..=3 | 5 | 6 => (raw, None),
        4 => (raw, Some(argument)),
        // use item, beauty
        7 | 15 => (raw + 1, None),
        // stat/personality splits, Ninjask/Shedinja
        8..=14 => (raw + 1, Some(argument)),
        _ => {
            return Err(CodecError::malformed_table(format!(
                "unknown gen 3 evolution method {raw} (argument {argument})"
            )));
        }
    };

    let method = EvolutionType::from_code(method as u8).ok_or_else(|| {
        CodecError::malformed_table(format!("unmapped evolution method {method}"))
    })?;

    Ok(EvolutionMethod {
        method,
        species,
        level,
        argument,
    })
}
