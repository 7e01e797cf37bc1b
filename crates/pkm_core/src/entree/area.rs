use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Slots per position in the Deepest area and areas 1 through 8.
pub const COUNT_18: usize = 20;
/// Slots per position in the 9th area.
pub const COUNT_9: usize = 10;
const POSITIONS: usize = 3;
const NUMBERED_AREAS: usize = 8;

pub const TOTAL_SLOTS: usize =
    COUNT_18 + POSITIONS * NUMBERED_AREAS * COUNT_18 + POSITIONS * COUNT_9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForestRegion {
    Deepest,
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    Ninth,
}

impl ForestRegion {
    const NUMBERED: [ForestRegion; NUMBERED_AREAS] = [
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
        Self::Sixth,
        Self::Seventh,
        Self::Eighth,
    ];

    pub fn flag(self) -> u16 {
        match self {
            Self::Deepest => 1,
            Self::First => 1 << 1,
            Self::Second => 1 << 2,
            Self::Third => 1 << 3,
            Self::Fourth => 1 << 4,
            Self::Fifth => 1 << 5,
            Self::Sixth => 1 << 6,
            Self::Seventh => 1 << 7,
            Self::Eighth => 1 << 8,
            Self::Ninth => 1 << 9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForestPosition {
    Center,
    Left,
    Right,
}

impl ForestPosition {
    /// `index` is a sub-block number in `0..3`.
    fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Center,
            1 => Self::Left,
            _ => Self::Right,
        }
    }

    pub fn flag(self) -> u16 {
        match self {
            Self::Center => 1 << 10,
            Self::Left => 1 << 11,
            Self::Right => 1 << 12,
        }
    }
}

/// Where a slot sits in the forest. The Deepest area has no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntreeForestArea {
    pub region: ForestRegion,
    pub position: Option<ForestPosition>,
}

impl EntreeForestArea {
    /// Region and position flags combined into one mask.
    pub fn bits(self) -> u16 {
        self.region.flag() | self.position.map_or(0, ForestPosition::flag)
    }

    pub fn contains(self, flags: u16) -> bool {
        self.bits() & flags == flags
    }
}

impl fmt::Display for EntreeForestArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "{:?} ({:?})", self.region, position),
            None => write!(f, "{:?}", self.region),
        }
    }
}

/// Derives the area of slot `index` from the tier sizes.
pub fn slot_area(index: usize) -> Result<EntreeForestArea, CodecError> {
    if index >= TOTAL_SLOTS {
        return Err(CodecError::out_of_range(format!(
            "forest slot {index} lies past the last area (total {TOTAL_SLOTS})"
        )));
    }
    Ok(classify(index))
}

/// Area of a slot known to be below `TOTAL_SLOTS`.
pub(crate) fn classify(index: usize) -> EntreeForestArea {
    debug_assert!(index < TOTAL_SLOTS);
    if index < COUNT_18 {
        return EntreeForestArea {
            region: ForestRegion::Deepest,
            position: None,
        };
    }
    let index = index - COUNT_18;

    let slots_9 = POSITIONS * COUNT_9;
    if index < slots_9 {
        return EntreeForestArea {
            region: ForestRegion::Ninth,
            position: Some(ForestPosition::from_index(index / COUNT_9)),
        };
    }
    let index = index - slots_9;

    let slots_18 = POSITIONS * COUNT_18;
    EntreeForestArea {
        region: ForestRegion::NUMBERED[index / slots_18],
        position: Some(ForestPosition::from_index(index % slots_18 / COUNT_18)),
    }
}
