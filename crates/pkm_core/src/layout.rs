//! Where substructures live inside the save container.
//!
//! These descriptions belong to the container, not to the codecs: the codecs
//! take a layout as input and never hard-code absolute offsets themselves.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub const fn new(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    /// Like [`ByteRange::new`], but `None` when the end would overflow.
    pub fn checked(start: usize, len: usize) -> Option<Self> {
        Some(Self {
            start,
            end: start.checked_add(len)?,
        })
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn overlaps(&self, other: &ByteRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    fn validate(&self, label: &str) -> Result<(), CodecError> {
        if self.end < self.start {
            return Err(CodecError::invalid_layout(format!(
                "invalid {label} range: {}..{}",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

/// One logical table stored across two independently addressed container regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitLayout {
    pub block_a: ByteRange,
    pub block_b: ByteRange,
    /// Bytes of the logical table actually used by records.
    pub logical_len: usize,
}

impl SplitLayout {
    /// Gen 3 Hall of Fame: two 0xF80-byte sector payloads, 50 teams of 120 bytes.
    pub const EMERALD_HALL_OF_FAME: SplitLayout = SplitLayout {
        block_a: ByteRange::new(0x1C000, 0xF80),
        block_b: ByteRange::new(0x1D000, 0xF80),
        logical_len: 50 * 120,
    };

    /// Length of the contiguous working copy.
    pub fn scratch_len(&self) -> usize {
        self.block_a.len() + self.block_b.len()
    }

    pub fn validate(&self) -> Result<(), CodecError> {
        self.block_a.validate("block A")?;
        self.block_b.validate("block B")?;

        if self.block_a.overlaps(&self.block_b) {
            return Err(CodecError::invalid_layout(format!(
                "split blocks overlap: {}..{} and {}..{}",
                self.block_a.start, self.block_a.end, self.block_b.start, self.block_b.end
            )));
        }

        let capacity = self
            .block_a
            .len()
            .checked_add(self.block_b.len())
            .ok_or_else(|| CodecError::invalid_layout("split block lengths overflow"))?;
        if capacity < self.logical_len {
            return Err(CodecError::invalid_layout(format!(
                "split blocks hold {capacity} bytes, table needs {}",
                self.logical_len
            )));
        }

        Ok(())
    }
}

/// Fixed offsets inside the Entree Forest buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForestLayout {
    pub buffer_len: usize,
    /// Region covered by the keystream. Starts at 0, spans the slot table,
    /// and must not contain the seed.
    pub crypt: ByteRange,
    pub seed_offset: usize,
    pub unlock_ninth_offset: usize,
    pub unlock_38_offset: usize,
}

impl ForestLayout {
    pub const BW: ForestLayout = ForestLayout {
        buffer_len: 0x850,
        crypt: ByteRange::new(0, 0x84C),
        seed_offset: 0x84C,
        unlock_ninth_offset: 0x848,
        unlock_38_offset: 0x849,
    };

    pub fn validate(&self, slot_table_len: usize) -> Result<(), CodecError> {
        self.crypt.validate("crypt")?;

        if slot_table_len > self.buffer_len {
            return Err(CodecError::invalid_layout(format!(
                "slot table needs {slot_table_len} bytes, buffer length {}",
                self.buffer_len
            )));
        }

        if self.crypt.start != 0 || self.crypt.end < slot_table_len {
            return Err(CodecError::invalid_layout(format!(
                "crypt range {:#x}..{:#x} does not cover the slot table (0..{slot_table_len:#x})",
                self.crypt.start, self.crypt.end
            )));
        }

        if self.crypt.end > self.buffer_len {
            return Err(CodecError::invalid_layout(format!(
                "crypt range ends at {}, buffer length {}",
                self.crypt.end, self.buffer_len
            )));
        }

        let seed = ByteRange::checked(self.seed_offset, 4)
            .filter(|seed| seed.end <= self.buffer_len)
            .ok_or_else(|| {
                CodecError::invalid_layout(format!(
                    "seed at {:#x} does not fit in {} bytes",
                    self.seed_offset, self.buffer_len
                ))
            })?;
        if seed.overlaps(&self.crypt) {
            return Err(CodecError::invalid_layout(
                "seed must live outside the crypt range",
            ));
        }

        for (label, offset) in [
            ("unlock ninth", self.unlock_ninth_offset),
            ("unlock 3-8", self.unlock_38_offset),
        ] {
            if offset < slot_table_len || offset >= self.buffer_len {
                return Err(CodecError::invalid_layout(format!(
                    "{label} flag at {offset:#x} is outside {slot_table_len:#x}..{:#x}",
                    self.buffer_len
                )));
            }
            // offset < buffer_len, so the one-byte range cannot overflow
            if seed.overlaps(&ByteRange::new(offset, 1)) {
                return Err(CodecError::invalid_layout(format!(
                    "{label} flag overlaps the seed"
                )));
            }
        }

        Ok(())
    }
}
