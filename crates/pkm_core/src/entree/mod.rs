//! Entree Forest: 530 encrypted 4-byte slots plus area unlock flags.
//!
//! Encryption state is carried by the type. [`EncryptedForest`] is the
//! snapshot that lives in the save; [`EntreeForest`] is the decrypted working
//! copy. `decrypt` and `write` are the only ways across.

mod area;
mod slot;

pub use area::{
    COUNT_9, COUNT_18, EntreeForestArea, ForestPosition, ForestRegion, TOTAL_SLOTS, slot_area,
};
pub use slot::{EntreeSlot, SLOT_SIZE};

use crate::crypto::crypt_array;
use crate::error::CodecError;
use crate::layout::ForestLayout;
use crate::reader::read_u32;

use area::classify;

/// Areas 3 through 8 unlock one at a time, up to this many.
pub const MAX_UNLOCK_38_AREAS: u8 = 6;

const SLOT_TABLE_LEN: usize = TOTAL_SLOTS * SLOT_SIZE;

/// Forest buffer as stored in the save, keystream applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedForest {
    layout: ForestLayout,
    data: Vec<u8>,
}

impl EncryptedForest {
    pub fn new(data: Vec<u8>) -> Result<Self, CodecError> {
        Self::with_layout(data, ForestLayout::BW)
    }

    pub fn with_layout(data: Vec<u8>, layout: ForestLayout) -> Result<Self, CodecError> {
        layout.validate(SLOT_TABLE_LEN)?;
        if data.len() != layout.buffer_len {
            return Err(CodecError::size_mismatch(format!(
                "forest buffer length mismatch: got {}, expected {}",
                data.len(),
                layout.buffer_len
            )));
        }
        Ok(Self { layout, data })
    }

    /// Seed stored in plaintext after the encrypted region.
    pub fn seed(&self) -> u32 {
        read_u32(&self.data, self.layout.seed_offset)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn decrypt(self) -> EntreeForest {
        let seed = self.seed();
        let Self { layout, mut data } = self;
        crypt_array(&mut data[layout.crypt.start..layout.crypt.end], seed);
        log::debug!("decrypted entree forest with seed {seed:#010x}");
        EntreeForest { layout, data }
    }
}

/// Decrypted working copy of the forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntreeForest {
    layout: ForestLayout,
    data: Vec<u8>,
}

impl EntreeForest {
    /// Decrypts a forest buffer taken from the save.
    pub fn open(data: Vec<u8>) -> Result<Self, CodecError> {
        Ok(EncryptedForest::new(data)?.decrypt())
    }

    pub fn layout(&self) -> &ForestLayout {
        &self.layout
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Produces an encrypted snapshot; the working copy stays decrypted.
    pub fn write(&self) -> EncryptedForest {
        let seed = self.encryption_seed();
        let mut data = self.data.clone();
        crypt_array(&mut data[self.layout.crypt.start..self.layout.crypt.end], seed);
        log::debug!("encrypted entree forest with seed {seed:#010x}");
        EncryptedForest {
            layout: self.layout,
            data,
        }
    }

    pub fn encryption_seed(&self) -> u32 {
        read_u32(&self.data, self.layout.seed_offset)
    }

    pub fn slot(&self, index: usize) -> Result<EntreeSlot<&[u8]>, CodecError> {
        let area = slot_area(index)?;
        let offset = index * SLOT_SIZE;
        Ok(EntreeSlot::new(
            &self.data[offset..offset + SLOT_SIZE],
            index,
            area,
        ))
    }

    pub fn slot_mut(&mut self, index: usize) -> Result<EntreeSlot<&mut [u8]>, CodecError> {
        let area = slot_area(index)?;
        let offset = index * SLOT_SIZE;
        Ok(EntreeSlot::new(
            &mut self.data[offset..offset + SLOT_SIZE],
            index,
            area,
        ))
    }

    pub fn slots(&self) -> Vec<EntreeSlot<&[u8]>> {
        self.data[..SLOT_TABLE_LEN]
            .chunks_exact(SLOT_SIZE)
            .enumerate()
            .map(|(index, chunk)| EntreeSlot::new(chunk, index, classify(index)))
            .collect()
    }

    pub fn slots_mut(&mut self) -> Vec<EntreeSlot<&mut [u8]>> {
        self.data[..SLOT_TABLE_LEN]
            .chunks_exact_mut(SLOT_SIZE)
            .enumerate()
            .map(|(index, chunk)| EntreeSlot::new(chunk, index, classify(index)))
            .collect()
    }

    pub fn unlock_ninth_area(&self) -> bool {
        self.data[self.layout.unlock_ninth_offset] == 1
    }

    pub fn set_unlock_ninth_area(&mut self, unlocked: bool) {
        self.data[self.layout.unlock_ninth_offset] = u8::from(unlocked);
    }

    pub fn unlock_38_areas(&self) -> u8 {
        self.data[self.layout.unlock_38_offset]
    }

    /// Stores `max(MAX_UNLOCK_38_AREAS, count)`.
    ///
    /// Requests below the maximum are raised to it.
    pub fn set_unlock_38_areas(&mut self, count: u8) {
        let stored = MAX_UNLOCK_38_AREAS.max(count);
        if stored != count {
            log::debug!("unlock 3-8 areas: requested {count}, storing {stored}");
        }
        self.data[self.layout.unlock_38_offset] = stored;
    }

    pub fn unlock_all_areas(&mut self) {
        self.set_unlock_38_areas(MAX_UNLOCK_38_AREAS);
        self.set_unlock_ninth_area(true);
    }

    pub fn delete_all(&mut self) {
        self.data[..SLOT_TABLE_LEN].fill(0);
    }
}
