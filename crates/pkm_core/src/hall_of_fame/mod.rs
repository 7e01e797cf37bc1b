//! Gen 3 Hall of Fame: 50 teams stored across two save sectors.
//!
//! The table is longer than one sector, so it is split at a byte boundary
//! that does not line up with entries. Reading merges both sectors into one
//! contiguous working copy; entry and member views address only that copy.

mod entry;

pub use entry::{
    ENTRY_SIZE, HallFame3Entry, HallFame3Pkm, MEMBER_SIZE, NICKNAME_LEN, TEAM_SIZE,
};

use crate::error::{CodecError, ensure_span};
use crate::layout::SplitLayout;

/// Copies both physical blocks into a new contiguous buffer, A first.
pub fn merge_blocks(container: &[u8], layout: &SplitLayout) -> Result<Vec<u8>, CodecError> {
    layout.validate()?;
    ensure_span(container.len(), layout.block_a.start, layout.block_a.len(), "block A")?;
    ensure_span(container.len(), layout.block_b.start, layout.block_b.len(), "block B")?;

    let mut scratch = Vec::with_capacity(layout.scratch_len());
    scratch.extend_from_slice(&container[layout.block_a.start..layout.block_a.end]);
    scratch.extend_from_slice(&container[layout.block_b.start..layout.block_b.end]);
    Ok(scratch)
}

/// Writes a working copy back over both physical blocks.
///
/// Nothing is written unless the scratch length matches the layout exactly
/// and both blocks fit inside `container`.
pub fn split_blocks(
    scratch: &[u8],
    container: &mut [u8],
    layout: &SplitLayout,
) -> Result<(), CodecError> {
    layout.validate()?;
    if scratch.len() != layout.scratch_len() {
        return Err(CodecError::size_mismatch(format!(
            "split write length mismatch: got {}, expected {}",
            scratch.len(),
            layout.scratch_len()
        )));
    }
    ensure_span(container.len(), layout.block_a.start, layout.block_a.len(), "block A")?;
    ensure_span(container.len(), layout.block_b.start, layout.block_b.len(), "block B")?;

    let (head, tail) = scratch.split_at(layout.block_a.len());
    container[layout.block_a.start..layout.block_a.end].copy_from_slice(head);
    container[layout.block_b.start..layout.block_b.end].copy_from_slice(tail);
    Ok(())
}

/// Owned working copy of the Hall of Fame table.
#[derive(Debug, Clone)]
pub struct HallOfFame3 {
    layout: SplitLayout,
    scratch: Vec<u8>,
    japanese: bool,
}

impl HallOfFame3 {
    pub fn read(
        container: &[u8],
        layout: SplitLayout,
        japanese: bool,
    ) -> Result<Self, CodecError> {
        let scratch = merge_blocks(container, &layout)?;
        log::debug!(
            "merged hall of fame blocks at {:#x} and {:#x} ({} bytes)",
            layout.block_a.start,
            layout.block_b.start,
            scratch.len()
        );
        Ok(Self {
            layout,
            scratch,
            japanese,
        })
    }

    pub fn layout(&self) -> &SplitLayout {
        &self.layout
    }

    pub fn japanese(&self) -> bool {
        self.japanese
    }

    pub fn scratch(&self) -> &[u8] {
        &self.scratch
    }

    pub fn scratch_mut(&mut self) -> &mut [u8] {
        &mut self.scratch
    }

    pub fn entry_count(&self) -> usize {
        self.layout.logical_len / ENTRY_SIZE
    }

    fn entry_offset(&self, index: usize) -> Result<usize, CodecError> {
        if index >= self.entry_count() {
            return Err(CodecError::out_of_range(format!(
                "hall of fame entry {index} out of range (count {})",
                self.entry_count()
            )));
        }
        Ok(index * ENTRY_SIZE)
    }

    pub fn entry(&self, index: usize) -> Result<HallFame3Entry<&[u8]>, CodecError> {
        let offset = self.entry_offset(index)?;
        HallFame3Entry::new(self.scratch.as_slice(), offset, self.japanese)
    }

    pub fn entry_mut(&mut self, index: usize) -> Result<HallFame3Entry<&mut [u8]>, CodecError> {
        let offset = self.entry_offset(index)?;
        HallFame3Entry::new(self.scratch.as_mut_slice(), offset, self.japanese)
    }

    pub fn entries(&self) -> Result<Vec<HallFame3Entry<&[u8]>>, CodecError> {
        (0..self.entry_count()).map(|i| self.entry(i)).collect()
    }

    /// Entries up to the first unused team.
    pub fn recorded_entries(&self) -> Result<Vec<HallFame3Entry<&[u8]>>, CodecError> {
        let mut out = Vec::new();
        for index in 0..self.entry_count() {
            let entry = self.entry(index)?;
            if entry.is_empty() {
                break;
            }
            out.push(entry);
        }
        Ok(out)
    }

    /// Re-splits the working copy into the container's two blocks.
    pub fn write_back(&self, container: &mut [u8]) -> Result<(), CodecError> {
        split_blocks(&self.scratch, container, &self.layout)?;
        log::debug!(
            "split hall of fame back into blocks at {:#x} and {:#x}",
            self.layout.block_a.start,
            self.layout.block_b.start
        );
        Ok(())
    }
}
