use crate::bits::{LEVEL_7, SPECIES_9};
use crate::error::{CodecError, ensure_span};
use crate::reader::{read_u16, read_u32, write_u16, write_u32};
use crate::species::{gen3_from_national, national_from_gen3};
use crate::text::TextCodec;
use crate::trainer::TrainerInfo;

/// Bytes per team member record.
pub const MEMBER_SIZE: usize = 20;
/// Members per Hall of Fame team.
pub const TEAM_SIZE: usize = 6;
/// Bytes per Hall of Fame entry.
pub const ENTRY_SIZE: usize = TEAM_SIZE * MEMBER_SIZE;

pub const NICKNAME_LEN: usize = 10;
/// Gen 3 string terminator, also used as padding.
const STRING_TERMINATOR: u8 = 0xFF;

const TID_OFFSET: usize = 0;
const SID_OFFSET: usize = 2;
const PID_OFFSET: usize = 4;
const SPECIES_LEVEL_OFFSET: usize = 8;
const NICKNAME_OFFSET: usize = 10;

/// Live view of one team member. Setters write straight into the backing buffer.
#[derive(Debug)]
pub struct HallFame3Pkm<B> {
    data: B,
    offset: usize,
    japanese: bool,
}

impl<B: AsRef<[u8]>> HallFame3Pkm<B> {
    pub fn new(data: B, offset: usize, japanese: bool) -> Result<Self, CodecError> {
        ensure_span(data.as_ref().len(), offset, MEMBER_SIZE, "hall of fame member")?;
        Ok(Self {
            data,
            offset,
            japanese,
        })
    }

    fn bytes(&self) -> &[u8] {
        &self.data.as_ref()[self.offset..self.offset + MEMBER_SIZE]
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn japanese(&self) -> bool {
        self.japanese
    }

    pub fn tid(&self) -> u16 {
        read_u16(self.bytes(), TID_OFFSET)
    }

    pub fn sid(&self) -> u16 {
        read_u16(self.bytes(), SID_OFFSET)
    }

    pub fn pid(&self) -> u32 {
        read_u32(self.bytes(), PID_OFFSET)
    }

    fn species_level(&self) -> u32 {
        u32::from(read_u16(self.bytes(), SPECIES_LEVEL_OFFSET))
    }

    /// Gen 3 internal species index.
    pub fn species(&self) -> u16 {
        SPECIES_9.get(self.species_level()) as u16
    }

    /// National dex number, 0 when the stored index has none.
    pub fn national_species(&self) -> u16 {
        national_from_gen3(self.species())
    }

    pub fn level(&self) -> u8 {
        LEVEL_7.get(self.species_level()) as u8
    }

    pub fn is_empty(&self) -> bool {
        self.species() == 0
    }

    pub fn nickname_bytes(&self) -> &[u8] {
        &self.bytes()[NICKNAME_OFFSET..NICKNAME_OFFSET + NICKNAME_LEN]
    }

    pub fn nickname<C: TextCodec + ?Sized>(&self, codec: &C) -> String {
        codec.decode(self.nickname_bytes(), self.japanese)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> HallFame3Pkm<B> {
    fn bytes_mut(&mut self) -> &mut [u8] {
        let offset = self.offset;
        &mut self.data.as_mut()[offset..offset + MEMBER_SIZE]
    }

    pub fn set_tid(&mut self, tid: u16) {
        write_u16(self.bytes_mut(), TID_OFFSET, tid);
    }

    pub fn set_sid(&mut self, sid: u16) {
        write_u16(self.bytes_mut(), SID_OFFSET, sid);
    }

    pub fn set_pid(&mut self, pid: u32) {
        write_u32(self.bytes_mut(), PID_OFFSET, pid);
    }

    fn set_species_level(&mut self, word: u32) {
        write_u16(self.bytes_mut(), SPECIES_LEVEL_OFFSET, word as u16);
    }

    /// Stores a Gen 3 internal index; values above 511 are truncated.
    pub fn set_species(&mut self, species: u16) {
        let word = SPECIES_9.set(self.species_level(), u32::from(species));
        self.set_species_level(word);
    }

    /// Stores a national dex number; species absent from Gen 3 store index 0.
    pub fn set_national_species(&mut self, species: u16) {
        self.set_species(gen3_from_national(species));
    }

    /// Values above 127 are truncated.
    pub fn set_level(&mut self, level: u8) {
        let word = LEVEL_7.set(self.species_level(), u32::from(level));
        self.set_species_level(word);
    }

    pub fn set_nickname<C: TextCodec + ?Sized>(&mut self, codec: &C, nickname: &str) {
        let mut encoded = codec.encode(nickname, NICKNAME_LEN, self.japanese);
        encoded.resize(NICKNAME_LEN, STRING_TERMINATOR);
        self.bytes_mut()[NICKNAME_OFFSET..NICKNAME_OFFSET + NICKNAME_LEN]
            .copy_from_slice(&encoded);
    }

    pub fn apply_trainer(&mut self, trainer: &TrainerInfo) {
        self.set_tid(trainer.tid);
        self.set_sid(trainer.sid);
    }

    pub fn clear(&mut self) {
        self.bytes_mut().fill(0);
    }
}

/// Live view of one six-member Hall of Fame team.
#[derive(Debug)]
pub struct HallFame3Entry<B> {
    data: B,
    offset: usize,
    japanese: bool,
}

impl<B: AsRef<[u8]>> HallFame3Entry<B> {
    pub fn new(data: B, offset: usize, japanese: bool) -> Result<Self, CodecError> {
        ensure_span(data.as_ref().len(), offset, ENTRY_SIZE, "hall of fame entry")?;
        Ok(Self {
            data,
            offset,
            japanese,
        })
    }

    fn member_offset(&self, index: usize) -> Result<usize, CodecError> {
        if index >= TEAM_SIZE {
            return Err(CodecError::out_of_range(format!(
                "team member {index} out of range (team size {TEAM_SIZE})"
            )));
        }
        Ok(self.offset + index * MEMBER_SIZE)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn member(&self, index: usize) -> Result<HallFame3Pkm<&[u8]>, CodecError> {
        let offset = self.member_offset(index)?;
        HallFame3Pkm::new(self.data.as_ref(), offset, self.japanese)
    }

    pub fn team(&self) -> Result<Vec<HallFame3Pkm<&[u8]>>, CodecError> {
        (0..TEAM_SIZE).map(|i| self.member(i)).collect()
    }

    /// An entry with no species in its lead slot is unused.
    pub fn is_empty(&self) -> bool {
        self.member(0).map(|m| m.is_empty()).unwrap_or(true)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> HallFame3Entry<B> {
    pub fn member_mut(&mut self, index: usize) -> Result<HallFame3Pkm<&mut [u8]>, CodecError> {
        let offset = self.member_offset(index)?;
        HallFame3Pkm::new(self.data.as_mut(), offset, self.japanese)
    }

    pub fn clear(&mut self) {
        let offset = self.offset;
        self.data.as_mut()[offset..offset + ENTRY_SIZE].fill(0);
    }
}
