use crate::bits::PackedField;
use crate::gender::Gender;
use crate::reader::{U32_WIDTH, read_u32, write_u32};

use super::area::EntreeForestArea;

pub const SLOT_SIZE: usize = U32_WIDTH;

const SPECIES: PackedField = PackedField::new(0, 10);
const MOVE: PackedField = PackedField::new(10, 10);
const GENDER: PackedField = PackedField::new(20, 2);
const FORM: PackedField = PackedField::new(22, 5);
const INVISIBLE: PackedField = PackedField::new(27, 1);
const ANIMATION: PackedField = PackedField::new(28, 4);

/// Live view of one 4-byte forest slot.
///
/// The area is not stored in the slot; it is derived from the slot index
/// when the view is created.
#[derive(Debug)]
pub struct EntreeSlot<B> {
    data: B,
    index: usize,
    area: EntreeForestArea,
}

impl<B: AsRef<[u8]>> EntreeSlot<B> {
    pub(crate) fn new(data: B, index: usize, area: EntreeForestArea) -> Self {
        debug_assert_eq!(data.as_ref().len(), SLOT_SIZE);
        Self { data, index, area }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn area(&self) -> EntreeForestArea {
        self.area
    }

    pub fn raw(&self) -> u32 {
        read_u32(self.data.as_ref(), 0)
    }

    pub fn species(&self) -> u16 {
        SPECIES.get(self.raw()) as u16
    }

    pub fn move_id(&self) -> u16 {
        MOVE.get(self.raw()) as u16
    }

    pub fn gender(&self) -> Gender {
        Gender::from_raw(GENDER.get(self.raw()) as u8)
    }

    pub fn form(&self) -> u8 {
        FORM.get(self.raw()) as u8
    }

    pub fn invisible(&self) -> bool {
        INVISIBLE.get_flag(self.raw())
    }

    pub fn animation(&self) -> u8 {
        ANIMATION.get(self.raw()) as u8
    }

    pub fn is_empty(&self) -> bool {
        self.species() == 0
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> EntreeSlot<B> {
    pub fn set_raw(&mut self, raw: u32) {
        write_u32(self.data.as_mut(), 0, raw);
    }

    fn update(&mut self, field: PackedField, value: u32) {
        let raw = field.set(self.raw(), value);
        self.set_raw(raw);
    }

    pub fn set_species(&mut self, species: u16) {
        self.update(SPECIES, u32::from(species));
    }

    pub fn set_move_id(&mut self, move_id: u16) {
        self.update(MOVE, u32::from(move_id));
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.update(GENDER, u32::from(gender.raw()));
    }

    pub fn set_form(&mut self, form: u8) {
        self.update(FORM, u32::from(form));
    }

    pub fn set_invisible(&mut self, invisible: bool) {
        let raw = INVISIBLE.set_flag(self.raw(), invisible);
        self.set_raw(raw);
    }

    pub fn set_animation(&mut self, animation: u8) {
        self.update(ANIMATION, u32::from(animation));
    }

    pub fn delete(&mut self) {
        self.set_raw(0);
    }
}
