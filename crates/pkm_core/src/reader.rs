//! Little-endian field access over borrowed buffers.
//!
//! Callers check spans up front (see `error::ensure_span`); these helpers index
//! directly and assume the span is in bounds.

pub(crate) const U16_WIDTH: usize = 2;
pub(crate) const U32_WIDTH: usize = 4;

pub(crate) fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

pub(crate) fn write_u16(data: &mut [u8], offset: usize, value: u16) {
    data[offset..offset + U16_WIDTH].copy_from_slice(&value.to_le_bytes());
}

pub(crate) fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

pub(crate) fn write_u32(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + U32_WIDTH].copy_from_slice(&value.to_le_bytes());
}
