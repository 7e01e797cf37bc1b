use crate::error::{CodecError, ensure_span};

/// Fixed-stride groups of up to `max_count` entries, terminated early by a sentinel entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentinelTable {
    pub stride: usize,
    pub max_count: usize,
}

impl SentinelTable {
    pub const fn new(stride: usize, max_count: usize) -> Self {
        Self { stride, max_count }
    }

    /// Bytes reserved for one group, whether or not its slots are used.
    pub const fn group_len(&self) -> usize {
        self.stride * self.max_count
    }

    pub const fn group_offset(&self, group: usize) -> usize {
        group * self.group_len()
    }

    /// Number of entries before the first terminator, capped at `max_count`.
    pub fn count<F>(
        &self,
        data: &[u8],
        group: usize,
        is_terminator: F,
    ) -> Result<usize, CodecError>
    where
        F: Fn(&[u8]) -> bool,
    {
        let offset = self.group_offset(group);
        ensure_span(data.len(), offset, self.group_len(), "sentinel table group")?;

        Ok(data[offset..offset + self.group_len()]
            .chunks_exact(self.stride)
            .take_while(|entry| !is_terminator(entry))
            .count())
    }

    /// Decodes the live entries of `group` in order.
    pub fn decode_group<T, F, D>(
        &self,
        data: &[u8],
        group: usize,
        is_terminator: F,
        mut decode: D,
    ) -> Result<Vec<T>, CodecError>
    where
        F: Fn(&[u8]) -> bool,
        D: FnMut(&[u8]) -> Result<T, CodecError>,
    {
        let count = self.count(data, group, is_terminator)?;
        let offset = self.group_offset(group);

        data[offset..offset + count * self.stride]
            .chunks_exact(self.stride)
            .map(&mut decode)
            .collect()
    }
}
