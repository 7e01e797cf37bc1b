//! Seam for the game's custom character encoding.
//!
//! The codecs here only move fixed-length byte spans around; turning those
//! bytes into text is the job of whoever implements [`TextCodec`].

pub trait TextCodec {
    /// Decodes a terminator-padded span. `japanese` selects the character table.
    fn decode(&self, bytes: &[u8], japanese: bool) -> String;

    /// Encodes `text` into exactly `max_len` bytes, padded with the terminator.
    fn encode(&self, text: &str, max_len: usize, japanese: bool) -> Vec<u8>;
}
