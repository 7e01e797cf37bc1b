//! Codecs for packed, split and encrypted save substructures.
//!
//! Every view here borrows a caller-owned buffer and reads or writes fields
//! in place. Container offsets come in through [`layout`]; text decoding
//! comes in through [`text::TextCodec`].

pub mod bits;
pub mod crypto;
pub mod entree;
pub mod error;
pub mod evolution;
pub mod gender;
pub mod hall_of_fame;
pub mod layout;
mod reader;
pub mod species;
pub mod table;
pub mod text;
pub mod trainer;

pub use error::{CodecError, CodecErrorCode};
