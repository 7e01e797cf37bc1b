use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecErrorCode {
    /// A table entry carries a code outside its known range.
    MalformedTable,
    /// An index or derived index falls outside the addressable slots.
    OutOfRange,
    /// A working buffer does not match the length its layout expects.
    SizeMismatch,
    /// A caller-supplied buffer is too short for the record it should hold.
    Truncated,
    InvalidLayout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecError {
    pub code: CodecErrorCode,
    pub message: String,
}

impl CodecError {
    pub fn new(code: CodecErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn malformed_table(message: impl Into<String>) -> Self {
        Self::new(CodecErrorCode::MalformedTable, message)
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(CodecErrorCode::OutOfRange, message)
    }

    pub fn size_mismatch(message: impl Into<String>) -> Self {
        Self::new(CodecErrorCode::SizeMismatch, message)
    }

    pub fn truncated(message: impl Into<String>) -> Self {
        Self::new(CodecErrorCode::Truncated, message)
    }

    pub fn invalid_layout(message: impl Into<String>) -> Self {
        Self::new(CodecErrorCode::InvalidLayout, message)
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl Error for CodecError {}

/// Checks that `len` bytes starting at `offset` fit inside a buffer of `buf_len` bytes.
pub(crate) fn ensure_span(
    buf_len: usize,
    offset: usize,
    len: usize,
    label: &str,
) -> Result<(), CodecError> {
    let end = offset.checked_add(len).ok_or_else(|| {
        CodecError::truncated(format!("{label} span overflows: offset={offset}, len={len}"))
    })?;
    if end > buf_len {
        return Err(CodecError::truncated(format!(
            "{label} too short: len={buf_len}, need at least {end}"
        )));
    }
    Ok(())
}
