use thiserror::Error;

/// MS3D decode error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer bytes remained than the field being read requires
    #[error(
        "truncated input reading {context} at offset {offset}: needed {needed} bytes, {available} available"
    )]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
        context: &'static str,
    },

    /// Header id did not match `MS3D000000`
    #[error("invalid MS3D magic: expected \"MS3D000000\", found {found:?}")]
    InvalidMagic { found: String },
}

impl DecodeError {
    pub fn is_truncated(&self) -> bool {
        matches!(self, DecodeError::TruncatedInput { .. })
    }
}

/// Result type for decoder operations
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
