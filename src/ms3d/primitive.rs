//! Little-endian scalar and fixed-width string decoding.
//!
//! The scalar helpers take slices produced by [`ByteCursor`](super::cursor::ByteCursor)
//! and only look at the leading bytes they need; callers always hand them a
//! slice of exactly the right width.

use super::cursor::ByteCursor;
use super::error::DecodeResult;

pub fn u8_le(bytes: &[u8]) -> u8 {
    bytes[0]
}

pub fn i8_le(bytes: &[u8]) -> i8 {
    i8::from_le_bytes([bytes[0]])
}

pub fn u16_le(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

pub fn u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

pub fn f32_le(bytes: &[u8]) -> f32 {
    f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Decode a NUL-padded fixed-width string field.
///
/// Takes bytes up to the first NUL (or all `max_len` bytes when there is
/// none), decodes them as ASCII and trims trailing whitespace. Non-ASCII
/// bytes are dropped, so this never fails.
pub fn fixed_cstring(bytes: &[u8], max_len: usize) -> String {
    let field = &bytes[..max_len.min(bytes.len())];
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());

    let text: String = field[..end]
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect();
    text.trim_end().to_string()
}

/// Read a `u16` table or sublist count.
pub(crate) fn read_u16(cursor: &mut ByteCursor<'_>, context: &'static str) -> DecodeResult<u16> {
    Ok(u16_le(cursor.read(2, context)?))
}

pub(crate) fn read_i8(cursor: &mut ByteCursor<'_>, context: &'static str) -> DecodeResult<i8> {
    Ok(i8_le(cursor.read(1, context)?))
}

pub(crate) fn read_u32(cursor: &mut ByteCursor<'_>, context: &'static str) -> DecodeResult<u32> {
    Ok(u32_le(cursor.read(4, context)?))
}
