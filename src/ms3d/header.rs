use serde::{Deserialize, Serialize};

use super::cursor::ByteCursor;
use super::error::{DecodeError, DecodeResult};
use super::primitive::{fixed_cstring, read_u32};

/// Magic id every MS3D file starts with.
pub const MS3D_MAGIC: &str = "MS3D000000";

const MAGIC_LEN: usize = 10;

/// Header size in bytes: id(10) + version(4)
pub const HEADER_SIZE: usize = MAGIC_LEN + 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub id: String,
    pub version: u32,
}

/// Read and validate the 14-byte file header.
///
/// The version is surfaced as-is; gating on it is left to the caller.
pub fn read_header(cursor: &mut ByteCursor<'_>) -> DecodeResult<Header> {
    let raw_id = cursor.read(MAGIC_LEN, "header id")?;
    let end = raw_id.iter().position(|&b| b == 0).unwrap_or(MAGIC_LEN);
    if &raw_id[..end] != MS3D_MAGIC.as_bytes() {
        return Err(DecodeError::InvalidMagic {
            found: fixed_cstring(raw_id, MAGIC_LEN),
        });
    }

    let version = read_u32(cursor, "header version")?;

    Ok(Header {
        id: MS3D_MAGIC.to_string(),
        version,
    })
}
