use binrw::BinRead;
use serde::{Deserialize, Serialize};

use super::cursor::ByteCursor;
use super::error::DecodeResult;
use super::primitive::read_u16;

/// flags(1) + position(12) + bone_id(1) + ref_count(1)
pub const VERTEX_RECORD_SIZE: usize = 15;

/// Bone id meaning "not attached to any joint".
pub const UNBOUND_BONE: i8 = -1;

#[derive(BinRead, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[br(little)]
#[serde(rename_all = "camelCase")]
pub struct Vertex {
    pub flags: u8,
    pub position: [f32; 3],
    pub bone_id: i8,
    pub ref_count: u8,
}

impl Vertex {
    pub fn is_bound(&self) -> bool {
        self.bone_id != UNBOUND_BONE
    }
}

/// Read the vertex count followed by that many 15-byte records.
pub fn read_vertices(cursor: &mut ByteCursor<'_>) -> DecodeResult<Vec<Vertex>> {
    let count = read_u16(cursor, "vertex count")?;
    tracing::debug!(count, "reading vertex table");

    let mut vertices = Vec::with_capacity(count as usize);
    for _ in 0..count {
        vertices.push(cursor.read_record::<Vertex>(VERTEX_RECORD_SIZE, "vertex record")?);
    }
    Ok(vertices)
}
