use binrw::BinRead;
use serde::{Deserialize, Serialize};

use super::cursor::ByteCursor;
use super::error::DecodeResult;
use super::primitive::read_u16;

/// flags(2) + vertex_indices(6) + normals(36) + s(12) + t(12) + smoothing(1) + group(1)
pub const TRIANGLE_RECORD_SIZE: usize = 70;

/// A triangle with per-corner normals and texture coordinates.
///
/// Corner `i` uses `vertex_indices[i]`, `vertex_normals[i]`, `s[i]` and `t[i]`.
/// Vertex indices are not checked against the vertex table here.
#[derive(BinRead, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[br(little)]
#[serde(rename_all = "camelCase")]
pub struct Triangle {
    pub flags: u16,
    pub vertex_indices: [u16; 3],
    pub vertex_normals: [[f32; 3]; 3],
    pub s: [f32; 3],
    pub t: [f32; 3],
    pub smoothing_group: u8,
    pub group_index: u8,
}

impl Triangle {
    /// Texture coordinate `(s, t)` of one corner.
    pub fn uv(&self, corner: usize) -> [f32; 2] {
        [self.s[corner], self.t[corner]]
    }
}

/// Read the triangle count followed by that many 70-byte records.
pub fn read_triangles(cursor: &mut ByteCursor<'_>) -> DecodeResult<Vec<Triangle>> {
    let count = read_u16(cursor, "triangle count")?;
    tracing::debug!(count, "reading triangle table");

    let mut triangles = Vec::with_capacity(count as usize);
    for _ in 0..count {
        triangles.push(cursor.read_record::<Triangle>(TRIANGLE_RECORD_SIZE, "triangle record")?);
    }
    Ok(triangles)
}
