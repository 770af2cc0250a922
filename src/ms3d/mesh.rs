//! Mesh (group) table parsing.
//!
//! Binary layout of one mesh record:
//! ```text
//! [1 byte]   flags
//! [32 bytes] name (NUL-padded)
//! [2 bytes]  num_tris
//! [num_tris × 2 bytes] triangle indices
//! [1 byte]   material index (signed, -1 = none)
//! ```
//!
//! The record length is only known once `num_tris` has been read, so every
//! field after the fixed header is read one value at a time.

use binrw::BinRead;
use serde::{Deserialize, Serialize};

use super::cursor::ByteCursor;
use super::error::DecodeResult;
use super::primitive::{fixed_cstring, read_i8, read_u16};

pub const MESH_NAME_LEN: usize = 32;

/// flags(1) + name(32) + num_tris(2)
pub const MESH_HEADER_SIZE: usize = 1 + MESH_NAME_LEN + 2;

/// Material index meaning "no material assigned".
pub const NO_MATERIAL: i8 = -1;

#[derive(BinRead)]
#[br(little)]
struct MeshHeader {
    flags: u8,
    name: [u8; MESH_NAME_LEN],
    num_tris: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mesh {
    pub flags: u8,
    pub name: String,
    pub triangle_indices: Vec<u16>,
    pub material_index: i8,
}

impl Mesh {
    pub fn has_material(&self) -> bool {
        self.material_index != NO_MATERIAL
    }

    /// Material index as a table position, if one is assigned.
    pub fn material_slot(&self) -> Option<usize> {
        usize::try_from(self.material_index).ok()
    }
}

fn read_mesh(cursor: &mut ByteCursor<'_>) -> DecodeResult<Mesh> {
    let header = cursor.read_record::<MeshHeader>(MESH_HEADER_SIZE, "mesh header")?;
    let name = fixed_cstring(&header.name, MESH_NAME_LEN);

    let mut triangle_indices = Vec::with_capacity(header.num_tris as usize);
    for _ in 0..header.num_tris {
        triangle_indices.push(read_u16(cursor, "mesh triangle index")?);
    }

    let material_index = read_i8(cursor, "mesh material index")?;

    tracing::debug!(
        name = %name,
        triangles = header.num_tris,
        material_index,
        flags = header.flags,
        "read mesh"
    );

    Ok(Mesh {
        flags: header.flags,
        name,
        triangle_indices,
        material_index,
    })
}

/// Read the mesh count followed by that many variable-length mesh records.
pub fn read_meshes(cursor: &mut ByteCursor<'_>) -> DecodeResult<Vec<Mesh>> {
    let count = read_u16(cursor, "mesh count")?;
    tracing::debug!(count, "reading mesh table");

    let mut meshes = Vec::with_capacity(count as usize);
    for _ in 0..count {
        meshes.push(read_mesh(cursor)?);
    }
    Ok(meshes)
}
