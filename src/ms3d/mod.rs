//! MS3D (MilkShape3D) binary model decoder.
//!
//! Binary layout (all values little-endian):
//! ```text
//! [10 bytes] id "MS3D000000"
//! [4 bytes]  version (u32)
//! [2 bytes]  vertex count, then count × 15-byte vertex records
//! [2 bytes]  triangle count, then count × 70-byte triangle records
//! [2 bytes]  mesh count, then count × variable-length mesh records
//! [2 bytes]  material count, then count × 361-byte material records
//! ```
//!
//! No section carries its byte length, so every table is read strictly in
//! order from the current position. Any short read aborts the whole decode.
//! Index fields that point between tables are recorded as-is; see
//! [`crate::validation`] for checking them.

mod cursor;
mod error;
pub mod header;
pub mod material;
pub mod mesh;
pub mod path;
pub mod primitive;
pub mod triangle;
pub mod vertex;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use cursor::ByteCursor;
pub use error::{DecodeError, DecodeResult};
pub use header::{Header, MS3D_MAGIC};
pub use material::Material;
pub use mesh::Mesh;
pub use path::normalize;
pub use triangle::Triangle;
pub use vertex::Vertex;

/// A fully decoded MS3D file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDocument {
    pub header: Header,
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
    pub meshes: Vec<Mesh>,
    pub materials: Vec<Material>,
    /// Bytes left after the material table (optional v4+ sections, not parsed).
    pub trailing_bytes: usize,
}

/// Counts reported for a decoded model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub id: String,
    pub version: u32,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub mesh_count: usize,
    pub material_count: usize,
    pub mesh_triangle_refs: usize,
    pub trailing_bytes: usize,
}

/// Decode an MS3D file held in memory.
///
/// Either the whole model is returned or an error; there is no partial result.
pub fn decode(bytes: &[u8]) -> DecodeResult<ModelDocument> {
    let mut cursor = ByteCursor::new(bytes);

    let header = header::read_header(&mut cursor)?;
    tracing::debug!(id = %header.id, version = header.version, "read MS3D header");

    let vertices = vertex::read_vertices(&mut cursor)?;
    let triangles = triangle::read_triangles(&mut cursor)?;
    let meshes = mesh::read_meshes(&mut cursor)?;
    let materials = material::read_materials(&mut cursor)?;

    let trailing_bytes = cursor.remaining();
    if trailing_bytes > 0 {
        tracing::debug!(trailing_bytes, "unparsed data after material table");
    }

    Ok(ModelDocument {
        header,
        vertices,
        triangles,
        meshes,
        materials,
        trailing_bytes,
    })
}

/// Read an entire byte source and decode it.
pub fn decode_reader<R: Read>(mut reader: R) -> Result<ModelDocument> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .context("Failed to read MS3D data")?;
    Ok(decode(&data)?)
}

/// Load and decode an MS3D file from disk. The file is closed before returning.
pub fn load_ms3d(path: &Path) -> Result<ModelDocument> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open MS3D file {}", path.display()))?;
    decode_reader(BufReader::new(file))
        .with_context(|| format!("Failed to load MS3D file {}", path.display()))
}

impl ModelDocument {
    pub fn from_bytes(bytes: &[u8]) -> DecodeResult<Self> {
        decode(bytes)
    }

    /// Resolve a mesh's triangle indices in order. Indices past the end of the
    /// triangle table yield `None`.
    pub fn mesh_triangles<'a>(
        &'a self,
        mesh: &'a Mesh,
    ) -> impl Iterator<Item = (u16, Option<&'a Triangle>)> + 'a {
        mesh.triangle_indices
            .iter()
            .map(move |&index| (index, self.triangles.get(index as usize)))
    }

    /// The material assigned to a mesh, if any and if it exists.
    pub fn mesh_material(&self, mesh: &Mesh) -> Option<&Material> {
        mesh.material_slot().and_then(|slot| self.materials.get(slot))
    }

    /// The three corner vertices of a triangle, `None` where out of range.
    pub fn triangle_vertices(&self, triangle: &Triangle) -> [Option<&Vertex>; 3] {
        triangle
            .vertex_indices
            .map(|index| self.vertices.get(index as usize))
    }

    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            id: self.header.id.clone(),
            version: self.header.version,
            vertex_count: self.vertices.len(),
            triangle_count: self.triangles.len(),
            mesh_count: self.meshes.len(),
            material_count: self.materials.len(),
            mesh_triangle_refs: self.meshes.iter().map(|m| m.triangle_indices.len()).sum(),
            trailing_bytes: self.trailing_bytes,
        }
    }
}
