use std::path::{Path, PathBuf};

use binrw::BinRead;
use serde::{Deserialize, Serialize};

use super::cursor::ByteCursor;
use super::error::DecodeResult;
use super::path::normalize;
use super::primitive::{fixed_cstring, read_u16};

pub const MATERIAL_NAME_LEN: usize = 32;
pub const MATERIAL_PATH_LEN: usize = 128;

/// name(32) + 4 colors(64) + shininess(4) + transparency(4) + mode(1) + texture(128) + alpha(128)
pub const MATERIAL_RECORD_SIZE: usize = MATERIAL_NAME_LEN + 64 + 4 + 4 + 1 + 2 * MATERIAL_PATH_LEN;

#[derive(BinRead)]
#[br(little)]
struct MaterialRecord {
    name: [u8; MATERIAL_NAME_LEN],
    ambient: [f32; 4],
    diffuse: [f32; 4],
    specular: [f32; 4],
    emissive: [f32; 4],
    shininess: f32,
    transparency: f32,
    mode: i8,
    texture: [u8; MATERIAL_PATH_LEN],
    alpha_map: [u8; MATERIAL_PATH_LEN],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub name: String,
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub emissive: [f32; 4],
    pub shininess: f32,
    pub transparency: f32,
    pub mode: i8,
    /// Normalized texture path, empty when the material has none.
    pub texture_path: String,
    /// Normalized alpha-map path, empty when the material has none.
    pub alpha_map_path: String,
}

impl Material {
    /// Texture path joined onto `base_dir`. No filesystem access is done.
    pub fn resolve_texture(&self, base_dir: &Path) -> Option<PathBuf> {
        resolve(base_dir, &self.texture_path)
    }

    /// Alpha-map path joined onto `base_dir`. No filesystem access is done.
    pub fn resolve_alpha_map(&self, base_dir: &Path) -> Option<PathBuf> {
        resolve(base_dir, &self.alpha_map_path)
    }
}

fn resolve(base_dir: &Path, path: &str) -> Option<PathBuf> {
    if path.is_empty() {
        None
    } else {
        Some(base_dir.join(path))
    }
}

impl From<MaterialRecord> for Material {
    fn from(raw: MaterialRecord) -> Self {
        Self {
            name: fixed_cstring(&raw.name, MATERIAL_NAME_LEN),
            ambient: raw.ambient,
            diffuse: raw.diffuse,
            specular: raw.specular,
            emissive: raw.emissive,
            shininess: raw.shininess,
            transparency: raw.transparency,
            mode: raw.mode,
            texture_path: normalize(&fixed_cstring(&raw.texture, MATERIAL_PATH_LEN)),
            alpha_map_path: normalize(&fixed_cstring(&raw.alpha_map, MATERIAL_PATH_LEN)),
        }
    }
}

/// Read the material count followed by that many 361-byte records.
pub fn read_materials(cursor: &mut ByteCursor<'_>) -> DecodeResult<Vec<Material>> {
    let count = read_u16(cursor, "material count")?;
    tracing::debug!(count, "reading material table");

    let mut materials = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let material: Material = cursor
            .read_record::<MaterialRecord>(MATERIAL_RECORD_SIZE, "material record")?
            .into();
        tracing::trace!(
            name = %material.name,
            texture = %material.texture_path,
            alpha_map = %material.alpha_map_path,
            "read material"
        );
        materials.push(material);
    }
    Ok(materials)
}
