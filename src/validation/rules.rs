use crate::ms3d::vertex::UNBOUND_BONE;
use crate::ms3d::ModelDocument;

use super::options::IndexPolicy;
use super::report::*;

/// Check every triangle corner against the vertex table.
pub fn validate_triangle_vertex_indices(
    doc: &ModelDocument,
    policy: IndexPolicy,
) -> Vec<ValidationItem> {
    let Some(severity) = policy.severity() else {
        return vec![];
    };
    let vertex_count = doc.vertices.len();

    let mut items = vec![];
    for (tri_idx, triangle) in doc.triangles.iter().enumerate() {
        for (corner, &index) in triangle.vertex_indices.iter().enumerate() {
            if index as usize >= vertex_count {
                items.push(ValidationItem {
                    code: "TRIANGLE_VERTEX_OUT_OF_RANGE".to_string(),
                    message: format!(
                        "Triangle {} corner {} references vertex {} but the model has {} vertices.",
                        tri_idx, corner, index, vertex_count
                    ),
                    severity,
                    category: ValidationCategory::Triangle,
                    record: tri_idx,
                });
            }
        }
    }
    items
}

/// Check every mesh triangle reference against the triangle table.
pub fn validate_mesh_triangle_indices(
    doc: &ModelDocument,
    policy: IndexPolicy,
) -> Vec<ValidationItem> {
    let Some(severity) = policy.severity() else {
        return vec![];
    };
    let triangle_count = doc.triangles.len();

    let mut items = vec![];
    for (mesh_idx, mesh) in doc.meshes.iter().enumerate() {
        let dangling: Vec<u16> = mesh
            .triangle_indices
            .iter()
            .copied()
            .filter(|&i| i as usize >= triangle_count)
            .collect();
        if !dangling.is_empty() {
            items.push(ValidationItem {
                code: "MESH_TRIANGLE_OUT_OF_RANGE".to_string(),
                message: format!(
                    "Mesh {} ('{}') references {} triangle(s) past the end of the triangle table ({} triangles): {:?}",
                    mesh_idx,
                    mesh.name,
                    dangling.len(),
                    triangle_count,
                    dangling
                ),
                severity,
                category: ValidationCategory::Mesh,
                record: mesh_idx,
            });
        }
    }
    items
}

/// Check each mesh material index against the material table. `-1` means
/// "no material" and is always accepted.
pub fn validate_mesh_material_indices(
    doc: &ModelDocument,
    policy: IndexPolicy,
) -> Vec<ValidationItem> {
    let Some(severity) = policy.severity() else {
        return vec![];
    };
    let material_count = doc.materials.len();

    doc.meshes
        .iter()
        .enumerate()
        .filter(|(_, mesh)| mesh.has_material() && doc.mesh_material(mesh).is_none())
        .map(|(mesh_idx, mesh)| ValidationItem {
            code: "MESH_MATERIAL_OUT_OF_RANGE".to_string(),
            message: format!(
                "Mesh {} ('{}') uses material {} but the model has {} materials.",
                mesh_idx, mesh.name, mesh.material_index, material_count
            ),
            severity,
            category: ValidationCategory::Mesh,
            record: mesh_idx,
        })
        .collect()
}

/// Flag bone ids below the "unbound" sentinel.
pub fn validate_vertex_bone_ids(doc: &ModelDocument) -> Vec<ValidationItem> {
    doc.vertices
        .iter()
        .enumerate()
        .filter(|(_, v)| v.bone_id < UNBOUND_BONE)
        .map(|(idx, v)| ValidationItem {
            code: "VERTEX_BONE_ID_NEGATIVE".to_string(),
            message: format!("Vertex {} has bone id {} (expected -1 or a joint index).", idx, v.bone_id),
            severity: ValidationSeverity::Info,
            category: ValidationCategory::Vertex,
            record: idx,
        })
        .collect()
}

/// Report meshes that reference no triangles.
pub fn validate_empty_meshes(doc: &ModelDocument) -> Vec<ValidationItem> {
    doc.meshes
        .iter()
        .enumerate()
        .filter(|(_, mesh)| mesh.triangle_indices.is_empty())
        .map(|(idx, mesh)| ValidationItem {
            code: "MESH_EMPTY".to_string(),
            message: format!("Mesh {} ('{}') has no triangles.", idx, mesh.name),
            severity: ValidationSeverity::Info,
            category: ValidationCategory::Mesh,
            record: idx,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ms3d::{Header, Material, Mesh, Triangle, Vertex, MS3D_MAGIC};

    fn vertex(bone_id: i8) -> Vertex {
        Vertex {
            flags: 0,
            position: [0.0; 3],
            bone_id,
            ref_count: 1,
        }
    }

    fn triangle(indices: [u16; 3]) -> Triangle {
        Triangle {
            flags: 0,
            vertex_indices: indices,
            vertex_normals: [[0.0, 0.0, 1.0]; 3],
            s: [0.0; 3],
            t: [0.0; 3],
            smoothing_group: 1,
            group_index: 0,
        }
    }

    fn mesh(name: &str, tris: Vec<u16>, material_index: i8) -> Mesh {
        Mesh {
            flags: 0,
            name: name.to_string(),
            triangle_indices: tris,
            material_index,
        }
    }

    fn material() -> Material {
        Material {
            name: "mat".to_string(),
            ambient: [0.2, 0.2, 0.2, 1.0],
            diffuse: [0.8, 0.8, 0.8, 1.0],
            specular: [0.0; 4],
            emissive: [0.0; 4],
            shininess: 0.0,
            transparency: 1.0,
            mode: 0,
            texture_path: String::new(),
            alpha_map_path: String::new(),
        }
    }

    fn doc(triangles: Vec<Triangle>, meshes: Vec<Mesh>, materials: Vec<Material>) -> ModelDocument {
        ModelDocument {
            header: Header {
                id: MS3D_MAGIC.to_string(),
                version: 4,
            },
            vertices: vec![vertex(-1), vertex(0), vertex(-1)],
            triangles,
            meshes,
            materials,
            trailing_bytes: 0,
        }
    }

    #[test]
    fn consistent_model_has_no_findings() {
        let d = doc(
            vec![triangle([0, 1, 2])],
            vec![mesh("body", vec![0], 0)],
            vec![material()],
        );
        assert!(validate_triangle_vertex_indices(&d, IndexPolicy::Reject).is_empty());
        assert!(validate_mesh_triangle_indices(&d, IndexPolicy::Reject).is_empty());
        assert!(validate_mesh_material_indices(&d, IndexPolicy::Reject).is_empty());
        assert!(validate_vertex_bone_ids(&d).is_empty());
        assert!(validate_empty_meshes(&d).is_empty());
    }

    #[test]
    fn triangle_vertex_out_of_range() {
        let d = doc(vec![triangle([0, 3, 9])], vec![], vec![]);
        let items = validate_triangle_vertex_indices(&d, IndexPolicy::Warn);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.code == "TRIANGLE_VERTEX_OUT_OF_RANGE"));
        assert_eq!(items[0].severity, ValidationSeverity::Warning);
        assert_eq!(items[0].record, 0);
    }

    #[test]
    fn mesh_triangle_out_of_range_is_one_item_per_mesh() {
        let d = doc(vec![triangle([0, 1, 2])], vec![mesh("a", vec![0, 1, 2], -1)], vec![]);
        let items = validate_mesh_triangle_indices(&d, IndexPolicy::Reject);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].severity, ValidationSeverity::Error);
        assert!(items[0].message.contains("[1, 2]"));
    }

    #[test]
    fn no_material_sentinel_is_accepted() {
        let d = doc(vec![], vec![mesh("a", vec![], -1)], vec![]);
        assert!(validate_mesh_material_indices(&d, IndexPolicy::Reject).is_empty());
    }

    #[test]
    fn mesh_material_out_of_range() {
        let d = doc(vec![], vec![mesh("a", vec![], 1)], vec![material()]);
        let items = validate_mesh_material_indices(&d, IndexPolicy::Reject);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].code, "MESH_MATERIAL_OUT_OF_RANGE");
    }

    #[test]
    fn ignore_policy_suppresses_index_checks() {
        let d = doc(
            vec![triangle([7, 8, 9])],
            vec![mesh("a", vec![5], 3)],
            vec![],
        );
        assert!(validate_triangle_vertex_indices(&d, IndexPolicy::Ignore).is_empty());
        assert!(validate_mesh_triangle_indices(&d, IndexPolicy::Ignore).is_empty());
        assert!(validate_mesh_material_indices(&d, IndexPolicy::Ignore).is_empty());
    }

    #[test]
    fn negative_bone_ids_are_info() {
        let mut d = doc(vec![], vec![], vec![]);
        d.vertices.push(vertex(-5));
        let items = validate_vertex_bone_ids(&d);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].record, 3);
        assert_eq!(items[0].severity, ValidationSeverity::Info);
    }

    #[test]
    fn empty_mesh_is_reported() {
        let d = doc(vec![], vec![mesh("empty", vec![], -1)], vec![]);
        let items = validate_empty_meshes(&d);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].code, "MESH_EMPTY");
    }
}
