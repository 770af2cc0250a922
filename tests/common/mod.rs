// Common test utilities: a builder for synthetic MS3D files
#![allow(dead_code)]

pub const MAGIC: &[u8; 10] = b"MS3D000000";

fn push_fixed(buf: &mut Vec<u8>, value: &[u8], len: usize) {
    let mut field = vec![0u8; len];
    let n = value.len().min(len);
    field[..n].copy_from_slice(&value[..n]);
    buf.extend_from_slice(&field);
}

fn push_f32s(buf: &mut Vec<u8>, values: &[f32]) {
    for v in values {
        buf.extend_from_slice(&v.to_le_bytes());
    }
}

pub struct TestVertex {
    pub flags: u8,
    pub position: [f32; 3],
    pub bone_id: i8,
    pub ref_count: u8,
}

pub struct TestTriangle {
    pub flags: u16,
    pub indices: [u16; 3],
    pub normals: [[f32; 3]; 3],
    pub s: [f32; 3],
    pub t: [f32; 3],
    pub smoothing_group: u8,
    pub group_index: u8,
}

pub struct TestMesh {
    pub flags: u8,
    pub name: Vec<u8>,
    pub triangles: Vec<u16>,
    pub material_byte: u8,
}

pub struct TestMaterial {
    pub name: Vec<u8>,
    pub diffuse: [f32; 4],
    pub shininess: f32,
    pub transparency: f32,
    pub mode: i8,
    pub texture: Vec<u8>,
    pub alpha_map: Vec<u8>,
}

/// Builds MS3D byte streams table by table.
pub struct Ms3dBuilder {
    pub version: u32,
    pub vertices: Vec<TestVertex>,
    pub triangles: Vec<TestTriangle>,
    pub meshes: Vec<TestMesh>,
    pub materials: Vec<TestMaterial>,
}

impl Ms3dBuilder {
    pub fn new(version: u32) -> Self {
        Self {
            version,
            vertices: vec![],
            triangles: vec![],
            meshes: vec![],
            materials: vec![],
        }
    }

    pub fn vertex(mut self, position: [f32; 3], bone_id: i8) -> Self {
        self.vertices.push(TestVertex {
            flags: 0,
            position,
            bone_id,
            ref_count: 1,
        });
        self
    }

    pub fn triangle(mut self, indices: [u16; 3]) -> Self {
        self.triangles.push(TestTriangle {
            flags: 0,
            indices,
            normals: [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]],
            s: [0.0, 1.0, 0.0],
            t: [0.0, 0.0, 1.0],
            smoothing_group: 1,
            group_index: 0,
        });
        self
    }

    pub fn mesh(mut self, name: &str, triangles: &[u16], material_index: i8) -> Self {
        self.meshes.push(TestMesh {
            flags: 0,
            name: name.as_bytes().to_vec(),
            triangles: triangles.to_vec(),
            material_byte: material_index as u8,
        });
        self
    }

    pub fn material(mut self, name: &str, texture: &str, alpha_map: &str) -> Self {
        self.materials.push(TestMaterial {
            name: name.as_bytes().to_vec(),
            diffuse: [0.8, 0.8, 0.8, 1.0],
            shininess: 16.0,
            transparency: 1.0,
            mode: 0,
            texture: texture.as_bytes().to_vec(),
            alpha_map: alpha_map.as_bytes().to_vec(),
        });
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = MAGIC.to_vec();
        buf.extend_from_slice(&self.version.to_le_bytes());

        buf.extend_from_slice(&(self.vertices.len() as u16).to_le_bytes());
        for v in &self.vertices {
            buf.push(v.flags);
            push_f32s(&mut buf, &v.position);
            buf.push(v.bone_id as u8);
            buf.push(v.ref_count);
        }

        buf.extend_from_slice(&(self.triangles.len() as u16).to_le_bytes());
        for t in &self.triangles {
            buf.extend_from_slice(&t.flags.to_le_bytes());
            for i in t.indices {
                buf.extend_from_slice(&i.to_le_bytes());
            }
            for n in &t.normals {
                push_f32s(&mut buf, n);
            }
            push_f32s(&mut buf, &t.s);
            push_f32s(&mut buf, &t.t);
            buf.push(t.smoothing_group);
            buf.push(t.group_index);
        }

        buf.extend_from_slice(&(self.meshes.len() as u16).to_le_bytes());
        for m in &self.meshes {
            buf.push(m.flags);
            push_fixed(&mut buf, &m.name, 32);
            buf.extend_from_slice(&(m.triangles.len() as u16).to_le_bytes());
            for i in &m.triangles {
                buf.extend_from_slice(&i.to_le_bytes());
            }
            buf.push(m.material_byte);
        }

        buf.extend_from_slice(&(self.materials.len() as u16).to_le_bytes());
        for m in &self.materials {
            push_fixed(&mut buf, &m.name, 32);
            push_f32s(&mut buf, &[0.2, 0.2, 0.2, 1.0]);
            push_f32s(&mut buf, &m.diffuse);
            push_f32s(&mut buf, &[0.0, 0.0, 0.0, 1.0]);
            push_f32s(&mut buf, &[0.0, 0.0, 0.0, 1.0]);
            push_f32s(&mut buf, &[m.shininess, m.transparency]);
            buf.push(m.mode as u8);
            push_fixed(&mut buf, &m.texture, 128);
            push_fixed(&mut buf, &m.alpha_map, 128);
        }

        buf
    }
}

/// A small but complete model: one quad (two triangles), two meshes, one material.
pub fn quad_model() -> Ms3dBuilder {
    Ms3dBuilder::new(4)
        .vertex([0.0, 0.0, 0.0], -1)
        .vertex([1.0, 0.0, 0.0], -1)
        .vertex([1.0, 1.0, 0.0], 0)
        .vertex([0.0, 1.0, 0.0], 0)
        .triangle([0, 1, 2])
        .triangle([0, 2, 3])
        .mesh("Quad", &[0, 1], 0)
        .mesh("Unassigned", &[1], -1)
        .material("Wall", "..\\textures\\wall.bmp", ".\\textures\\wall_alpha.bmp")
}
