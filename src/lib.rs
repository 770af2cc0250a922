// MilkShape3D model decoding. Host integration (scene creation, texture
// lookup on disk) lives with the caller; see `bin/ms3d_inspect.rs`.

pub mod ms3d;
pub mod validation;

pub use ms3d::{decode, load_ms3d, DecodeError, ModelDocument};
