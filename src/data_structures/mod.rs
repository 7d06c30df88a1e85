//! Engine data structures: meshes, textures and transforms.
//!
//! - `model` contains the vertex layout, CPU mesh data and the GPU mesh
//! - `texture` contains GPU texture wrapper and creation utilities
//! - `instance` holds the mesh transformation and its raw GPU form

pub mod instance;
pub mod model;
pub mod texture;
