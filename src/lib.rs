//! duck-shading
//!
//! Loads the glTF sample duck and renders it with one of four shading models
//! (plain, Lambert, Phong, physically based), natively or in the browser. The
//! demos in `demos/` each pick a material recipe and hand a [`duck::Duck`] flow
//! to [`flow::run`].
//!
//! High-level modules
//! - `camera`: camera, projection, uniforms and viewports for mono/stereo views
//! - `config`: demo configuration and asset source resolution
//! - `context`: central GPU and window context that owns device/queue/views
//! - `data_structures`: meshes, transforms and textures
//! - `duck`: the rotating duck flow
//! - `error`: asset loading errors
//! - `flow`: high level flow control (event loop, per-frame updates)
//! - `material`: material recipes, uniform sets and shader flags
//! - `pipelines`: render pipeline and material bind group construction
//! - `resources`: helpers to download models, textures and shader text
//! - `render`: what a flow draws each frame
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod duck;
pub mod error;
pub mod flow;
pub mod material;
pub mod pipelines;
pub mod render;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use config::Config;
pub use error::AssetError;
pub use material::{DirectionalLight, MaterialRecipe, PhysicalParams};
pub use winit::event::WindowEvent;
