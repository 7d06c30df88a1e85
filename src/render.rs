//! Render composition.
//!
//! A flow describes what to draw each frame with a [`Render`]. The engine
//! flattens it into the meshes it draws once per view.

use crate::data_structures::model::Mesh;

/// Specifies how a flow should be rendered.
///
/// - `None` renders nothing
/// - `Mesh` renders a single mesh with its own material
/// - `Composed` recursively renders a composition of renders, in order
pub enum Render<'a> {
    None,
    Mesh(&'a Mesh),
    Composed(Vec<Render<'a>>),
}

impl<'a> Render<'a> {
    /// Flatten the render tree into the meshes to draw, in draw order.
    pub fn meshes(self) -> Vec<&'a Mesh> {
        let mut meshes = Vec::new();
        self.collect(&mut meshes);
        meshes
    }

    fn collect(self, meshes: &mut Vec<&'a Mesh>) {
        match self {
            Render::Mesh(mesh) => meshes.push(mesh),
            Render::Composed(renders) => renders
                .into_iter()
                .for_each(|render| render.collect(meshes)),
            Render::None => (),
        }
    }
}

impl<'a> From<&'a Mesh> for Render<'a> {
    fn from(mesh: &'a Mesh) -> Self {
        Render::Mesh(mesh)
    }
}
