use cgmath::InnerSpace;

use crate::{
    data_structures::{
        instance::Instance,
        model::{MeshData, ModelVertex, compute_tangents},
    },
    error::AssetError,
};

/// Locate the mesh to render in a scene.
///
/// Root nodes are containers for the actual geometry, so their direct children
/// are searched first, in order. A root node that carries a mesh itself is the
/// fallback.
pub fn find_mesh_node<'a>(scene: &gltf::Scene<'a>) -> Option<(gltf::Node<'a>, gltf::Mesh<'a>)> {
    scene
        .nodes()
        .flat_map(|root| root.children())
        .find_map(|node| node.mesh().map(|mesh| (node.clone(), mesh)))
        .or_else(|| {
            scene
                .nodes()
                .find_map(|node| node.mesh().map(|mesh| (node.clone(), mesh)))
        })
}

/// The node's own transform. Parent transforms are dropped because the mesh is
/// drawn directly at the scene root.
pub fn local_transform(node: &gltf::Node) -> Instance {
    let (translation, rotation, scale) = node.transform().decomposed();
    // glTF stores quaternions as [x, y, z, w]
    let rotation = cgmath::Quaternion::new(rotation[3], rotation[0], rotation[1], rotation[2]);
    Instance {
        position: translation.into(),
        rotation: cgmath::Euler::from(rotation),
        scale: scale.into(),
    }
}

/// Read the first mesh of the scene graph into CPU vertex and index data.
///
/// `path` is only used for error messages.
pub fn extract_mesh(
    document: &gltf::Document,
    buffers: &[Vec<u8>],
    path: &str,
) -> Result<MeshData, AssetError> {
    let not_found = || AssetError::MeshNotFound {
        path: path.to_string(),
    };
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or_else(not_found)?;
    let (node, mesh) = find_mesh_node(&scene).ok_or_else(not_found)?;
    let name = mesh
        .name()
        .or_else(|| node.name())
        .unwrap_or("unknown_mesh")
        .to_string();
    let missing_positions = || AssetError::MissingPositions { mesh: name.clone() };

    let primitive = mesh.primitives().next().ok_or_else(missing_positions)?;
    if mesh.primitives().len() > 1 {
        log::warn!(
            "Mesh {} has {} primitives, only the first one is drawn",
            name,
            mesh.primitives().len()
        );
    }
    if primitive.mode() != gltf::mesh::Mode::Triangles {
        log::warn!("Mesh {} is not a triangle list: {:?}", name, primitive.mode());
    }

    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| data.as_slice()));

    let mut vertices: Vec<ModelVertex> = reader
        .read_positions()
        .ok_or_else(missing_positions)?
        .map(|position| ModelVertex {
            position,
            ..Default::default()
        })
        .collect();

    if let Some(normals) = reader.read_normals() {
        vertices
            .iter_mut()
            .zip(normals)
            .for_each(|(vertex, normal)| vertex.normal = normal);
    }
    if let Some(tex_coords) = reader.read_tex_coords(0).map(|v| v.into_f32()) {
        vertices
            .iter_mut()
            .zip(tex_coords)
            .for_each(|(vertex, tex_coord)| vertex.tex_coords = tex_coord);
    }

    let indices: Vec<u32> = match reader.read_indices() {
        Some(indices) => indices.into_u32().collect(),
        None => (0..vertices.len() as u32).collect(),
    };

    match reader.read_tangents() {
        Some(tangents) => {
            vertices.iter_mut().zip(tangents).for_each(|(vertex, tangent)| {
                // The 4th component is the handedness of the bitangent
                let tangent: cgmath::Vector4<f32> = tangent.into();
                let normal: cgmath::Vector3<f32> = vertex.normal.into();
                vertex.tangent = tangent.truncate().into();
                vertex.bitangent = (normal.cross(tangent.truncate()) * tangent.w).into();
            });
        }
        None => compute_tangents(&mut vertices, &indices),
    }

    let zero_normals = vertices
        .iter()
        .filter(|v| cgmath::Vector3::from(v.normal).magnitude2() == 0.0)
        .count();
    if zero_normals > 0 {
        log::warn!("Mesh {} has {} vertices without normals", name, zero_normals);
    }

    log::debug!(
        "Extracted mesh {} with {} vertices and {} indices",
        name,
        vertices.len(),
        indices.len()
    );

    Ok(MeshData {
        name,
        vertices,
        indices,
        transform: local_transform(&node),
    })
}
