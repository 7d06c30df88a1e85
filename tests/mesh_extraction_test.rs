mod common;

use common::glb::{glb, nested_triangle_json, triangle_bin, triangle_glb, triangle_json};
use duck_shading::{
    AssetError,
    data_structures::model::{ModelVertex, compute_tangents},
    resources::mesh::extract_mesh,
};

fn extract(data: &[u8]) -> Result<duck_shading::data_structures::model::MeshData, AssetError> {
    let gltf = gltf::Gltf::from_slice(data).unwrap();
    let buffers: Vec<Vec<u8>> = gltf.blob.iter().cloned().collect();
    extract_mesh(&gltf.document, &buffers, "/test.glb")
}

#[test]
fn should_extract_mesh_from_child_of_root() {
    let mesh = extract(&triangle_glb()).unwrap();
    assert_eq!(mesh.name, "triangle");
    assert_eq!(mesh.vertices.len(), 3);
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    assert_eq!(mesh.vertices[1].position, [1.0, 0.0, 0.0]);
    assert_eq!(mesh.vertices[2].tex_coords, [0.0, 1.0]);
    assert_eq!(mesh.vertices[0].normal, [0.0, 0.0, 1.0]);
    assert_eq!(mesh.transform.position, cgmath::Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(mesh.transform.scale, cgmath::Vector3::new(1.0, 1.0, 1.0));
}

#[test]
fn should_fall_back_to_mesh_on_root_node() {
    let json = triangle_json("[0]", r#"[{ "name": "lonely", "mesh": 0 }]"#);
    let mesh = extract(&glb(&json, &triangle_bin())).unwrap();
    assert_eq!(mesh.vertices.len(), 3);
    assert_eq!(mesh.transform.position, cgmath::Vector3::new(0.0, 0.0, 0.0));
}

#[test]
fn should_prefer_children_over_root_mesh() {
    let json = triangle_json(
        "[0]",
        r#"[
    { "name": "root", "mesh": 0, "children": [1] },
    { "name": "child", "mesh": 0, "translation": [5.0, 0.0, 0.0] }
  ]"#,
    );
    let mesh = extract(&glb(&json, &triangle_bin())).unwrap();
    assert_eq!(mesh.transform.position.x, 5.0);
}

#[test]
fn should_fail_without_mesh_in_scene() {
    let json = triangle_json("[0]", r#"[{ "name": "empty" }]"#);
    let err = extract(&glb(&json, &triangle_bin())).unwrap_err();
    assert!(matches!(err, AssetError::MeshNotFound { ref path } if path == "/test.glb"));
}

#[test]
fn should_fail_on_empty_document() {
    let err = extract(br#"{ "asset": { "version": "2.0" } }"#).unwrap_err();
    assert!(matches!(err, AssetError::MeshNotFound { .. }));
}

#[test]
fn should_generate_tangents_from_uvs() {
    let mesh = extract(&glb(&nested_triangle_json(), &triangle_bin())).unwrap();
    for vertex in &mesh.vertices {
        assert_eq!(vertex.tangent, [1.0, 0.0, 0.0]);
        assert_eq!(vertex.bitangent, [0.0, -1.0, 0.0]);
    }
}

#[test]
fn should_skip_degenerate_uvs_when_computing_tangents() {
    let vertex = |x: f32, y: f32| ModelVertex {
        position: [x, y, 0.0],
        ..Default::default()
    };
    let mut vertices = vec![vertex(0.0, 0.0), vertex(1.0, 0.0), vertex(0.0, 1.0)];
    compute_tangents(&mut vertices, &[0, 1, 2]);
    for vertex in &vertices {
        assert_eq!(vertex.tangent, [0.0; 3]);
        assert_eq!(vertex.bitangent, [0.0; 3]);
    }
}

#[test]
fn should_skip_out_of_bounds_triangles() {
    let mut vertices = vec![ModelVertex::default(); 2];
    compute_tangents(&mut vertices, &[0, 1, 7]);
    assert_eq!(vertices, vec![ModelVertex::default(); 2]);
}
