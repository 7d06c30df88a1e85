use std::path::PathBuf;

use duck_shading::{
    AssetError, Config,
    config::{AssetSource, BUNDLED_ASSETS, Location, StereoConfig},
    resources::{sibling_path, texture::extension},
};

#[test]
fn should_resolve_absolute_paths_against_the_origin() {
    let source = AssetSource::parse("https://example.com/demos/duck").unwrap();
    let location = source.resolve("/shaders/basic.vert").unwrap();
    assert_eq!(
        location,
        Location::Url("https://example.com/shaders/basic.vert".parse().unwrap())
    );
}

#[test]
fn should_resolve_relative_paths_below_the_base() {
    let source = AssetSource::parse("http://localhost:8080/demos").unwrap();
    let location = source.resolve("shaders/basic.vert").unwrap();
    assert_eq!(
        location.to_string(),
        "http://localhost:8080/demos/shaders/basic.vert"
    );
}

#[test]
fn should_resolve_into_directory() {
    let source = AssetSource::parse("/srv/assets").unwrap();
    assert_eq!(source, AssetSource::Directory(PathBuf::from("/srv/assets")));
    assert_eq!(
        source.resolve("/vendor/Duck.glb").unwrap(),
        Location::File(PathBuf::from("/srv/assets/vendor/Duck.glb"))
    );
}

#[test]
fn should_percent_decode_file_paths() {
    let source = AssetSource::Directory(PathBuf::from("/srv/assets"));
    assert_eq!(
        source.resolve("/models/my%20mesh.bin").unwrap(),
        Location::File(PathBuf::from("/srv/assets/models/my mesh.bin"))
    );
    let err = source.resolve("/models/%FF.bin").unwrap_err();
    assert!(matches!(err, AssetError::InvalidUrl { ref path } if path == "/models/%FF.bin"));
}

#[test]
fn should_reject_empty_file_path() {
    let source = AssetSource::Directory(PathBuf::from("assets"));
    let err = source.resolve("/").unwrap_err();
    assert!(matches!(err, AssetError::InvalidUrl { .. }));
}

#[test]
fn should_resolve_model_siblings() {
    let model = "/vendor/gltf-sample-models/2.0/Duck/glTF/Duck.gltf";
    assert_eq!(
        sibling_path(model, "Duck0.bin"),
        "/vendor/gltf-sample-models/2.0/Duck/glTF/Duck0.bin"
    );
    assert_eq!(sibling_path(model, "/textures/a.png"), "/textures/a.png");
    assert_eq!(sibling_path("Duck.gltf", "Duck0.bin"), "Duck0.bin");
}

#[test]
fn should_read_texture_extension() {
    assert_eq!(extension("/vendor/Duck/glTF/DuckCM.png"), Some("png"));
    assert_eq!(extension("/textures/wood.final.jpg"), Some("jpg"));
    assert_eq!(extension("/textures/noext"), None);
    assert_eq!(extension("/textures.d/.hidden"), None);
}

#[test]
fn should_name_url_and_status_in_http_errors() {
    let err = AssetError::Status {
        url: "http://localhost/vendor/Duck.glb".to_string(),
        status: 404,
    };
    assert_eq!(
        err.to_string(),
        "Failed to download: url=http://localhost/vendor/Duck.glb, status=404"
    );
    assert_eq!(err.status(), Some(404));
}

#[test]
fn should_name_path_in_mesh_errors() {
    let err = AssetError::MeshNotFound {
        path: "/empty.glb".to_string(),
    };
    assert_eq!(err.to_string(), "Mesh not found in scene graph: path=/empty.glb");
    assert_eq!(err.status(), None);
}

#[test]
fn should_build_config() {
    let config = Config::default()
        .with_title("test")
        .with_rotation_speed(0.02, 0.0)
        .with_stereo(StereoConfig { eye_separation: 2.0 });
    assert_eq!(config.title, "test");
    assert_eq!(config.rotation_speed, cgmath::Vector2::new(0.02, 0.0));
    assert_eq!(config.stereo, Some(StereoConfig { eye_separation: 2.0 }));
    assert_eq!(
        Config::default().assets,
        AssetSource::Directory(PathBuf::from(BUNDLED_ASSETS))
    );
}

#[test]
fn should_find_bundled_shaders_by_default() {
    for shader in ["/shaders/basic.vert", "/shaders/physical.frag"] {
        match AssetSource::default().resolve(shader).unwrap() {
            Location::File(path) => assert!(path.is_file(), "{} is missing", path.display()),
            other => panic!("expected a file, got {}", other),
        }
    }
}

#[test]
fn should_spin_by_default() {
    let config = Config::default();
    assert_eq!(config.rotation_speed, cgmath::Vector2::new(0.01, -0.01));
    assert!(config.stereo.is_none());
}
