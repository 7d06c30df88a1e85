use std::collections::HashSet;

use duck_shading::material::{
    DirectionalLight, MaterialRecipe, PhysicalParams, ShaderFlag, ShaderPair, ShaderSources,
    TextureSlot, UniformValue, flag_prelude, names,
};

fn recipes() -> Vec<MaterialRecipe> {
    let light = DirectionalLight::default();
    vec![
        MaterialRecipe::Plain {
            color: [1.0, 1.0, 0.0].into(),
        },
        MaterialRecipe::Lambert {
            albedo: [1.0, 1.0, 0.0].into(),
            light,
        },
        MaterialRecipe::Phong {
            albedo: [1.0, 1.0, 0.0].into(),
            roughness: 0.3,
            light,
        },
        MaterialRecipe::Physical(PhysicalParams::default()),
    ]
}

#[test]
fn should_select_four_distinct_shader_pairs() {
    let pairs: HashSet<ShaderPair> = recipes().iter().map(|r| r.assemble().shaders).collect();
    assert_eq!(pairs.len(), 4);
    assert!(pairs.contains(&ShaderPair::PLAIN));
    assert!(pairs.contains(&ShaderPair::PHYSICAL));
}

#[test]
fn should_share_the_basic_vertex_shader_between_simple_models() {
    assert_eq!(ShaderPair::PLAIN.vertex, "/shaders/basic.vert");
    assert_eq!(ShaderPair::LAMBERT.vertex, ShaderPair::PLAIN.vertex);
    assert_eq!(ShaderPair::PHONG.vertex, ShaderPair::PLAIN.vertex);
    assert_eq!(ShaderPair::PHYSICAL.vertex, "/shaders/physical.vert");
    assert_eq!(ShaderPair::PHYSICAL.fragment, "/shaders/physical.frag");
}

#[test]
fn should_build_uniforms_for_each_model() {
    let expected: [&[&str]; 4] = [
        &[names::COLOR],
        &[names::ALBEDO, names::LIGHT_DIRECTION, names::LIGHT_INTENSITY],
        &[
            names::ALBEDO,
            names::LIGHT_DIRECTION,
            names::LIGHT_INTENSITY,
            names::ROUGHNESS,
        ],
        &[
            names::ALBEDO,
            names::LIGHT_DIRECTION,
            names::LIGHT_INTENSITY,
            names::METALNESS,
            names::ROUGHNESS,
            names::TEXTURE_REPEAT,
        ],
    ];
    for (recipe, expected) in recipes().iter().zip(expected) {
        let descriptor = recipe.assemble();
        let mut names: Vec<_> = descriptor.uniforms.names().collect();
        let mut expected = expected.to_vec();
        names.sort();
        expected.sort();
        assert_eq!(names, expected, "uniforms of {}", recipe.name());
        assert!(descriptor.flags.is_empty());
    }
}

#[test]
fn should_flag_albedo_map_only_when_present() {
    let with_map = MaterialRecipe::Physical(PhysicalParams::default().with_albedo_map("/duck.png"));
    let descriptor = with_map.assemble();
    assert_eq!(descriptor.flags, vec![ShaderFlag::AlbedoMap]);
    assert_eq!(
        descriptor.uniforms.texture(names::ALBEDO_MAP),
        Some(TextureSlot::Albedo)
    );
    assert_eq!(descriptor.albedo_map.as_deref(), Some("/duck.png"));
    assert!(descriptor.normal_map.is_none());

    let without = MaterialRecipe::Physical(PhysicalParams::default()).assemble();
    assert!(!without.flags.contains(&ShaderFlag::AlbedoMap));
    assert!(!without.uniforms.contains(names::ALBEDO_MAP));
}

#[test]
fn should_flag_both_maps() {
    let params = PhysicalParams::default()
        .with_albedo_map("/a.png")
        .with_normal_map("/n.png")
        .with_texture_repeat(4.0);
    let descriptor = MaterialRecipe::Physical(params).assemble();
    assert_eq!(
        descriptor.flags,
        vec![ShaderFlag::AlbedoMap, ShaderFlag::NormalMap]
    );
    assert_eq!(
        descriptor.uniforms.texture(names::NORMAL_MAP),
        Some(TextureSlot::Normal)
    );
    assert_eq!(
        descriptor.uniforms.vec2(names::TEXTURE_REPEAT),
        Some([4.0, 4.0])
    );
}

#[test]
fn should_normalize_light_direction() {
    let recipe = MaterialRecipe::Lambert {
        albedo: [1.0, 1.0, 1.0].into(),
        light: DirectionalLight::new([0.0, -2.0, 0.0].into(), [0.5, 0.5, 0.5].into()),
    };
    let uniforms = recipe.assemble().uniforms;
    assert_eq!(uniforms.vec3(names::LIGHT_DIRECTION), Some([0.0, -1.0, 0.0]));
    assert_eq!(uniforms.vec3(names::LIGHT_INTENSITY), Some([0.5, 0.5, 0.5]));
}

#[test]
fn should_keep_zero_light_direction() {
    let light = DirectionalLight::new([0.0, 0.0, 0.0].into(), [1.0, 1.0, 1.0].into());
    assert_eq!(light.normalized_direction(), [0.0, 0.0, 0.0].into());
}

#[test]
fn should_store_roughness_as_float() {
    let recipe = MaterialRecipe::Phong {
        albedo: [1.0, 1.0, 1.0].into(),
        roughness: 0.25,
        light: DirectionalLight::default(),
    };
    let uniforms = recipe.assemble().uniforms;
    assert_eq!(
        uniforms.get(names::ROUGHNESS),
        Some(&UniformValue::Float(0.25))
    );
    assert_eq!(uniforms.vec3(names::ROUGHNESS), None);
}

#[test]
fn should_declare_every_flag_in_prelude() {
    assert_eq!(
        flag_prelude(&[]),
        "const USE_ALBEDO_MAP: bool = false;\nconst USE_NORMAL_MAP: bool = false;\n"
    );
    assert_eq!(
        flag_prelude(&[ShaderFlag::NormalMap]),
        "const USE_ALBEDO_MAP: bool = false;\nconst USE_NORMAL_MAP: bool = true;\n"
    );
}

#[test]
fn should_prepend_flags_to_both_sources() {
    let sources = ShaderSources::with_flags("fn vs() {}", "fn fs() {}", &[ShaderFlag::AlbedoMap]);
    for (source, body) in [(&sources.vertex, "fn vs() {}"), (&sources.fragment, "fn fs() {}")] {
        assert!(source.starts_with("const USE_ALBEDO_MAP: bool = true;\n"));
        assert!(source.ends_with(body));
    }
}
