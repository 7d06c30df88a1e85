use duck_shading::material::{
    DirectionalLight, MaterialRecipe, MaterialUniform, PhysicalParams, UniformSet, UniformValue,
    names,
};

#[test]
fn should_match_wgsl_layout_size() {
    assert_eq!(std::mem::size_of::<MaterialUniform>(), 64);
}

#[test]
fn should_pack_plain_colour_into_albedo() {
    let recipe = MaterialRecipe::Plain {
        color: [0.2, 0.4, 0.6].into(),
    };
    let uniform = MaterialUniform::pack(&recipe.assemble().uniforms);
    assert_eq!(uniform.albedo, [0.2, 0.4, 0.6, 1.0]);
    assert_eq!(uniform.light_intensity, [0.0; 4]);
    assert_eq!(uniform.texture_repeat, [1.0, 1.0]);
}

#[test]
fn should_pack_physical_parameters() {
    let params = PhysicalParams {
        roughness: 0.7,
        metalness: 0.2,
        light: DirectionalLight::new([0.0, 0.0, -1.0].into(), [2.0, 3.0, 4.0].into()),
        ..Default::default()
    }
    .with_texture_repeat(2.0);
    let uniform = MaterialUniform::pack(&MaterialRecipe::Physical(params).assemble().uniforms);
    assert_eq!(uniform.albedo, [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(uniform.light_direction, [0.0, 0.0, -1.0, 0.0]);
    assert_eq!(uniform.light_intensity, [2.0, 3.0, 4.0, 0.0]);
    assert_eq!(uniform.texture_repeat, [2.0, 2.0]);
    assert_eq!(uniform.roughness, 0.7);
    assert_eq!(uniform.metalness, 0.2);
}

#[test]
fn should_default_missing_entries() {
    let uniform = MaterialUniform::pack(&UniformSet::new());
    assert_eq!(uniform.albedo, [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(uniform.roughness, 0.0);
    assert_eq!(uniform.texture_repeat, [1.0, 1.0]);
}

#[test]
fn should_ignore_unknown_uniforms() {
    let mut uniforms = UniformSet::new();
    uniforms
        .insert(names::ROUGHNESS, UniformValue::Float(0.5))
        .insert("sheen", UniformValue::Float(1.0));
    let uniform = MaterialUniform::pack(&uniforms);
    assert_eq!(uniform.roughness, 0.5);
    assert_eq!(uniforms.len(), 2);
}
