use duck_shading::{Config, DirectionalLight, MaterialRecipe, PhysicalParams, duck};

const DUCK_ALBEDO: &str = "/vendor/gltf-sample-models/2.0/Duck/glTF/DuckCM.png";
const BUMPS: &str = "/textures/bumps_normal.png";

fn main() -> anyhow::Result<()> {
    let params = PhysicalParams {
        roughness: 0.4,
        metalness: 0.1,
        light: DirectionalLight::new([-1.0, -1.0, -1.0].into(), [3.0, 3.0, 3.0].into()),
        ..Default::default()
    }
    .with_albedo_map(DUCK_ALBEDO)
    .with_normal_map(BUMPS)
    .with_texture_repeat(1.0);

    let duck = duck::constructor::<()>(duck::DUCK_MODEL, MaterialRecipe::Physical(params));
    duck_shading::flow::run(Config::from_env()?.with_title("duck: physical"), vec![duck])
}
