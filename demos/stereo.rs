//! Side-by-side stereo rendering of the physical duck, one half per eye.

use duck_shading::{
    Config, DirectionalLight, MaterialRecipe, PhysicalParams, config::StereoConfig, duck,
};

const DUCK_ALBEDO: &str = "/vendor/gltf-sample-models/2.0/Duck/glTF/DuckCM.png";

fn main() -> anyhow::Result<()> {
    let params = PhysicalParams {
        roughness: 0.4,
        light: DirectionalLight::new([-1.0, -1.0, -1.0].into(), [3.0, 3.0, 3.0].into()),
        ..Default::default()
    }
    .with_albedo_map(DUCK_ALBEDO);

    let config = Config::from_env()?
        .with_title("duck: stereo")
        .with_stereo(StereoConfig::default());
    let duck = duck::constructor::<()>(duck::DUCK_MODEL, MaterialRecipe::Physical(params));
    duck_shading::flow::run(config, vec![duck])
}
