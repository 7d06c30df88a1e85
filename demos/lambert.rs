use duck_shading::{Config, DirectionalLight, MaterialRecipe, duck};

fn main() -> anyhow::Result<()> {
    let recipe = MaterialRecipe::Lambert {
        albedo: [1.0, 0.85, 0.1].into(),
        light: DirectionalLight::new([-1.0, -1.0, -1.0].into(), [1.0, 1.0, 1.0].into()),
    };
    let duck = duck::constructor::<()>(duck::DUCK_MODEL, recipe);
    duck_shading::flow::run(Config::from_env()?.with_title("duck: lambert"), vec![duck])
}
