use duck_shading::{Config, MaterialRecipe, duck};

fn main() -> anyhow::Result<()> {
    let recipe = MaterialRecipe::Plain {
        color: [1.0, 0.85, 0.1].into(),
    };
    let duck = duck::constructor::<()>(duck::DUCK_MODEL, recipe);
    duck_shading::flow::run(Config::from_env()?.with_title("duck: plain"), vec![duck])
}
