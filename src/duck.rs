//! The rotating duck every demo draws.

use std::pin::Pin;

use instant::Duration;
use winit::event::WindowEvent;

use crate::{
    context::{Context, InitContext},
    data_structures::model::Mesh,
    error::AssetError,
    flow::{FlowConstructor, FlowResult, GraphicsFlow},
    material::MaterialRecipe,
    render::Render,
    resources,
};

/// Binary glTF of the Khronos sample duck.
pub const DUCK_MODEL: &str = "/vendor/gltf-sample-models/2.0/Duck/glTF-Binary/Duck.glb";

/// Rotation steps are given per frame at this rate.
const REFERENCE_FPS: f32 = 60.0;

pub struct Duck {
    pub mesh: Mesh,
    rotation_speed: cgmath::Vector2<f32>,
}

impl Duck {
    /// Download the model, then the material's shaders and textures, then upload the mesh.
    pub async fn load(
        ctx: &InitContext,
        model_path: &str,
        recipe: &MaterialRecipe,
    ) -> Result<Self, AssetError> {
        let data = resources::load_duck(&ctx.assets, model_path).await?;
        let material = resources::new_material(ctx, recipe).await?;
        let mesh = Mesh::new(&ctx.device, &data, material);
        Ok(Self {
            mesh,
            rotation_speed: ctx.rotation_speed,
        })
    }

    /// Advance the rotation by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        let step = rotation_step(self.rotation_speed, dt);
        self.mesh.instance.rotate(step.x, step.y);
    }
}

/// Radians to add to the x/y rotation after `dt`, given the step per 1/60 s.
pub fn rotation_step(speed: cgmath::Vector2<f32>, dt: Duration) -> cgmath::Vector2<f32> {
    speed * (dt.as_secs_f32() * REFERENCE_FPS)
}

impl<S> GraphicsFlow<S> for Duck {
    fn on_init(&mut self, ctx: &mut Context, _: &mut S) {
        self.mesh.write_to_buffer(&ctx.queue);
    }

    fn on_update(&mut self, ctx: &Context, _: &mut S, dt: Duration) {
        self.advance(dt);
        self.mesh.write_to_buffer(&ctx.queue);
    }

    fn on_window_events(&mut self, _: &Context, _: &mut S, _: &WindowEvent) {}

    fn on_render(&self) -> Render<'_> {
        (&self.mesh).into()
    }

    #[cfg(feature = "integration-tests")]
    fn render_to_texture(
        &self,
        _: &Context,
        _: &mut S,
        _: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<crate::flow::ImageTestResult, anyhow::Error> {
        Ok(crate::flow::ImageTestResult::Passed)
    }
}

/// Flow constructor loading the duck at `model_path` with `recipe`.
pub fn constructor<S: 'static>(model_path: &str, recipe: MaterialRecipe) -> FlowConstructor<S> {
    let model_path = model_path.to_string();
    Box::new(move |ctx: InitContext| {
        let future: Pin<Box<dyn Future<Output = FlowResult<S>>>> = Box::pin(async move {
            let duck = Duck::load(&ctx, &model_path, &recipe).await?;
            log::info!("{} duck ready", recipe.name());
            Ok::<_, anyhow::Error>(Box::new(duck) as Box<dyn GraphicsFlow<S>>)
        });
        future
    })
}
