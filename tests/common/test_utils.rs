#[cfg(feature = "integration-tests")]
use duck_shading::{
    context::Context,
    data_structures::model::{Mesh, MeshData, ModelVertex},
    flow::{GraphicsFlow, ImageTestResult},
    render::Render,
};

#[derive(Default)]
pub(crate) struct FrameCounter(pub(crate) u32);

impl FrameCounter {
    pub(crate) fn frame(&self) -> u32 {
        self.0
    }

    pub(crate) fn progress(&mut self) {
        self.0 += 1;
    }
}

/// Square in the z = 0 plane facing +z, `2 * half` wide, centred on the origin.
#[cfg(feature = "integration-tests")]
pub(crate) fn quad(half: f32) -> MeshData {
    let vertex = |x: f32, y: f32, u: f32, v: f32| ModelVertex {
        position: [x * half, y * half, 0.0],
        tex_coords: [u, v],
        normal: [0.0, 0.0, 1.0],
        tangent: [1.0, 0.0, 0.0],
        bitangent: [0.0, 1.0, 0.0],
    };
    MeshData {
        name: "quad".to_string(),
        vertices: vec![
            vertex(-1.0, -1.0, 0.0, 1.0),
            vertex(1.0, -1.0, 1.0, 1.0),
            vertex(1.0, 1.0, 1.0, 0.0),
            vertex(-1.0, 1.0, 0.0, 0.0),
        ],
        indices: vec![0, 1, 2, 0, 2, 3],
        transform: Default::default(),
    }
}

pub(crate) fn is_black(pixel: &image::Rgba<u8>) -> bool {
    pixel.0[..3] == [0, 0, 0]
}

#[cfg(feature = "integration-tests")]
type Validate = Box<
    dyn Fn(
        &Context,
        &mut FrameCounter,
        &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<ImageTestResult, anyhow::Error>,
>;

#[cfg(feature = "integration-tests")]
pub(crate) struct TestRender {
    pub(crate) mesh: Option<Mesh>,
    pub(crate) setup: Box<dyn Fn(&mut Context)>,
    pub(crate) validate: Validate,
}

#[cfg(feature = "integration-tests")]
impl TestRender {
    pub(crate) fn new(
        mesh: Option<Mesh>,
        setup: impl Fn(&mut Context) + 'static,
        validate: impl Fn(
            &Context,
            &mut FrameCounter,
            &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
        ) -> Result<ImageTestResult, anyhow::Error>
        + 'static,
    ) -> Self {
        Self {
            mesh,
            setup: Box::new(setup),
            validate: Box::new(validate),
        }
    }
}

#[cfg(feature = "integration-tests")]
impl GraphicsFlow<FrameCounter> for TestRender {
    fn on_init(&mut self, ctx: &mut Context, _: &mut FrameCounter) {
        (self.setup)(ctx);
        if let Some(mesh) = &self.mesh {
            mesh.write_to_buffer(&ctx.queue);
        }
    }

    fn on_update(&mut self, _: &Context, state: &mut FrameCounter, _: std::time::Duration) {
        state.progress();
    }

    fn on_window_events(&mut self, _: &Context, _: &mut FrameCounter, _: &duck_shading::WindowEvent) {}

    fn on_render(&self) -> Render<'_> {
        match &self.mesh {
            Some(mesh) => mesh.into(),
            None => Render::None,
        }
    }

    fn render_to_texture(
        &self,
        ctx: &Context,
        state: &mut FrameCounter,
        texture: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<ImageTestResult, anyhow::Error> {
        (self.validate)(ctx, state, texture)
    }
}

/// Run a single flow built by an async closure over `InitContext` until its
/// validation passes.
#[macro_export]
macro_rules! golden_image_test {
    ($config:expr, $graphics_elem:expr) => {{
        use crate::common::test_utils::FrameCounter;
        use duck_shading::flow::{FlowConstructor, FlowResult, GraphicsFlow};
        let constructor: FlowConstructor<FrameCounter> = Box::new(|ctx| {
            let future: std::pin::Pin<Box<dyn Future<Output = FlowResult<FrameCounter>>>> =
                Box::pin(async move {
                    let g_flow: Box<dyn GraphicsFlow<FrameCounter>> =
                        Box::new(($graphics_elem)(ctx).await);
                    Ok::<_, anyhow::Error>(g_flow)
                });
            future
        });

        duck_shading::flow::run($config, vec![constructor])
            .expect("Failed to run flow for integration test.");
    }};
}
