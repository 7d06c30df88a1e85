//! GPU and window context.
//!
//! [`Context`] owns the surface, device, queue, depth buffer and one set of
//! camera resources per view (one view normally, two for stereo).
//! [`InitContext`] is the cheap clone of it that async flow constructors get.

use std::sync::Arc;

use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::{
    camera::{Camera, CameraUniform, Projection, Viewport},
    config::{AssetSource, Config},
    data_structures::texture,
};

/// Camera resources of a single view: one eye, or the whole window.
#[derive(Debug)]
pub struct ViewResources {
    pub viewport: Viewport,
    /// Sideways offset of this view's eye from the camera, in world units.
    pub eye_offset: f32,
    pub projection: Projection,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

/// Viewports and eye offsets for a mono or stereo setup.
pub fn view_layout(config: &Config) -> Vec<(Viewport, f32)> {
    match config.stereo {
        None => vec![(Viewport::FULL, 0.0)],
        Some(stereo) => {
            let half = stereo.eye_separation / 2.0;
            vec![(Viewport::LEFT_HALF, -half), (Viewport::RIGHT_HALF, half)]
        }
    }
}

pub fn camera_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("camera_bind_group_layout"),
    })
}

#[derive(Debug)]
pub struct Context {
    pub(crate) window: Arc<Window>,
    pub(crate) depth_view: wgpu::TextureView,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub clear_colour: wgpu::Color,
    pub camera: Camera,
    pub views: Vec<ViewResources>,
    pub camera_bind_group_layout: wgpu::BindGroupLayout,
    pub assets: AssetSource,
    pub rotation_speed: cgmath::Vector2<f32>,
}

impl Context {
    pub async fn new(window: Arc<Window>, settings: &Config) -> anyhow::Result<Self> {
        let size = window.inner_size();

        log::info!("WGPU setup");
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            #[cfg(not(target_arch = "wasm32"))]
            backends: wgpu::Backends::PRIMARY,
            #[cfg(target_arch = "wasm32")]
            backends: wgpu::Backends::GL,
            ..wgpu::InstanceDescriptor::new_without_display_handle()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("device and queue");
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                // WebGL doesn't support all of wgpu's features
                required_limits: if cfg!(target_arch = "wasm32") {
                    wgpu::Limits::downlevel_webgl2_defaults()
                } else {
                    wgpu::Limits::default()
                },
                ..Default::default()
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = pick_surface_format(&surface_caps.formats)?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps
                .present_modes
                .first()
                .copied()
                .unwrap_or(wgpu::PresentMode::Fifo),
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        let camera = Camera::from(&settings.camera);
        let camera_bind_group_layout = camera_bind_group_layout(&device);

        let views = view_layout(settings)
            .into_iter()
            .map(|(viewport, eye_offset)| {
                let (width, height) = viewport.pixel_size(config.width, config.height);
                let projection = Projection::new(
                    width,
                    height,
                    settings.camera.fovy,
                    settings.camera.znear,
                    settings.camera.zfar,
                );
                let mut uniform = CameraUniform::new();
                uniform.update_view_proj(&camera.eye(eye_offset), &projection);

                let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Camera Buffer"),
                    contents: bytemuck::cast_slice(&[uniform]),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &camera_bind_group_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("camera_bind_group"),
                });
                ViewResources {
                    viewport,
                    eye_offset,
                    projection,
                    uniform,
                    buffer,
                    bind_group,
                }
            })
            .collect();

        let depth_view = texture::create_depth_view(&device, config.width, config.height);

        Ok(Self {
            window,
            depth_view,
            surface,
            device,
            queue,
            config,
            clear_colour: settings.clear_colour,
            camera,
            views,
            camera_bind_group_layout,
            assets: settings.assets.clone(),
            rotation_speed: settings.rotation_speed,
        })
    }

    /// Reconfigure the surface and everything sized after it.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = texture::create_depth_view(&self.device, width, height);
        for view in self.views.iter_mut() {
            let (w, h) = view.viewport.pixel_size(width, height);
            view.projection.resize(w, h);
        }
    }

    /// Recompute and upload every view's camera uniform.
    pub fn write_views(&mut self) {
        for view in self.views.iter_mut() {
            view.uniform
                .update_view_proj(&self.camera.eye(view.eye_offset), &view.projection);
            self.queue
                .write_buffer(&view.buffer, 0, bytemuck::cast_slice(&[view.uniform]));
        }
    }
}

/// First sRGB format the surface supports, else its first format.
///
/// The shaders output linear colour and rely on an sRGB surface for encoding.
pub fn pick_surface_format(
    formats: &[wgpu::TextureFormat],
) -> anyhow::Result<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first().copied())
        .ok_or_else(|| anyhow::anyhow!("The surface reports no supported texture formats"))
}

/// What an async flow constructor needs to create GPU resources and fetch assets.
#[derive(Clone, Debug)]
pub struct InitContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub format: wgpu::TextureFormat,
    pub camera_bind_group_layout: wgpu::BindGroupLayout,
    pub assets: AssetSource,
    pub rotation_speed: cgmath::Vector2<f32>,
}

impl From<&Context> for InitContext {
    fn from(ctx: &Context) -> Self {
        // wgpu handles are reference counted, cloning only clones the handle
        Self {
            device: ctx.device.clone(),
            queue: ctx.queue.clone(),
            format: ctx.config.format,
            camera_bind_group_layout: ctx.camera_bind_group_layout.clone(),
            assets: ctx.assets.clone(),
            rotation_speed: ctx.rotation_speed,
        }
    }
}
