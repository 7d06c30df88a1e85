//! GPU side of a material: pipeline, uniform buffer and texture bindings.

use wgpu::util::DeviceExt;

use crate::{
    context::InitContext,
    data_structures::{
        instance::InstanceRaw,
        model::{ModelVertex, Vertex},
        texture::{self, Texture},
    },
    material::{MaterialDescriptor, MaterialUniform, ShaderSources},
    pipelines::mk_render_pipeline,
};

/// Bind group 1: uniforms at 0, albedo texture/sampler at 1/2, normal texture/sampler at 3/4.
pub fn material_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let texture_entry = |binding| wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    };
    let sampler_entry = |binding| wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    };
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            texture_entry(1),
            sampler_entry(2),
            texture_entry(3),
            sampler_entry(4),
        ],
        label: Some("material_bind_group_layout"),
    })
}

/// A compiled shader pair with its uniforms and textures bound.
pub struct Material {
    pub name: String,
    pub descriptor: MaterialDescriptor,
    pub uniform: MaterialUniform,
    pub buffer: wgpu::Buffer,
    pub pipeline: wgpu::RenderPipeline,
    pub bind_group: wgpu::BindGroup,
}

impl std::fmt::Debug for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Material")
            .field("name", &self.name)
            .field("uniform", &self.uniform)
            .finish()
    }
}

impl Material {
    /// Compile both sources and bind the uniforms and textures.
    ///
    /// Missing maps are replaced by 1x1 fallbacks (white albedo, flat normal);
    /// the flags prepended to the sources decide whether they are sampled.
    pub fn new(
        ctx: &InitContext,
        descriptor: MaterialDescriptor,
        sources: ShaderSources,
        albedo_map: Option<Texture>,
        normal_map: Option<Texture>,
    ) -> Self {
        let device = &ctx.device;
        let name = descriptor.name.to_string();

        let vertex_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(descriptor.shaders.vertex),
            source: wgpu::ShaderSource::Wgsl(sources.vertex.into()),
        });
        let fragment_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(descriptor.shaders.fragment),
            source: wgpu::ShaderSource::Wgsl(sources.fragment.into()),
        });

        let uniform = MaterialUniform::pack(&descriptor.uniforms);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} material buffer", name)),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let albedo_map = albedo_map.unwrap_or_else(|| {
            Texture::create_solid(device, &ctx.queue, texture::WHITE, "default albedo map", false)
        });
        let normal_map = normal_map.unwrap_or_else(|| {
            Texture::create_solid(
                device,
                &ctx.queue,
                texture::FLAT_NORMAL,
                "default normal map",
                true,
            )
        });

        let layout = material_layout(device);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&albedo_map.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&albedo_map.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::TextureView(&normal_map.view),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: wgpu::BindingResource::Sampler(&normal_map.sampler),
                },
            ],
            label: Some(&format!("{} material bind group", name)),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{} pipeline layout", name)),
            bind_group_layouts: &[Some(&ctx.camera_bind_group_layout), Some(&layout)],
            ..Default::default()
        });

        let pipeline = mk_render_pipeline(
            device,
            &pipeline_layout,
            ctx.format,
            Some(wgpu::BlendState::REPLACE),
            Some(Texture::DEPTH_FORMAT),
            &[ModelVertex::desc(), InstanceRaw::desc()],
            &vertex_shader,
            &fragment_shader,
            &format!("{} pipeline", name),
        );

        log::info!("Built {} material with flags {:?}", name, descriptor.flags);

        Self {
            name,
            descriptor,
            uniform,
            buffer,
            pipeline,
            bind_group,
        }
    }
}
