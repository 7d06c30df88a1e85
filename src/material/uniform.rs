use crate::material::{UniformSet, names};

/// GPU layout shared by every fragment shader's `material` binding.
///
/// Mirrors the WGSL struct in `assets/shaders/*.frag`; every `vec3` is padded
/// to 16 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub albedo: [f32; 4],
    pub light_direction: [f32; 4],
    pub light_intensity: [f32; 4],
    pub texture_repeat: [f32; 2],
    pub roughness: f32,
    pub metalness: f32,
}

impl MaterialUniform {
    /// Write a uniform set into the fixed layout.
    ///
    /// Plain materials store `color` in the albedo slot. Absent entries stay
    /// zero except `textureRepeat`, which defaults to one.
    pub fn pack(uniforms: &UniformSet) -> Self {
        let pad = |v: [f32; 3]| [v[0], v[1], v[2], 0.0];
        let albedo = uniforms
            .vec3(names::ALBEDO)
            .or_else(|| uniforms.vec3(names::COLOR))
            .unwrap_or_default();

        for (name, value) in uniforms.iter() {
            let known = matches!(
                name,
                names::COLOR
                    | names::ALBEDO
                    | names::ROUGHNESS
                    | names::METALNESS
                    | names::LIGHT_DIRECTION
                    | names::LIGHT_INTENSITY
                    | names::TEXTURE_REPEAT
                    | names::ALBEDO_MAP
                    | names::NORMAL_MAP
            );
            if !known {
                log::warn!("Uniform {} ({:?}) has no slot in the material layout", name, value);
            }
        }

        Self {
            albedo: {
                let mut albedo = pad(albedo);
                albedo[3] = 1.0;
                albedo
            },
            light_direction: pad(uniforms.vec3(names::LIGHT_DIRECTION).unwrap_or_default()),
            light_intensity: pad(uniforms.vec3(names::LIGHT_INTENSITY).unwrap_or_default()),
            texture_repeat: uniforms.vec2(names::TEXTURE_REPEAT).unwrap_or([1.0, 1.0]),
            roughness: uniforms.float(names::ROUGHNESS).unwrap_or_default(),
            metalness: uniforms.float(names::METALNESS).unwrap_or_default(),
        }
    }
}
