//! Material recipes and their assembly into shaders plus uniforms.
//!
//! A [`MaterialRecipe`] names a shading model and its parameters. Assembling it
//! is a pure mapping: it picks one of four fixed [`ShaderPair`]s, fills a
//! [`UniformSet`] and collects the [`ShaderFlag`]s for optional texture paths.
//! Downloading the sources and textures and building the GPU side happens in
//! [`crate::resources::new_material`].

use std::collections::BTreeMap;

use cgmath::{InnerSpace, Vector2, Vector3, Zero};

pub mod uniform;

pub use uniform::MaterialUniform;

/// Uniform names shared by the host and the WGSL sources.
pub mod names {
    pub const COLOR: &str = "color";
    pub const ALBEDO: &str = "albedo";
    pub const ROUGHNESS: &str = "roughness";
    pub const METALNESS: &str = "metalness";
    pub const LIGHT_DIRECTION: &str = "lightDirection";
    pub const LIGHT_INTENSITY: &str = "lightIntensity";
    pub const TEXTURE_REPEAT: &str = "textureRepeat";
    pub const ALBEDO_MAP: &str = "albedoMap";
    pub const NORMAL_MAP: &str = "normalMap";
}

/// A vertex source path plus a fragment source path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShaderPair {
    pub vertex: &'static str,
    pub fragment: &'static str,
}

impl ShaderPair {
    pub const PLAIN: ShaderPair = ShaderPair {
        vertex: "/shaders/basic.vert",
        fragment: "/shaders/plain.frag",
    };
    pub const LAMBERT: ShaderPair = ShaderPair {
        vertex: "/shaders/basic.vert",
        fragment: "/shaders/lambert.frag",
    };
    pub const PHONG: ShaderPair = ShaderPair {
        vertex: "/shaders/basic.vert",
        fragment: "/shaders/phong.frag",
    };
    pub const PHYSICAL: ShaderPair = ShaderPair {
        vertex: "/shaders/physical.vert",
        fragment: "/shaders/physical.frag",
    };
}

/// A directional light: where it shines and how bright it is per channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// Direction the light travels in, world space.
    pub direction: Vector3<f32>,
    pub intensity: Vector3<f32>,
}

impl DirectionalLight {
    pub fn new(direction: Vector3<f32>, intensity: Vector3<f32>) -> Self {
        Self {
            direction,
            intensity,
        }
    }

    /// Unit direction, or zero if the direction is zero.
    pub fn normalized_direction(&self) -> Vector3<f32> {
        if self.direction.is_zero() {
            self.direction
        } else {
            self.direction.normalize()
        }
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vector3::new(-1.0, -1.0, -1.0),
            intensity: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

/// Optional shader code paths, switched on by prepending a flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShaderFlag {
    AlbedoMap,
    NormalMap,
}

impl ShaderFlag {
    pub const ALL: [ShaderFlag; 2] = [ShaderFlag::AlbedoMap, ShaderFlag::NormalMap];

    pub fn name(&self) -> &'static str {
        match self {
            ShaderFlag::AlbedoMap => "USE_ALBEDO_MAP",
            ShaderFlag::NormalMap => "USE_NORMAL_MAP",
        }
    }
}

/// Which texture binding a texture uniform refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureSlot {
    Albedo,
    Normal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Texture(TextureSlot),
}

/// Named uniform values, ordered by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UniformSet(BTreeMap<&'static str, UniformValue>);

impl UniformSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, value: UniformValue) -> &mut Self {
        self.0.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &UniformValue)> {
        self.0.iter().map(|(name, value)| (*name, value))
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        match self.get(name) {
            Some(UniformValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn vec2(&self, name: &str) -> Option<[f32; 2]> {
        match self.get(name) {
            Some(UniformValue::Vec2(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn vec3(&self, name: &str) -> Option<[f32; 3]> {
        match self.get(name) {
            Some(UniformValue::Vec3(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn texture(&self, name: &str) -> Option<TextureSlot> {
        match self.get(name) {
            Some(UniformValue::Texture(slot)) => Some(*slot),
            _ => None,
        }
    }

    fn insert_light(&mut self, light: &DirectionalLight) {
        self.insert(
            names::LIGHT_DIRECTION,
            UniformValue::Vec3(light.normalized_direction().into()),
        );
        self.insert(
            names::LIGHT_INTENSITY,
            UniformValue::Vec3(light.intensity.into()),
        );
    }
}

/// Parameters of the physically based approximation.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicalParams {
    pub albedo: Vector3<f32>,
    pub roughness: f32,
    pub metalness: f32,
    pub light: DirectionalLight,
    pub albedo_map: Option<String>,
    pub normal_map: Option<String>,
    pub texture_repeat: Vector2<f32>,
}

impl Default for PhysicalParams {
    fn default() -> Self {
        Self {
            albedo: Vector3::new(1.0, 1.0, 1.0),
            roughness: 0.5,
            metalness: 0.0,
            light: DirectionalLight::default(),
            albedo_map: None,
            normal_map: None,
            texture_repeat: Vector2::new(1.0, 1.0),
        }
    }
}

impl PhysicalParams {
    pub fn with_albedo_map(mut self, path: &str) -> Self {
        self.albedo_map = Some(path.to_string());
        self
    }

    pub fn with_normal_map(mut self, path: &str) -> Self {
        self.normal_map = Some(path.to_string());
        self
    }

    pub fn with_texture_repeat(mut self, repeat: f32) -> Self {
        self.texture_repeat = Vector2::new(repeat, repeat);
        self
    }
}

/// A named set of shading parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum MaterialRecipe {
    /// Unlit single colour.
    Plain { color: Vector3<f32> },
    /// Diffuse only.
    Lambert {
        albedo: Vector3<f32>,
        light: DirectionalLight,
    },
    /// Diffuse plus a specular lobe whose sharpness follows `roughness`.
    Phong {
        albedo: Vector3<f32>,
        roughness: f32,
        light: DirectionalLight,
    },
    Physical(PhysicalParams),
}

/// Everything needed to build a material, minus the downloads.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialDescriptor {
    pub name: &'static str,
    pub shaders: ShaderPair,
    pub flags: Vec<ShaderFlag>,
    pub uniforms: UniformSet,
    pub albedo_map: Option<String>,
    pub normal_map: Option<String>,
}

impl MaterialRecipe {
    pub fn name(&self) -> &'static str {
        match self {
            MaterialRecipe::Plain { .. } => "plain",
            MaterialRecipe::Lambert { .. } => "lambert",
            MaterialRecipe::Phong { .. } => "phong",
            MaterialRecipe::Physical(_) => "physical",
        }
    }

    pub fn shaders(&self) -> ShaderPair {
        match self {
            MaterialRecipe::Plain { .. } => ShaderPair::PLAIN,
            MaterialRecipe::Lambert { .. } => ShaderPair::LAMBERT,
            MaterialRecipe::Phong { .. } => ShaderPair::PHONG,
            MaterialRecipe::Physical(_) => ShaderPair::PHYSICAL,
        }
    }

    /// Select the shader pair, build the uniform set and collect the flags.
    pub fn assemble(&self) -> MaterialDescriptor {
        let mut uniforms = UniformSet::new();
        let mut flags = Vec::new();
        let mut albedo_map = None;
        let mut normal_map = None;

        match self {
            MaterialRecipe::Plain { color } => {
                uniforms.insert(names::COLOR, UniformValue::Vec3((*color).into()));
            }
            MaterialRecipe::Lambert { albedo, light } => {
                uniforms.insert(names::ALBEDO, UniformValue::Vec3((*albedo).into()));
                uniforms.insert_light(light);
            }
            MaterialRecipe::Phong {
                albedo,
                roughness,
                light,
            } => {
                uniforms.insert(names::ALBEDO, UniformValue::Vec3((*albedo).into()));
                uniforms.insert(names::ROUGHNESS, UniformValue::Float(*roughness));
                uniforms.insert_light(light);
            }
            MaterialRecipe::Physical(params) => {
                uniforms.insert(names::ALBEDO, UniformValue::Vec3(params.albedo.into()));
                uniforms.insert(names::ROUGHNESS, UniformValue::Float(params.roughness));
                uniforms.insert(names::METALNESS, UniformValue::Float(params.metalness));
                uniforms.insert(
                    names::TEXTURE_REPEAT,
                    UniformValue::Vec2(params.texture_repeat.into()),
                );
                uniforms.insert_light(&params.light);
                if let Some(path) = &params.albedo_map {
                    uniforms.insert(names::ALBEDO_MAP, UniformValue::Texture(TextureSlot::Albedo));
                    flags.push(ShaderFlag::AlbedoMap);
                    albedo_map = Some(path.clone());
                }
                if let Some(path) = &params.normal_map {
                    uniforms.insert(names::NORMAL_MAP, UniformValue::Texture(TextureSlot::Normal));
                    flags.push(ShaderFlag::NormalMap);
                    normal_map = Some(path.clone());
                }
            }
        }

        MaterialDescriptor {
            name: self.name(),
            shaders: self.shaders(),
            flags,
            uniforms,
            albedo_map,
            normal_map,
        }
    }
}

/// Vertex and fragment WGSL text ready for compilation.
#[derive(Clone, Debug, PartialEq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// Prepend the flag declarations to both sources.
    ///
    /// WGSL has no preprocessor, so every known flag becomes a module-scope
    /// `const` that is `true` when enabled and `false` otherwise. Shaders branch
    /// on these constants.
    pub fn with_flags(vertex: &str, fragment: &str, flags: &[ShaderFlag]) -> Self {
        let prelude = flag_prelude(flags);
        Self {
            vertex: format!("{}{}", prelude, vertex),
            fragment: format!("{}{}", prelude, fragment),
        }
    }
}

pub fn flag_prelude(flags: &[ShaderFlag]) -> String {
    ShaderFlag::ALL
        .iter()
        .map(|flag| {
            format!(
                "const {}: bool = {};\n",
                flag.name(),
                flags.contains(flag)
            )
        })
        .collect()
}
