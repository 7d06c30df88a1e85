//! Demo configuration.
//!
//! A [`Config`] is handed to [`crate::flow::run`] and seeds the [`crate::context::Context`]:
//! where assets come from, how the camera is set up, how fast the duck spins and
//! whether the scene is drawn once or once per eye.

use std::path::PathBuf;

use crate::error::AssetError;

/// Environment variable overriding the asset base (URL or directory).
pub const ASSETS_ENV: &str = "DUCK_ASSETS";

/// Where asset paths such as `/shaders/basic.vert` are fetched from.
#[derive(Clone, Debug, PartialEq)]
pub enum AssetSource {
    /// Fetch over HTTP relative to this base URL.
    Http(reqwest::Url),
    /// Read from this directory on disk.
    Directory(PathBuf),
}

/// A resolved asset location.
#[derive(Clone, Debug, PartialEq)]
pub enum Location {
    Url(reqwest::Url),
    File(PathBuf),
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Url(url) => write!(f, "{}", url),
            Location::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl AssetSource {
    /// Parse a base: anything starting with `http://` or `https://` is a URL,
    /// everything else a directory.
    pub fn parse(base: &str) -> anyhow::Result<Self> {
        if base.starts_with("http://") || base.starts_with("https://") {
            // Without the trailing slash `join` would replace the last segment.
            let base = if base.ends_with('/') {
                base.to_string()
            } else {
                format!("{}/", base)
            };
            Ok(AssetSource::Http(reqwest::Url::parse(&base)?))
        } else {
            Ok(AssetSource::Directory(PathBuf::from(base)))
        }
    }

    /// Resolve an asset path against this source.
    ///
    /// Paths follow browser semantics: a leading `/` is relative to the origin
    /// for HTTP sources and relative to the root directory for disk sources.
    /// Disk sources percent-decode the path first, so `my%20mesh.bin` names
    /// the file `my mesh.bin`.
    pub fn resolve(&self, path: &str) -> Result<Location, AssetError> {
        match self {
            AssetSource::Http(base) => base
                .join(path)
                .map(Location::Url)
                .map_err(|_| AssetError::InvalidUrl {
                    path: path.to_string(),
                }),
            AssetSource::Directory(root) => {
                let invalid = || AssetError::InvalidUrl {
                    path: path.to_string(),
                };
                let relative = urlencoding::decode(path.trim_start_matches('/'))
                    .map_err(|_| invalid())?;
                if relative.is_empty() {
                    return Err(invalid());
                }
                Ok(Location::File(root.join(&*relative)))
            }
        }
    }
}

/// Copy of the crate's `assets/` made by the build script.
#[cfg(not(target_arch = "wasm32"))]
pub const BUNDLED_ASSETS: &str = concat!(env!("OUT_DIR"), "/assets");

impl Default for AssetSource {
    #[cfg(not(target_arch = "wasm32"))]
    fn default() -> Self {
        AssetSource::Directory(PathBuf::from(BUNDLED_ASSETS))
    }

    #[cfg(target_arch = "wasm32")]
    fn default() -> Self {
        let origin = web_sys::window().and_then(|window| window.location().origin().ok());
        match origin.as_deref().map(AssetSource::parse) {
            Some(Ok(source)) => source,
            _ => {
                log::error!("Could not read the page origin, falling back to http://localhost/");
                AssetSource::Http(
                    reqwest::Url::parse("http://localhost/").expect("static URL is valid"),
                )
            }
        }
    }
}

/// Perspective camera settings.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub position: cgmath::Point3<f32>,
    pub target: cgmath::Point3<f32>,
    pub fovy: cgmath::Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: cgmath::Point3::new(0.0, 0.0, 400.0),
            target: cgmath::Point3::new(0.0, 0.0, 0.0),
            fovy: cgmath::Deg(75.0),
            znear: 0.1,
            zfar: 10000.0,
        }
    }
}

/// Side-by-side stereo rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StereoConfig {
    /// Distance between the two eyes in world units.
    pub eye_separation: f32,
}

impl Default for StereoConfig {
    fn default() -> Self {
        Self {
            eye_separation: 6.4,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub title: String,
    pub assets: AssetSource,
    pub camera: CameraConfig,
    pub clear_colour: wgpu::Color,
    /// Radians added to the mesh's x/y rotation every 1/60 s.
    pub rotation_speed: cgmath::Vector2<f32>,
    pub stereo: Option<StereoConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "duck".to_string(),
            assets: AssetSource::default(),
            camera: CameraConfig::default(),
            clear_colour: wgpu::Color::BLACK,
            rotation_speed: cgmath::Vector2::new(0.01, -0.01),
            stereo: None,
        }
    }
}

impl Config {
    /// Default config with the asset base taken from `DUCK_ASSETS` if set.
    pub fn from_env() -> anyhow::Result<Self> {
        #[allow(unused_mut)]
        let mut config = Self::default();
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(base) = std::env::var(ASSETS_ENV) {
            config.assets = AssetSource::parse(&base)?;
        }
        log::info!("Loading assets from {:?}", config.assets);
        Ok(config)
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_assets(mut self, assets: AssetSource) -> Self {
        self.assets = assets;
        self
    }

    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_clear_colour(mut self, clear_colour: wgpu::Color) -> Self {
        self.clear_colour = clear_colour;
        self
    }

    pub fn with_rotation_speed(mut self, x: f32, y: f32) -> Self {
        self.rotation_speed = cgmath::Vector2::new(x, y);
        self
    }

    pub fn with_stereo(mut self, stereo: StereoConfig) -> Self {
        self.stereo = Some(stereo);
        self
    }
}
