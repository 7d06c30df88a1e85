//! Errors raised while fetching and decoding demo assets.

/// Failure while loading a model, texture or shader source.
///
/// Every variant names the path or URL that failed so a demo can report it
/// before giving up.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Failed to download: url={url}, status={status}")]
    Status {
        url: String,
        status: u16,
    },

    #[error("Failed to download: url={url}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read asset: path={path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Asset is not valid UTF-8 text: path={path}")]
    Utf8 { path: String },

    #[error("Failed to load GLTF: path={path}")]
    Gltf {
        path: String,
        #[source]
        source: gltf::Error,
    },

    #[error("Failed to decode image: path={path}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Mesh not found in scene graph: path={path}")]
    MeshNotFound { path: String },

    #[error("Missing position data for mesh: {mesh}")]
    MissingPositions { mesh: String },

    #[error("Cannot build a URL for asset: path={path}")]
    InvalidUrl { path: String },
}

impl AssetError {
    /// The HTTP status carried by this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AssetError::Status { status, .. } => Some(*status),
            AssetError::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
