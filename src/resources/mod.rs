use crate::{
    config::{AssetSource, Location},
    context::InitContext,
    data_structures::model::MeshData,
    error::AssetError,
    material::{MaterialRecipe, ShaderSources},
    pipelines::material::Material,
};

/**
 * This module contains all logic for loading models, textures and shader text
 * from an asset source. Every helper is a one-shot fetch: no retry, no caching.
 */
pub mod mesh;
pub mod texture;

pub use texture::download_texture;

/// Download raw bytes, failing with the URL and status on a non-success answer.
pub async fn fetch_binary(source: &AssetSource, path: &str) -> Result<Vec<u8>, AssetError> {
    let location = source.resolve(path)?;
    log::info!("Fetching {}", location);
    match location {
        Location::Url(url) => {
            let url_text = url.to_string();
            let http_error = |source| AssetError::Http {
                url: url_text.clone(),
                source,
            };
            let response = reqwest::get(url).await.map_err(http_error)?;
            let status = response.status();
            if !status.is_success() {
                log::error!("{} answered {}", url_text, status);
                return Err(AssetError::Status {
                    url: url_text,
                    status: status.as_u16(),
                });
            }
            let bytes = response.bytes().await.map_err(http_error)?;
            Ok(bytes.to_vec())
        }
        Location::File(file) => read_file(&file).await,
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_file(file: &std::path::Path) -> Result<Vec<u8>, AssetError> {
    tokio::fs::read(file).await.map_err(|source| AssetError::Io {
        path: file.display().to_string(),
        source,
    })
}

#[cfg(target_arch = "wasm32")]
async fn read_file(file: &std::path::Path) -> Result<Vec<u8>, AssetError> {
    Err(AssetError::Io {
        path: file.display().to_string(),
        source: std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "the browser can only fetch assets over HTTP",
        ),
    })
}

/// Download a text asset such as a shader source.
pub async fn download_text(source: &AssetSource, path: &str) -> Result<String, AssetError> {
    let data = fetch_binary(source, path).await?;
    String::from_utf8(data).map_err(|_| AssetError::Utf8 {
        path: path.to_string(),
    })
}

/// Resolve a URI found inside a model file relative to the model's own path.
pub fn sibling_path(model_path: &str, uri: &str) -> String {
    if uri.starts_with('/') {
        return uri.to_string();
    }
    match model_path.rfind('/') {
        Some(idx) => format!("{}{}", &model_path[..=idx], uri),
        None => uri.to_string(),
    }
}

/// Download a glTF/GLB model and read its mesh.
///
/// Buffers are taken from the GLB's binary chunk, decoded from base64 `data:`
/// URIs or fetched next to the model.
/// A scene without a mesh fails with [`AssetError::MeshNotFound`].
pub async fn load_duck(source: &AssetSource, path: &str) -> Result<MeshData, AssetError> {
    let data = fetch_binary(source, path).await?;
    let gltf = gltf::Gltf::from_slice(&data).map_err(|source| AssetError::Gltf {
        path: path.to_string(),
        source,
    })?;

    let mut buffer_data = Vec::new();
    for buffer in gltf.buffers() {
        match buffer.source() {
            gltf::buffer::Source::Bin => match gltf.blob.as_deref() {
                Some(blob) => buffer_data.push(blob.to_vec()),
                None => {
                    log::warn!("{} references a binary chunk it does not contain", path);
                    buffer_data.push(Vec::new());
                }
            },
            gltf::buffer::Source::Uri(uri) if uri.starts_with("data:") => {
                let embedded = gltf::buffer::Data::from_source(buffer.source(), None)
                    .map_err(|source| AssetError::Gltf {
                        path: path.to_string(),
                        source,
                    })?;
                buffer_data.push(embedded.0);
            }
            gltf::buffer::Source::Uri(uri) => {
                let bin = fetch_binary(source, &sibling_path(path, uri)).await?;
                buffer_data.push(bin);
            }
        }
    }

    let mesh = mesh::extract_mesh(&gltf.document, &buffer_data, path)?;
    log::info!("Loaded mesh {} from {}", mesh.name, path);
    Ok(mesh)
}

/// Assemble a recipe, download its shader pair and textures and build the material.
pub async fn new_material(
    ctx: &InitContext,
    recipe: &MaterialRecipe,
) -> Result<Material, AssetError> {
    let descriptor = recipe.assemble();

    let vertex = download_text(&ctx.assets, descriptor.shaders.vertex).await?;
    let fragment = download_text(&ctx.assets, descriptor.shaders.fragment).await?;
    let sources = ShaderSources::with_flags(&vertex, &fragment, &descriptor.flags);

    let albedo_map = match &descriptor.albedo_map {
        Some(path) => Some(download_texture(ctx, path, false).await?),
        None => None,
    };
    let normal_map = match &descriptor.normal_map {
        Some(path) => Some(download_texture(ctx, path, true).await?),
        None => None,
    };

    Ok(Material::new(ctx, descriptor, sources, albedo_map, normal_map))
}
