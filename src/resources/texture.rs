use crate::{
    context::InitContext, data_structures::texture::Texture, error::AssetError,
    resources::fetch_binary,
};

/// File extension of an asset path, used as a decoding hint.
pub fn extension(path: &str) -> Option<&str> {
    let file_name = path.rsplit('/').next()?;
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

/// Download an image and upload it as a texture.
///
/// Colour maps are stored as sRGB, normal maps as linear data.
pub async fn download_texture(
    ctx: &InitContext,
    path: &str,
    is_normal_map: bool,
) -> Result<Texture, AssetError> {
    let data = fetch_binary(&ctx.assets, path).await?;
    Texture::from_bytes(
        &ctx.device,
        &ctx.queue,
        &data,
        path,
        extension(path),
        is_normal_map,
    )
    .map_err(|source| AssetError::Image {
        path: path.to_string(),
        source,
    })
}
