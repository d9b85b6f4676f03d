use image::ImageFormat;
use std::path::Path;

use crate::error::Result;
use crate::github::GitHubClient;

/// Decodes the downloaded bytes and stores them as PNG at `path`.
pub fn store_avatar(bytes: &[u8], path: &Path) -> Result<()> {
    let decoded = image::load_from_memory(bytes)?;
    decoded.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Fetches and caches the avatar. Returns `false` when it could not be
/// downloaded or decoded; the card is then rendered without it.
pub async fn cache_avatar(github: &GitHubClient, url: &str, path: &Path) -> bool {
    let bytes = match github.download_avatar(url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Error downloading image: {}", e);
            return false;
        }
    };

    match store_avatar(&bytes, path) {
        Ok(()) => {
            tracing::debug!("Avatar written to {}", path.display());
            true
        }
        Err(e) => {
            tracing::warn!("Error decoding image: {}", e);
            false
        }
    }
}
