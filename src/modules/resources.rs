use std::path::PathBuf;

use macroquad::prelude::*;

/// Resolves a bundled resource to its on-disk location, `res/<kind>/<name>`.
pub fn resource_path(kind: &str, name: &str) -> PathBuf {
    ["res", kind, name].iter().collect()
}

/// Loads an image resource. Callers treat a miss as fatal; there is no
/// fallback art.
pub async fn load_image(kind: &str, name: &str) -> Result<Texture2D, macroquad::Error> {
    let path = resource_path(kind, name);
    load_texture(&path.to_string_lossy()).await
}
