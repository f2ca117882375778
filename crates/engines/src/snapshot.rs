//! PNG snapshot writing for engine frames (feature `png`).

use crate::pixel::scene_to_rgba;
use image::{ImageBuffer, Rgba};
use silhouette_core::error::EngineError;
use silhouette_core::Engine;
use std::path::Path;

/// Renders the engine's current frame and writes it as a PNG.
///
/// The image format is chosen from the path extension; all failures
/// (encoding, filesystem) surface as `EngineError::Io`.
pub fn write_png(engine: &dyn Engine, path: &Path) -> Result<(), EngineError> {
    let width = engine.width() as u32;
    let height = engine.height() as u32;
    let buf = scene_to_rgba(engine);
    let image: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(width, height, buf)
        .ok_or_else(|| EngineError::Io("pixel buffer does not match viewport".to_string()))?;
    image.save(path).map_err(|e| EngineError::Io(e.to_string()))
}
