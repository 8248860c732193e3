//! PNG export of the presented surface.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::ExportError;

/// An encoded image ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Suggested file name, `export_<unix millis>.png`.
    pub file_name: String,
    /// PNG-encoded bytes.
    pub bytes: Vec<u8>,
}

impl Export {
    /// Encodes an image and names it after the given timestamp.
    pub fn new(image: &RgbaImage, timestamp_millis: u64) -> Result<Self, ExportError> {
        Ok(Self {
            file_name: export_file_name(timestamp_millis),
            bytes: encode_png(image)?,
        })
    }

    /// Writes the export into `dir` under its file name.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        log::info!("wrote {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

/// Encodes an RGBA bitmap as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// File name for an export taken at `timestamp_millis` since the Unix epoch.
pub fn export_file_name(timestamp_millis: u64) -> String {
    format!("export_{timestamp_millis}.png")
}

/// Milliseconds since the Unix epoch, or 0 if the clock is before it.
///
/// Not available on `wasm32-unknown-unknown`, where the browser clock
/// must be passed in instead.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
