//! HTML Canvas rendering for WASM environments.
//!
//! This module provides [`CanvasRenderer`], which owns the selection state
//! and the engine and draws the presented bitmap into an HTML canvas
//! element. Menus, buttons and download links stay in JavaScript; they call
//! the setters below and then `renderToCanvas`.
//!
//! # Feature Flag
//!
//! This module is only available with the `canvas` feature enabled:
//!
//! ```toml
//! [dependencies]
//! duotone-renderer = { version = "0.1", features = ["canvas"] }
//! ```
//!
//! # Example (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { CanvasRenderer } from 'duotone-renderer';
//!
//! await init();
//!
//! const renderer = CanvasRenderer.withDefaultCatalog();
//! renderer.addSolidPng(basePng);
//! renderer.addOverlayPng(auraPng);
//! renderer.addPatternPng('00.png', twoTonePng);
//!
//! renderer.setColor1('e6130b');
//! renderer.renderToCanvas(document.getElementById('mainCanvas'));
//!
//! const download = renderer.exportPng();
//! saveAs(new Blob([download.bytes]), download.fileName);
//! ```

use wasm_bindgen::Clamped;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::asset::{AssetCategory, AssetRef, MemoryLoader};
use crate::catalog::Catalog;
use crate::color::Color;
use crate::engine::RecolorEngine;
use crate::export::Export;
use crate::profile::{Configurable, Profile};
use crate::state::{Mode, RecolorState};

// ============================================================================
// CanvasRenderer
// ============================================================================

/// Selection state plus engine, exposed to JavaScript via wasm-bindgen.
#[wasm_bindgen]
pub struct CanvasRenderer {
    catalog: Catalog,
    state: RecolorState,
    engine: RecolorEngine<MemoryLoader>,
}

#[wasm_bindgen]
impl CanvasRenderer {
    /// Creates a renderer from a catalog JSON string.
    #[wasm_bindgen(js_name = "fromCatalogJson")]
    pub fn from_catalog_json(json: &str) -> Result<CanvasRenderer, JsError> {
        let catalog = Catalog::from_json(json)
            .map_err(|e| JsError::new(&format!("Failed to parse catalog: {}", e)))?;
        Ok(Self::new(catalog))
    }

    /// Creates a renderer using the stock catalog.
    #[wasm_bindgen(js_name = "withDefaultCatalog")]
    pub fn with_default_catalog() -> CanvasRenderer {
        Self::new(Catalog::default())
    }

    // ---- Assets ----

    /// Registers the solid-mode base texture from encoded image bytes.
    #[wasm_bindgen(js_name = "addSolidPng")]
    pub fn add_solid_png(&mut self, png_data: &[u8]) -> Result<(), JsError> {
        let asset = self.catalog.solid_asset();
        self.add_png(&asset, png_data)
    }

    /// Registers the overlay texture from encoded image bytes.
    #[wasm_bindgen(js_name = "addOverlayPng")]
    pub fn add_overlay_png(&mut self, png_data: &[u8]) -> Result<(), JsError> {
        let asset = self.catalog.overlay_asset();
        self.add_png(&asset, png_data)
    }

    /// Registers a pattern texture under its catalog file name.
    #[wasm_bindgen(js_name = "addPatternPng")]
    pub fn add_pattern_png(&mut self, file: &str, png_data: &[u8]) -> Result<(), JsError> {
        let asset = AssetRef::new(AssetCategory::Pattern, file);
        self.add_png(&asset, png_data)
    }

    // ---- Catalog ----

    /// Returns the pattern catalog as `[{ name, file }, ...]`.
    #[wasm_bindgen(js_name = "patterns")]
    pub fn patterns(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.catalog.patterns)
            .map_err(|e| JsError::new(&format!("Failed to convert patterns: {}", e)))
    }

    /// Returns the color catalog as `[{ code, name }, ...]`.
    #[wasm_bindgen(js_name = "colors")]
    pub fn colors(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.catalog.colors)
            .map_err(|e| JsError::new(&format!("Failed to convert colors: {}", e)))
    }

    // ---- Selections ----

    /// Sets the mode: `"solid"` or `"patterned"`.
    ///
    /// Returns true if a re-render is needed.
    #[wasm_bindgen(js_name = "setMode")]
    pub fn set_mode(&mut self, mode: &str) -> Result<bool, JsError> {
        let mode = match mode {
            "solid" | "mono" => Mode::Solid,
            "patterned" | "pattern" => Mode::Patterned,
            other => return Err(JsError::new(&format!("Unknown mode: {}", other))),
        };
        Ok(self.state.set_mode(mode))
    }

    #[wasm_bindgen(js_name = "setColor1")]
    pub fn set_color1(&mut self, code: &str) -> Result<bool, JsError> {
        Ok(self.state.set_color1(parse_color(code)?))
    }

    #[wasm_bindgen(js_name = "setColor2")]
    pub fn set_color2(&mut self, code: &str) -> Result<bool, JsError> {
        Ok(self.state.set_color2(parse_color(code)?))
    }

    #[wasm_bindgen(js_name = "swapColors")]
    pub fn swap_colors(&mut self) -> bool {
        self.state.swap_colors()
    }

    #[wasm_bindgen(js_name = "setPattern")]
    pub fn set_pattern(&mut self, file: &str) -> bool {
        self.state.set_pattern(file)
    }

    #[wasm_bindgen(js_name = "setOverlayEnabled")]
    pub fn set_overlay_enabled(&mut self, enabled: bool) -> bool {
        self.state.set_overlay_enabled(enabled)
    }

    /// Current first color as a hex code.
    #[wasm_bindgen(js_name = "color1")]
    pub fn color1(&self) -> String {
        self.state.color1().to_hex()
    }

    /// Current stored second color as a hex code.
    #[wasm_bindgen(js_name = "color2")]
    pub fn color2(&self) -> String {
        self.state.stored_color2().to_hex()
    }

    // ---- Rendering ----

    /// Renders the current selections and draws the result to a canvas.
    ///
    /// On a load failure the canvas is left as it was and the error is
    /// returned.
    #[wasm_bindgen(js_name = "renderToCanvas")]
    pub fn render_to_canvas(&mut self, canvas: &HtmlCanvasElement) -> Result<(), JsError> {
        let request = self.state.request(&self.catalog);
        self.engine
            .render(&request)
            .map_err(|e| JsError::new(&e.to_string()))?;
        self.draw(canvas)
    }

    /// Draws the presented bitmap without re-rendering.
    pub fn draw(&self, canvas: &HtmlCanvasElement) -> Result<(), JsError> {
        let rendered = self
            .engine
            .presented()
            .ok_or_else(|| JsError::new("Nothing has been rendered yet"))?;

        let width = rendered.width();
        let height = rendered.height();

        // Resize canvas to match rendered size
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|_| JsError::new("Failed to get 2d context"))?
            .ok_or_else(|| JsError::new("Canvas 2d context is null"))?
            .dyn_into()
            .map_err(|_| JsError::new("Failed to cast to CanvasRenderingContext2d"))?;

        let image_data = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(rendered.as_raw().as_slice()),
            width,
            height,
        )
        .map_err(|_| JsError::new("Failed to create ImageData"))?;

        ctx.put_image_data(&image_data, 0.0, 0.0)
            .map_err(|_| JsError::new("Failed to put image data"))?;

        Ok(())
    }

    // ---- Export ----

    /// Encodes the presented bitmap as PNG, stamped with the current time.
    ///
    /// The returned download carries both the bytes and the matching file
    /// name.
    #[wasm_bindgen(js_name = "exportPng")]
    pub fn export_png(&self) -> Result<PngDownload, JsError> {
        self.engine
            .export(now_millis())
            .map(PngDownload::from)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    // ---- Profile Import/Export ----

    /// Exports the current selections as a JSON string.
    #[wasm_bindgen(js_name = "exportProfileJson")]
    pub fn export_profile_json(&self) -> Result<String, JsError> {
        self.state
            .export_profile()
            .to_json()
            .map_err(|e| JsError::new(&format!("Failed to serialize profile: {}", e)))
    }

    /// Imports selections from a JSON string. Returns true if a re-render is
    /// needed.
    #[wasm_bindgen(js_name = "importProfileJson")]
    pub fn import_profile_json(&mut self, json: &str) -> Result<bool, JsError> {
        let profile = Profile::from_json(json)
            .map_err(|e| JsError::new(&format!("Failed to parse profile: {}", e)))?;
        Ok(self.state.apply_profile(&profile))
    }
}

// ============================================================================
// PngDownload
// ============================================================================

/// An encoded export handed to JavaScript for download.
#[wasm_bindgen]
pub struct PngDownload {
    file_name: String,
    bytes: Vec<u8>,
}

#[wasm_bindgen]
impl PngDownload {
    /// Suggested file name, `export_<millis>.png`.
    #[wasm_bindgen(getter, js_name = "fileName")]
    pub fn file_name(&self) -> String {
        self.file_name.clone()
    }

    /// PNG bytes, exposed as a `Uint8Array`.
    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl From<Export> for PngDownload {
    fn from(export: Export) -> Self {
        Self {
            file_name: export.file_name,
            bytes: export.bytes,
        }
    }
}

impl CanvasRenderer {
    fn new(catalog: Catalog) -> Self {
        console_error_panic_hook::set_once();
        // A second renderer finds the logger already installed.
        let _ = console_log::init_with_level(log::Level::Info);

        let state = RecolorState::new(&catalog);
        let loader = MemoryLoader::new(catalog.layout.clone());
        Self {
            catalog,
            state,
            engine: RecolorEngine::new(loader),
        }
    }

    fn add_png(&mut self, asset: &AssetRef, png_data: &[u8]) -> Result<(), JsError> {
        self.engine
            .loader_mut()
            .insert_encoded(asset, png_data)
            .map_err(|e| JsError::new(&format!("Failed to decode {}: {}", asset, e)))
    }
}

fn parse_color(code: &str) -> Result<Color, JsError> {
    Color::from_hex(code).map_err(|e| JsError::new(&e.to_string()))
}

fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn download_keeps_name_and_bytes_together() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([230, 19, 11, 255]));
        let export = Export::new(&image, 1_700_000_000_456).unwrap();
        let bytes = export.bytes.clone();

        let download = PngDownload::from(export);
        assert_eq!(download.file_name(), "export_1700000000456.png");
        assert_eq!(download.bytes(), bytes);
    }
}
