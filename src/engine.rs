//! Recolor engine: loads assets for a request, runs the layer pipeline and
//! presents the result.

use image::RgbaImage;

use crate::asset::{AssetLoader, AssetRef};
use crate::error::{ExportError, RenderError};
use crate::export::Export;
use crate::layer::{ImageOverlayConfig, LayerPipeline, RecolorConfig};
use crate::state::RenderRequest;
use crate::surface::{RenderTicket, Surface};

// ============================================================================
// RecolorEngine
// ============================================================================

/// Main recolor engine.
///
/// `RecolorEngine` owns an [`AssetLoader`] and the presentation [`Surface`].
/// State lives outside the engine; each render receives a fresh
/// [`RenderRequest`] snapshot.
///
/// # Example
///
/// ```
/// use duotone_renderer::{Catalog, MemoryLoader, RecolorEngine, RecolorState};
/// use image::{Rgba, RgbaImage};
///
/// let catalog = Catalog::default();
/// let mut loader = MemoryLoader::new(catalog.layout.clone());
/// loader.insert(
///     &catalog.solid_asset(),
///     RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255])),
/// );
///
/// let mut engine = RecolorEngine::new(loader);
/// let state = RecolorState::new(&catalog);
/// engine.render(&state.request(&catalog)).unwrap();
///
/// let shown = engine.presented().unwrap();
/// assert_eq!(shown.get_pixel(0, 0).0, [0xe6, 0x13, 0x0b, 255]);
/// ```
pub struct RecolorEngine<L> {
    loader: L,
    surface: Surface,
}

impl<L: AssetLoader> RecolorEngine<L> {
    /// Creates an engine with an empty surface.
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            surface: Surface::new(),
        }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The currently presented bitmap, if any render has succeeded.
    pub fn presented(&self) -> Option<&RgbaImage> {
        self.surface.image()
    }

    /// Loads the request's assets and computes the output bitmap without
    /// presenting it.
    ///
    /// The overlay is loaded before any pixels are computed, so a missing
    /// overlay fails the render as a whole.
    pub fn compose(&self, request: &RenderRequest) -> Result<RgbaImage, RenderError> {
        let base = self.load(&request.base)?;
        let overlay = request
            .overlay_asset()
            .map(|asset| self.load(asset))
            .transpose()?;

        let mut pipeline = LayerPipeline::new(RecolorConfig::new(request.color1, request.color2));
        if let Some(overlay) = overlay {
            pipeline = pipeline.with_overlay(ImageOverlayConfig::new(overlay));
        }
        Ok(pipeline.render(base))
    }

    /// Starts a render cycle, superseding any render still in flight.
    pub fn begin(&mut self) -> RenderTicket {
        self.surface.begin()
    }

    /// Finishes a render cycle started with [`begin`](Self::begin).
    ///
    /// On success, returns whether the image was presented (false when a
    /// newer render has started since). Errors are logged and returned; the
    /// surface keeps its previous image.
    pub fn finish(
        &mut self,
        ticket: RenderTicket,
        result: Result<RgbaImage, RenderError>,
    ) -> Result<bool, RenderError> {
        match result {
            Ok(image) => Ok(self.surface.present(ticket, image)),
            Err(err) => {
                log::error!("render {} failed: {err}", ticket.generation());
                Err(err)
            }
        }
    }

    /// Runs one full render cycle for `request` and presents the result.
    pub fn render(&mut self, request: &RenderRequest) -> Result<bool, RenderError> {
        let ticket = self.begin();
        log::debug!(
            "render {} started: {:?} {} with {} -> {}{}",
            ticket.generation(),
            request.mode,
            request.base,
            request.color1,
            request.color2,
            if request.overlay_enabled { " + overlay" } else { "" }
        );
        let result = self.compose(request);
        self.finish(ticket, result)
    }

    /// Encodes the presented bitmap as PNG named after `timestamp_millis`.
    pub fn export(&self, timestamp_millis: u64) -> Result<Export, ExportError> {
        let image = self.surface.image().ok_or(ExportError::NothingRendered)?;
        let export = Export::new(image, timestamp_millis)?;
        log::info!("exported {} ({} bytes)", export.file_name, export.bytes.len());
        Ok(export)
    }

    fn load(&self, asset: &AssetRef) -> Result<RgbaImage, RenderError> {
        self.loader
            .load(asset)
            .map_err(|source| RenderError::ResourceLoad {
                asset: asset.clone(),
                source,
            })
    }
}

// ============================================================================
// Tests
// ============================================================================
