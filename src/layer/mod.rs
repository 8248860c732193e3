//! Layer infrastructure for the recolor pipeline.
//!
//! A render is a base bitmap flowing through an ordered list of layers. Each
//! layer config implements [`LayerEffect`] and transforms the image held in
//! a [`RenderContext`].
//!
//! # Pipeline
//!
//! ```text
//! Base Image
//!     │
//!     ▼
//! ┌─────────┐
//! │ Recolor │ ◄── always applied
//! └────┬────┘
//!      │
//!      ▼
//! ┌─────────┐
//! │ Overlay │ ◄── solid mode with overlay enabled
//! └────┬────┘
//!      │
//!      ▼
//!   Output
//! ```

pub mod composite;
pub mod overlay;
pub mod recolor;

pub use overlay::ImageOverlayConfig;
pub use recolor::RecolorConfig;

use image::RgbaImage;

// ============================================================================
// Render Context
// ============================================================================

/// Context that flows through the rendering pipeline.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// The current image being processed through the pipeline.
    pub image: RgbaImage,
}

impl RenderContext {
    /// Creates a new render context with the given base image.
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Consumes the context, returning the processed image.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

// ============================================================================
// Layer Trait
// ============================================================================

/// Trait for layer configurations that know how to apply themselves.
///
/// Implementations must keep the image dimensions unchanged.
pub trait LayerEffect {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Transform the image in the render context.
    fn transform(&self, ctx: &mut RenderContext);
}

// ============================================================================
// Layer Pipeline
// ============================================================================

/// The ordered layers for one render.
pub struct LayerPipeline {
    /// Brightness remap (always present).
    pub recolor: RecolorConfig,

    /// Overlay composited last, if any.
    pub overlay: Option<ImageOverlayConfig>,
}

impl LayerPipeline {
    pub fn new(recolor: RecolorConfig) -> Self {
        Self {
            recolor,
            overlay: None,
        }
    }

    /// Adds an overlay layer.
    pub fn with_overlay(mut self, overlay: ImageOverlayConfig) -> Self {
        self.overlay = Some(overlay);
        self
    }

    /// Returns the active layers in application order.
    pub fn layers(&self) -> Vec<&dyn LayerEffect> {
        let mut layers: Vec<&dyn LayerEffect> = vec![&self.recolor];
        if let Some(overlay) = &self.overlay {
            layers.push(overlay);
        }
        layers
    }

    /// Renders a base image through every layer.
    ///
    /// The returned image always has the base image's dimensions.
    pub fn render(&self, base: RgbaImage) -> RgbaImage {
        let mut ctx = RenderContext::new(base);
        for layer in self.layers() {
            log::trace!(
                "applying {} layer to {}x{}",
                layer.name(),
                ctx.image.width(),
                ctx.image.height()
            );
            layer.transform(&mut ctx);
        }
        ctx.into_image()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use image::Rgba;

    #[test]
    fn pipeline_without_overlay_only_recolors() {
        let pipeline =
            LayerPipeline::new(RecolorConfig::new(Color::new(230, 19, 11), Color::BLACK));
        assert_eq!(pipeline.layers().len(), 1);

        let out = pipeline.render(RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255])));
        assert_eq!(out.get_pixel(2, 2).0, [230, 19, 11, 255]);
    }

    #[test]
    fn overlay_applies_after_recolor() {
        let mut overlay_img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        overlay_img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));

        let pipeline = LayerPipeline::new(RecolorConfig::new(Color::new(0, 0, 200), Color::BLACK))
            .with_overlay(ImageOverlayConfig::new(overlay_img));
        assert_eq!(pipeline.layers().len(), 2);

        let out = pipeline.render(RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255])));
        // Overlay pixel is not recolored.
        assert_eq!(out.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(out.get_pixel(1, 1).0, [0, 0, 200, 255]);
    }

    #[test]
    fn odd_sizes_keep_dimensions() {
        let pipeline = LayerPipeline::new(RecolorConfig::new(Color::WHITE, Color::BLACK))
            .with_overlay(ImageOverlayConfig::new(RgbaImage::from_pixel(
                4,
                4,
                Rgba([1, 2, 3, 128]),
            )));
        for (w, h) in [(1, 1), (5, 3), (7, 9)] {
            let out = pipeline.render(RgbaImage::new(w, h));
            assert_eq!(out.dimensions(), (w, h));
        }
    }
}
