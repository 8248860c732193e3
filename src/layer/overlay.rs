//! Image overlay layer configuration and application.

use super::composite::{composite_over, stretch_to};
use super::{LayerEffect, RenderContext};
use image::RgbaImage;

// ============================================================================
// ImageOverlayConfig
// ============================================================================

/// Configuration for the image overlay.
///
/// The overlay is stretched to the full size of the image below it and
/// composited source-over, using its own alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageOverlayConfig {
    /// The overlay bitmap at its native size.
    pub image: RgbaImage,
}

impl ImageOverlayConfig {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }
}

impl LayerEffect for ImageOverlayConfig {
    fn name(&self) -> &'static str {
        "overlay"
    }

    fn transform(&self, ctx: &mut RenderContext) {
        let (width, height) = ctx.image.dimensions();
        if width == 0 || height == 0 {
            return;
        }
        let scaled = stretch_to(&self.image, width, height);
        composite_over(&mut ctx.image, &scaled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn overlay_is_stretched_to_base() {
        let base = RgbaImage::from_pixel(6, 4, Rgba([255, 0, 0, 255]));
        let overlay = ImageOverlayConfig::new(RgbaImage::from_pixel(2, 2, Rgba([0, 255, 0, 255])));

        let mut ctx = RenderContext::new(base);
        overlay.transform(&mut ctx);

        assert_eq!(ctx.image.dimensions(), (6, 4));
        assert_eq!(ctx.image.get_pixel(5, 3).0, [0, 255, 0, 255]);
    }

    #[test]
    fn transparent_regions_show_base() {
        let base = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
        let mut overlay_img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
        overlay_img.put_pixel(0, 0, Rgba([0, 0, 255, 255]));
        let overlay = ImageOverlayConfig::new(overlay_img);

        let mut ctx = RenderContext::new(base);
        overlay.transform(&mut ctx);

        assert_eq!(ctx.image.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_eq!(ctx.image.get_pixel(3, 3).0, [255, 0, 0, 255]);
    }
}
