//! Two-color recolor layer.

use super::{LayerEffect, RenderContext};
use crate::color::Color;
use image::RgbaImage;

// ============================================================================
// RecolorConfig
// ============================================================================

/// Configuration for the brightness-driven two-color remap.
///
/// Each opaque or translucent pixel's brightness (plain channel average) is
/// used as the weight of a linear interpolation: white maps to `color1`,
/// black maps to `color2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecolorConfig {
    /// Color that white source pixels map to.
    pub color1: Color,
    /// Color that black source pixels map to.
    pub color2: Color,
}

impl RecolorConfig {
    pub fn new(color1: Color, color2: Color) -> Self {
        Self { color1, color2 }
    }
}

impl LayerEffect for RecolorConfig {
    fn name(&self) -> &'static str {
        "recolor"
    }

    fn transform(&self, ctx: &mut RenderContext) {
        apply_recolor(&mut ctx.image, self);
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Recolors a bitmap in place.
///
/// Pixels with alpha 0 are left untouched in all four channels. Alpha is
/// never modified.
pub fn apply_recolor(image: &mut RgbaImage, config: &RecolorConfig) {
    let c1 = config.color1.channels();
    let c2 = config.color2.channels();

    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }

        let weight = brightness(r, g, b);
        pixel.0 = [
            interpolate_channel(c1[0], c2[0], weight),
            interpolate_channel(c1[1], c2[1], weight),
            interpolate_channel(c1[2], c2[2], weight),
            a,
        ];
    }
}

/// Simple channel average scaled to `[0, 1]`. Not perceptual luminance.
pub fn brightness(r: u8, g: u8, b: u8) -> f32 {
    (r as f32 + g as f32 + b as f32) / 3.0 / 255.0
}

/// Interpolates one channel: `c2 + (c1 - c2) * weight`.
///
/// The result is rounded half-up to the nearest integer and clamped to
/// `[0, 255]`.
pub fn interpolate_channel(c1: u8, c2: u8, weight: f32) -> u8 {
    let from = c2 as f32;
    let to = c1 as f32;
    quantize(from + (to - from) * weight)
}

fn quantize(value: f32) -> u8 {
    (value + 0.5).floor().clamp(0.0, 255.0) as u8
}

// ============================================================================
// Tests
// ============================================================================
