//! Source-over alpha compositing.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Scales `src` to exactly `width` x `height`, ignoring aspect ratio.
///
/// Returns a copy when the size already matches.
pub fn stretch_to(src: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if src.dimensions() == (width, height) {
        return src.clone();
    }
    imageops::resize(src, width, height, FilterType::Triangle)
}

/// Composites `src` onto `dest` pixel for pixel.
///
/// Both images must share dimensions; pixels beyond the smaller of the two
/// are left alone.
pub fn composite_over(dest: &mut RgbaImage, src: &RgbaImage) {
    for (dst_pixel, src_pixel) in dest.pixels_mut().zip(src.pixels()) {
        *dst_pixel = alpha_blend(*src_pixel, *dst_pixel);
    }
}

/// Alpha blends two RGBA pixels (source over destination).
pub fn alpha_blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    match src[3] {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    let blend = |s: u8, d: u8| -> u8 {
        let out = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        out.round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_source_replaces() {
        let mut dest = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
        let src = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 255, 255]));
        composite_over(&mut dest, &src);
        assert_eq!(dest.get_pixel(1, 1).0, [0, 0, 255, 255]);
    }

    #[test]
    fn transparent_source_keeps_destination() {
        let mut dest = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 0]));
        let src = RgbaImage::from_pixel(2, 2, Rgba([200, 200, 200, 0]));
        composite_over(&mut dest, &src);
        assert_eq!(dest.get_pixel(0, 0).0, [10, 20, 30, 0]);
    }

    #[test]
    fn half_transparent_blends() {
        let blended = alpha_blend(Rgba([0, 0, 255, 128]), Rgba([255, 0, 0, 255]));
        assert!(blended[0] > 100 && blended[0] < 155, "red halfway");
        assert!(blended[2] > 100 && blended[2] < 155, "blue halfway");
        assert_eq!(blended[3], 255);
    }

    #[test]
    fn blending_onto_transparent_keeps_source_color() {
        let blended = alpha_blend(Rgba([40, 80, 120, 100]), Rgba([0, 0, 0, 0]));
        assert_eq!(blended.0, [40, 80, 120, 100]);
    }

    #[test]
    fn stretch_matches_target_size() {
        let src = RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255]));
        let stretched = stretch_to(&src, 7, 3);
        assert_eq!(stretched.dimensions(), (7, 3));
        assert_eq!(stretched.get_pixel(3, 1).0, [9, 9, 9, 255]);

        let same = stretch_to(&src, 4, 4);
        assert_eq!(same, src);
    }
}
