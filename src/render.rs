//! Pure rendering: size, label style and font in, RGB raster out.

use image::{Rgb, RgbImage};

use crate::config::Style;
use crate::fonts::FontHandle;

/// Label size in pixels for an icon of side `size`.
pub fn font_size(size: u32) -> u32 {
    (size / 8).max(12)
}

/// Top-left corner that centers a `w`x`h` box on a `size` square.
///
/// Floor division: odd remainders leave the box one pixel toward the top/left,
/// and boxes larger than the canvas overhang both edges.
pub fn placement(size: u32, w: i32, h: i32) -> (i32, i32) {
    let size = size as i32;
    ((size - w).div_euclid(2), (size - h).div_euclid(2))
}

/// Draw the label centered on a solid square.
pub fn render_icon(size: u32, style: &Style, font: &mut FontHandle) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(size, size, style.background);

    let mask = font.rasterize(&style.label, font_size(size));
    let Some(bounds) = mask.bounds() else {
        return canvas;
    };

    let (x, y) = placement(size, bounds.width(), bounds.height());
    let (dx, dy) = (x - bounds.left, y - bounds.top);

    for &(gx, gy, alpha) in mask.coverage() {
        let (px, py) = (gx + dx, gy + dy);
        if px < 0 || py < 0 || px >= size as i32 || py >= size as i32 {
            continue;
        }
        let pixel = canvas.get_pixel_mut(px as u32, py as u32);
        *pixel = blend(*pixel, style.foreground, alpha);
    }

    canvas
}

fn blend(dst: Rgb<u8>, src: Rgb<u8>, alpha: u8) -> Rgb<u8> {
    let a = alpha as u32;
    let mix = |d: u8, s: u8| ((d as u32 * (255 - a) + s as u32 * a) / 255) as u8;
    Rgb([mix(dst[0], src[0]), mix(dst[1], src[1]), mix(dst[2], src[2])])
}
