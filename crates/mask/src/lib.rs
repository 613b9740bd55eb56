//! Background removal by color distance and content bounding-box cropping.
//!
//! The foreground/background split is a per-pixel Euclidean distance in RGB
//! space from a single sampled background color; the alpha it produces is
//! strictly binary (no partial transparency at anti-aliased edges).

use image::{Rgba, RgbaImage};
use thiserror::Error;
use types::BoundingBox;

#[derive(Debug, Error, PartialEq)]
pub enum MaskError {
    /// No pixel exceeded the distance threshold, so there is no content to
    /// crop to.
    #[error("no foreground pixels found (mask is empty)")]
    EmptyForeground,
    /// A crop ratio floored to a zero-height region.
    #[error("crop region is empty (ratio {0} of height {1} floors to zero rows)")]
    EmptySlice(f64, u32),
}

/// Row-major boolean grid marking foreground (true) vs background (false).
#[derive(Debug, Clone)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl Mask {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        // An x past the row end would otherwise alias into the next row.
        debug_assert!(x < self.width && y < self.height, "({x},{y}) out of bounds");
        self.data[(y * self.width + x) as usize]
    }

    /// Number of foreground pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|b| **b).count()
    }
}

/// Sample the background color from the top-left pixel. Assumes the corner
/// is pure background; a logo that touches (0,0) yields a wrong mask.
pub fn background_color(img: &RgbaImage) -> [u8; 3] {
    let Rgba([r, g, b, _]) = *img.get_pixel(0, 0);
    [r, g, b]
}

/// Classify every pixel by Euclidean RGB distance from `bg` (alpha is
/// ignored); foreground where distance > `threshold`.
pub fn foreground_mask(img: &RgbaImage, bg: [u8; 3], threshold: f64) -> Mask {
    let (width, height) = img.dimensions();
    let mut data = Vec::with_capacity((width * height) as usize);
    for pixel in img.pixels() {
        let Rgba([r, g, b, _]) = *pixel;
        let dr = r as f64 - bg[0] as f64;
        let dg = g as f64 - bg[1] as f64;
        let db = b as f64 - bg[2] as f64;
        let dist = (dr * dr + dg * dg + db * db).sqrt();
        data.push(dist > threshold);
    }
    Mask { width, height, data }
}

/// Rewrite the alpha channel from the mask: 255 on foreground, 0 on
/// background. RGB channels are left untouched; returns a new buffer.
pub fn apply_alpha(img: &RgbaImage, mask: &Mask) -> RgbaImage {
    let mut out = img.clone();
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        pixel.0[3] = if mask.get(x, y) { 255 } else { 0 };
    }
    out
}

/// Minimal half-open rectangle enclosing all foreground pixels.
pub fn bounding_box(mask: &Mask) -> Result<BoundingBox, MaskError> {
    let mut x0 = u32::MAX;
    let mut y0 = u32::MAX;
    let mut x1 = 0u32;
    let mut y1 = 0u32;
    let mut any = false;
    for y in 0..mask.height {
        for x in 0..mask.width {
            if mask.get(x, y) {
                any = true;
                x0 = x0.min(x);
                y0 = y0.min(y);
                x1 = x1.max(x + 1);
                y1 = y1.max(y + 1);
            }
        }
    }
    if !any {
        return Err(MaskError::EmptyForeground);
    }
    Ok(BoundingBox { x0, y0, x1, y1 })
}

/// Copy out the pixels inside `bbox`.
pub fn crop(img: &RgbaImage, bbox: BoundingBox) -> RgbaImage {
    let mut out = RgbaImage::new(bbox.width(), bbox.height());
    for y in 0..bbox.height() {
        for x in 0..bbox.width() {
            out.put_pixel(x, y, *img.get_pixel(bbox.x0 + x, bbox.y0 + y));
        }
    }
    out
}

/// Keep the top `ratio` fraction of the image's height (full width). The
/// kept height is `floor(height * ratio)`.
pub fn symbol_crop(img: &RgbaImage, ratio: f64) -> Result<RgbaImage, MaskError> {
    let (width, height) = img.dimensions();
    let kept = ((height as f64 * ratio) as u32).min(height);
    if kept == 0 || width == 0 {
        return Err(MaskError::EmptySlice(ratio, height));
    }
    Ok(crop(
        img,
        BoundingBox { x0: 0, y0: 0, x1: width, y1: kept },
    ))
}
