//! Loading the source logo and emitting the derived icon assets.

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::RgbaImage;
use std::fs::File;
use std::path::{Path, PathBuf};

pub const LOGO_TRANSPARENT: &str = "logo_transparent.png";
pub const FAVICON: &str = "favicon.ico";
pub const APPLE_TOUCH_ICON: &str = "apple-touch-icon.png";
pub const ANDROID_CHROME_192: &str = "android-chrome-192.png";
pub const ANDROID_CHROME_512: &str = "android-chrome-512.png";

pub const FAVICON_SIZES: [u32; 3] = [16, 32, 48];
pub const APPLE_TOUCH_SIZE: u32 = 180;

/// Tunables the original script hard-coded.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Euclidean RGB distance above which a pixel counts as foreground.
    pub threshold: f64,
    /// Fraction of the cropped logo's height kept as the symbol region.
    pub symbol_ratio: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self { threshold: 30.0, symbol_ratio: 0.7 }
    }
}

/// Decode an image file and normalize it to an RGBA8 buffer.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(img.to_rgba8())
}

/// Resize to exactly `width`x`height` with Lanczos3. Aspect ratio is not
/// preserved; callers pass square targets for square icons.
fn resize_exact(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    image::imageops::resize(img, width, height, FilterType::Lanczos3)
}

/// Write `img` as a PNG at its native size.
pub fn write_png(out_dir: &Path, name: &str, img: &RgbaImage) -> Result<PathBuf> {
    let path = out_dir.join(name);
    img.save(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Resize to `size`x`size` and write as PNG.
pub fn write_scaled_png(out_dir: &Path, name: &str, img: &RgbaImage, size: u32) -> Result<PathBuf> {
    write_png(out_dir, name, &resize_exact(img, size, size))
}

/// Write a multi-resolution ICO with one entry per size in `FAVICON_SIZES`.
pub fn write_favicon(out_dir: &Path, img: &RgbaImage) -> Result<PathBuf> {
    let path = out_dir.join(FAVICON);
    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    for size in FAVICON_SIZES {
        let scaled = resize_exact(img, size, size);
        let entry = ico::IconImage::from_rgba_data(size, size, scaled.into_raw());
        icon_dir.add_entry(ico::IconDirEntry::encode(&entry)?);
    }
    let file =
        File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    icon_dir.write(file)?;
    Ok(path)
}

/// Run the whole pipeline: load the logo, make the background transparent,
/// crop to content, take the symbol region, and emit all five assets into
/// `out_dir` (created if absent, existing files overwritten). Returns the
/// written paths in emit order.
pub fn generate(input: &Path, out_dir: &Path, opts: &Options) -> Result<Vec<PathBuf>> {
    let img = load_rgba(input)?;

    let bg = mask::background_color(&img);
    let fg = mask::foreground_mask(&img, bg, opts.threshold);
    let transparent = mask::apply_alpha(&img, &fg);
    let bbox = mask::bounding_box(&fg)
        .with_context(|| format!("no logo content found in {}", input.display()))?;
    let cropped = mask::crop(&transparent, bbox);
    let symbol = mask::symbol_crop(&cropped, opts.symbol_ratio)?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    Ok(vec![
        write_png(out_dir, LOGO_TRANSPARENT, &cropped)?,
        write_favicon(out_dir, &symbol)?,
        write_scaled_png(out_dir, APPLE_TOUCH_ICON, &symbol, APPLE_TOUCH_SIZE)?,
        write_scaled_png(out_dir, ANDROID_CHROME_192, &symbol, 192)?,
        write_scaled_png(out_dir, ANDROID_CHROME_512, &symbol, 512)?,
    ])
}
