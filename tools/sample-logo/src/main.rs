use image::{ImageBuffer, Rgba};

/// Paints a synthetic logo for trying out the asset pipeline: a white
/// canvas, a blue square mark, and a gray wordmark bar below it that the
/// symbol crop should strip.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let width = 800u32;
    let height = 600u32;
    let mut img: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_pixel(width, height, Rgba([255, 255, 255, 255]));

    // Square mark, 200x200 at (300,150)
    let blue = Rgba([20, 60, 220, 255]);
    for y in 150..350 {
        for x in 300..500 {
            img.put_pixel(x, y, blue);
        }
    }

    // Wordmark bar under the mark
    let gray = Rgba([90, 90, 90, 255]);
    for y in 380..420 {
        for x in 250..550 {
            img.put_pixel(x, y, gray);
        }
    }

    let out = std::path::Path::new("muntadis_logo.png");
    img.save(out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
