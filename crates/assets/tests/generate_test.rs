use assets::{
    generate, Options, ANDROID_CHROME_192, ANDROID_CHROME_512, APPLE_TOUCH_ICON, FAVICON,
    LOGO_TRANSPARENT,
};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// 800x600 white canvas with a solid blue 200x200 square at (300,150).
fn write_scenario_logo(dir: &Path) -> PathBuf {
    let mut img = RgbaImage::from_pixel(800, 600, Rgba([255, 255, 255, 255]));
    for y in 150..350 {
        for x in 300..500 {
            img.put_pixel(x, y, Rgba([0, 0, 255, 255]));
        }
    }
    let path = dir.join("logo.png");
    img.save(&path).unwrap();
    path
}

#[test]
fn test_generate_emits_all_five_assets() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_scenario_logo(tmp.path());
    let out_dir = tmp.path().join("public");

    let written = generate(&input, &out_dir, &Options::default()).unwrap();

    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_owned())
        .collect();
    assert_eq!(
        names,
        [
            LOGO_TRANSPARENT,
            FAVICON,
            APPLE_TOUCH_ICON,
            ANDROID_CHROME_192,
            ANDROID_CHROME_512,
        ]
    );
    for path in &written {
        assert!(path.exists(), "missing {}", path.display());
    }

    assert_eq!(
        image::image_dimensions(out_dir.join(LOGO_TRANSPARENT)).unwrap(),
        (200, 200)
    );
    assert_eq!(
        image::image_dimensions(out_dir.join(APPLE_TOUCH_ICON)).unwrap(),
        (180, 180)
    );
    assert_eq!(
        image::image_dimensions(out_dir.join(ANDROID_CHROME_192)).unwrap(),
        (192, 192)
    );
    assert_eq!(
        image::image_dimensions(out_dir.join(ANDROID_CHROME_512)).unwrap(),
        (512, 512)
    );
}

#[test]
fn test_favicon_has_three_resolutions() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_scenario_logo(tmp.path());
    let out_dir = tmp.path().join("public");

    generate(&input, &out_dir, &Options::default()).unwrap();

    let file = std::fs::File::open(out_dir.join(FAVICON)).unwrap();
    let icon_dir = ico::IconDir::read(file).unwrap();
    let mut sizes: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, [16, 32, 48]);
}

#[test]
fn test_logo_is_transparent_outside_content() {
    let tmp = tempfile::tempdir().unwrap();
    let mut img = RgbaImage::from_pixel(20, 20, Rgba([255, 255, 255, 255]));
    // Two foreground pixels at opposite corners of the content region.
    img.put_pixel(5, 5, Rgba([0, 0, 0, 255]));
    img.put_pixel(10, 12, Rgba([0, 0, 0, 255]));
    let input = tmp.path().join("logo.png");
    img.save(&input).unwrap();
    let out_dir = tmp.path().join("public");

    generate(&input, &out_dir, &Options::default()).unwrap();

    let logo = image::open(out_dir.join(LOGO_TRANSPARENT)).unwrap().to_rgba8();
    assert_eq!(logo.dimensions(), (6, 8));
    assert_eq!(*logo.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
    assert_eq!(*logo.get_pixel(5, 7), Rgba([0, 0, 0, 255]));
    // White interior keeps its RGB but loses opacity.
    assert_eq!(*logo.get_pixel(3, 3), Rgba([255, 255, 255, 0]));
}

#[test]
fn test_generate_twice_is_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_scenario_logo(tmp.path());
    let out_dir = tmp.path().join("public");

    let written = generate(&input, &out_dir, &Options::default()).unwrap();
    let first: Vec<Vec<u8>> = written.iter().map(|p| std::fs::read(p).unwrap()).collect();

    let written_again = generate(&input, &out_dir, &Options::default()).unwrap();
    assert_eq!(written, written_again);
    for (path, bytes) in written_again.iter().zip(&first) {
        assert_eq!(&std::fs::read(path).unwrap(), bytes, "{} changed", path.display());
    }
}

#[test]
fn test_generate_missing_input_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path().join("public");
    let err = generate(&tmp.path().join("nope.png"), &out_dir, &Options::default());
    assert!(err.is_err());
    assert!(!out_dir.exists());
}

#[test]
fn test_generate_blank_image_reports_empty_foreground() {
    let tmp = tempfile::tempdir().unwrap();
    let img = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
    let input = tmp.path().join("blank.png");
    img.save(&input).unwrap();
    let out_dir = tmp.path().join("public");

    let err = generate(&input, &out_dir, &Options::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("no logo content"));
    assert!(!out_dir.exists());
}
