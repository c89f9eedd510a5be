use std::fs;
use std::path::PathBuf;

use brandgen::assets::logo;
use brandgen::config::BrandConfig;
use brandgen::font::BrandFont;

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("brandgen-tests")
        .join(format!("{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn logo_set_has_expected_files_at_double_resolution() {
    let dir = test_dir("logos");
    let brand = BrandConfig::default();
    let font = BrandFont::builtin();

    let written = logo::generate(&font, &brand, &dir).expect("logo generation");
    assert_eq!(written.len(), 10);

    for &(font_size, width, height) in &logo::TIERS {
        for variant in ["black", "white"] {
            let path = dir.join(format!("HOC-{}-{}px.png", variant, font_size));
            assert!(path.exists(), "missing {}", path.display());
            let img = image::open(&path).expect("decode png").to_rgba8();
            // Saved at 2x the nominal canvas, no downsample
            assert_eq!(img.width(), width * 2);
            assert_eq!(img.height(), height * 2);
        }
    }
}

#[test]
fn logo_monogram_lands_on_transparent_canvas() {
    let dir = test_dir("logos-pixels");
    let brand = BrandConfig::default();
    let font = BrandFont::builtin();

    logo::generate(&font, &brand, &dir).expect("logo generation");

    let img = image::open(dir.join("HOC-white-24px.png"))
        .unwrap()
        .to_rgba8();
    // Corners stay transparent, some glyph pixels are opaque white
    assert_eq!(img.get_pixel(0, 0)[3], 0);
    let lit = img
        .pixels()
        .filter(|p| p[3] > 0 && p[0] == 255 && p[1] == 255 && p[2] == 255)
        .count();
    assert!(lit > 0, "expected white glyph pixels");
}
