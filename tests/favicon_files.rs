use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

use brandgen::assets::favicon;
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
fn favicon_set_has_expected_files_and_dimensions() {
    let dir = test_dir("favicons");
    let brand = BrandConfig::default();
    // Builtin face keeps the test independent of installed system fonts.
    let font = BrandFont::builtin();

    let written = favicon::generate(&font, &brand, &dir).expect("favicon generation");
    assert_eq!(written.len(), 10);

    // 8 transparent favicons, exact filenames and pixel dimensions
    for variant in ["white", "black"] {
        for size in [16u32, 32, 48, 180] {
            let path = dir.join(format!("favicon-{}-{}.png", variant, size));
            assert!(path.exists(), "missing {}", path.display());
            let img = image::open(&path).expect("decode png").to_rgba8();
            assert_eq!(img.width(), size);
            assert_eq!(img.height(), size);
        }
    }

    // Apple touch icons at 180 with solid backgrounds
    for name in ["apple-touch-icon-dark.png", "apple-touch-icon-light.png"] {
        let img = image::open(dir.join(name)).expect("decode png").to_rgba8();
        assert_eq!((img.width(), img.height()), (180, 180));
        // Solid background: the corner pixel is opaque
        assert_eq!(img.get_pixel(0, 0)[3], 255, "{} corner not opaque", name);
    }

    // Transparent variants keep a transparent corner
    let white16 = image::open(dir.join("favicon-white-16.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(white16.get_pixel(0, 0)[3], 0);
}

#[test]
fn favicon_generation_is_idempotent() {
    let dir = test_dir("favicons-idempotent");
    let brand = BrandConfig::default();
    let font = BrandFont::builtin();

    favicon::generate(&font, &brand, &dir).expect("first run");
    let first = hash_file(&dir.join("favicon-black-32.png"));

    favicon::generate(&font, &brand, &dir).expect("second run");
    let second = hash_file(&dir.join("favicon-black-32.png"));

    assert_eq!(first, second, "re-run must produce byte-identical output");
}

fn hash_file(path: &std::path::Path) -> String {
    let bytes = fs::read(path).expect("read output");
    hex::encode(Sha256::digest(&bytes))
}
