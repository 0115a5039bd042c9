use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use proptest::prelude::*;
use qrlogo::core::models::{EccLevel, EncodeRequest};
use qrlogo::render::{circle_radius, encode, generate_composite, logo_target_size};
use std::io::Cursor;

fn logo_png(width: u32, height: u32) -> Vec<u8> {
    let logo = RgbaImage::from_pixel(width, height, Rgba([90, 10, 120, 255]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(logo)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

// Property test for the encoder contract: any non-empty payload within
// level-H capacity yields an exact, fully opaque square raster.
proptest! {
    #[test]
    fn test_encode_dimensions_and_opacity(
        payload in "[a-zA-Z0-9:/?._-]{1,200}"
    ) {
        let request = EncodeRequest::new(payload);
        let img = encode(&request).unwrap();

        prop_assert_eq!(img.width(), 500);
        prop_assert_eq!(img.height(), 500);

        for pixel in img.pixels() {
            prop_assert_eq!(pixel[3], 255);
            prop_assert!(pixel[0] == 0 || pixel[0] == 255);
        }
    }
}

proptest! {
    #[test]
    fn test_encode_custom_dimensions(
        payload in "[a-z]{1,30}",
        dim in 50u32..600
    ) {
        let mut request = EncodeRequest::new(payload);
        request.module_dimension = dim;
        let img = encode(&request).unwrap();

        prop_assert_eq!(img.width(), dim);
        prop_assert_eq!(img.height(), dim);
    }
}

// The composite pipeline is a pure transform: identical inputs must
// produce byte-identical PNG output.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn test_generate_composite_idempotent(
        payload in "[a-zA-Z0-9:/._-]{1,100}"
    ) {
        let request = EncodeRequest::new(payload);
        let logo = logo_png(64, 64);

        let a = generate_composite(&request, &logo).unwrap();
        let b = generate_composite(&request, &logo).unwrap();
        prop_assert_eq!(a, b);
    }
}

// Sizing policy: logo occupies 20% of the canvas width, circle radius is
// half the logo plus the fixed 8 px pad.
proptest! {
    #[test]
    fn test_sizing_policy_for_any_width(
        width in 100u32..4000
    ) {
        let logo = logo_target_size(width);
        let radius = circle_radius(width);

        prop_assert_eq!(logo, (width as f64 * 0.20) as u32);
        prop_assert_eq!(radius, logo / 2 + 8);

        // The circle must fit inside the canvas.
        prop_assert!(radius * 2 < width);

        // The logo square is centered with symmetric margins.
        let offset = (width - logo) / 2;
        prop_assert!(offset + logo <= width);
    }
}

proptest! {
    #[test]
    fn test_validation_accepts_any_non_empty_payload(
        payload in ".{1,50}"
    ) {
        let request = EncodeRequest::new(payload);
        prop_assert!(request.validate().is_ok());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]
    #[test]
    fn test_composite_dimensions_match_request(
        payload in "[a-z]{1,40}",
        logo_w in 8u32..256,
        logo_h in 8u32..256
    ) {
        let request = EncodeRequest::new(payload);
        let logo = logo_png(logo_w, logo_h);

        let png = generate_composite(&request, &logo).unwrap();
        let img = image::load_from_memory(&png).unwrap();

        prop_assert_eq!(img.width(), 500);
        prop_assert_eq!(img.height(), 500);
    }
}

#[test]
fn test_reference_width_constants() {
    // Spot checks at the reference 500 px width.
    assert_eq!(logo_target_size(500), 100);
    assert_eq!(circle_radius(500), 58);

    let request = EncodeRequest::new("https://example.com");
    assert_eq!(request.level, EccLevel::H);
    assert_eq!(request.module_dimension, 500);
    assert_eq!(request.margin_modules, 2);
}
