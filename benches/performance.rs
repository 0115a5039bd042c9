use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use qrlogo::core::models::EncodeRequest;
use qrlogo::render::{encode, generate_composite, overlay_logo};
use std::io::Cursor;

fn logo_png(side: u32) -> Vec<u8> {
    let logo = RgbaImage::from_pixel(side, side, Rgba([50, 60, 70, 255]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(logo)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

// Benchmark QR encoding at different payload sizes
fn bench_encode(c: &mut Criterion) {
    let payloads = vec![
        ("short", "https://example.com".to_string()),
        ("medium", format!("https://example.com/{}", "a".repeat(100))),
        ("long", format!("https://example.com/{}", "a".repeat(500))),
    ];

    let mut group = c.benchmark_group("encode");
    for (name, payload) in &payloads {
        let request = EncodeRequest::new(payload.clone());
        group.bench_with_input(BenchmarkId::new("qr_raster", name), &request, |b, req| {
            b.iter(|| encode(black_box(req)))
        });
    }
    group.finish();
}

// Benchmark compositing with different logo source sizes
fn bench_compositor(c: &mut Criterion) {
    let request = EncodeRequest::new("https://example.com");
    let qr = encode(&request).unwrap();

    let mut group = c.benchmark_group("compositor");
    for side in [64u32, 512, 2048] {
        let logo =
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(side, side, Rgba([1, 2, 3, 255])));
        group.bench_with_input(
            BenchmarkId::new("overlay_logo", side),
            &logo,
            |b, logo| b.iter(|| overlay_logo(black_box(&qr), black_box(logo))),
        );
    }
    group.finish();
}

// Benchmark the full pipeline including PNG decode and encode
fn bench_pipeline(c: &mut Criterion) {
    let request = EncodeRequest::new("https://example.com");
    let logo = logo_png(512);

    let mut group = c.benchmark_group("pipeline");
    group.bench_function("generate_composite", |b| {
        b.iter(|| generate_composite(black_box(&request), black_box(&logo)))
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_compositor, bench_pipeline);
criterion_main!(benches);
