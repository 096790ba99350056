use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{DynamicImage, Rgba, RgbaImage};
use img_compress::processing::{
    load_image_with_metadata, normalize, process_and_save_image, resize_image, CompressionOptions,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn create_test_image(width: u32, height: u32) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.png");

    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8, (x % 256) as u8])
    })
    .save(&test_file)
    .unwrap();

    (test_file, temp_dir)
}

fn bench_image_loading(c: &mut Criterion) {
    let (test_file, _temp_dir) = create_test_image(1920, 1080);

    c.bench_function("image_loading", |b| {
        b.iter(|| load_image_with_metadata(black_box(&test_file)))
    });
}

fn bench_image_resizing(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_resizing");

    for size in [Small, Medium, Large].iter() {
        let (width, height) = match size {
            Small => (800, 600),
            Medium => (1920, 1080),
            Large => (3840, 2160),
        };

        let img = DynamicImage::new_rgb8(width, height);
        let options = CompressionOptions::new(None, Some(width / 2), None);

        group.bench_with_input(
            BenchmarkId::new("resize", format!("{}x{}", width, height)),
            &(img, options),
            |b, (img, options)| {
                b.iter(|| {
                    let mut img = img.clone();
                    resize_image(black_box(&mut img), black_box(options));
                })
            },
        );
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let (test_file, _temp_dir) = create_test_image(1920, 1080);

    if let Ok((img, _)) = load_image_with_metadata(&test_file) {
        c.bench_function("normalize_rgba", |b| {
            b.iter(|| normalize(black_box(img.clone())))
        });
    }
}

fn bench_image_encoding(c: &mut Criterion) {
    let (test_file, _temp_dir) = create_test_image(1920, 1080);
    let output_dir = TempDir::new().unwrap();
    let output_file = output_dir.path().join("output.jpg");

    if let Ok((img, _)) = load_image_with_metadata(&test_file) {
        let rgb = normalize(img);
        let options = CompressionOptions::default();

        c.bench_function("image_encoding", |b| {
            b.iter(|| {
                process_and_save_image(
                    black_box(&rgb),
                    black_box(&output_file),
                    black_box(&options),
                )
            })
        });
    }
}

enum ImageSize {
    Small,
    Medium,
    Large,
}

use ImageSize::*;

criterion_group!(
    benches,
    bench_image_loading,
    bench_image_resizing,
    bench_normalize,
    bench_image_encoding
);
criterion_main!(benches);
