// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the kalakini-imaging crate: the standalone filter
// pipelines on a camera-sized frame, full strip composition, and the PNG
// encode/decode round through memory.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{Rgb, RgbImage};

use kalakini_core::FilterKind;
use kalakini_imaging::{PhotoProcessor, StripGenerator};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A 1280x720 gradient, roughly what a webcam capture hands the booth.
fn webcam_frame() -> RgbImage {
    RgbImage::from_fn(1280, 720, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_filters(c: &mut Criterion) {
    let frame = webcam_frame();
    for kind in [FilterKind::Vintage, FilterKind::Bright, FilterKind::Smooth] {
        c.bench_function(&format!("{kind} filter (1280x720)"), |b| {
            b.iter(|| {
                let out = PhotoProcessor::from_rgb(black_box(frame.clone()))
                    .apply_all(kind.standalone_steps());
                black_box(out.into_rgb());
            });
        });
    }
}

/// Compose a strip from three webcam frames. Each frame is downscaled to
/// 600x338 and letterboxed, so the Lanczos resize dominates.
fn bench_strip(c: &mut Criterion) {
    let generator = StripGenerator::default();
    let frame = webcam_frame();

    c.bench_function("strip compose, vintage (3x 1280x720)", |b| {
        b.iter(|| {
            let photos = [frame.clone(), frame.clone(), frame.clone()];
            black_box(generator.compose(black_box(photos), FilterKind::Vintage));
        });
    });
}

fn bench_png(c: &mut Criterion) {
    let processor = PhotoProcessor::from_rgb(webcam_frame());
    c.bench_function("png encode (1280x720)", |b| {
        b.iter(|| black_box(processor.to_png_bytes()));
    });

    let Ok(encoded) = processor.to_png_bytes() else {
        return;
    };
    c.bench_function("png decode (1280x720)", |b| {
        b.iter(|| black_box(PhotoProcessor::from_bytes(black_box(&encoded))));
    });
}

criterion_group!(benches, bench_filters, bench_strip, bench_png);
criterion_main!(benches);
