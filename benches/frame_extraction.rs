// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gif_extractor::media::{decoder, frame_export};
use image_rs::codecs::gif::GifEncoder;
use image_rs::{Delay, Frame, Rgba, RgbaImage};
use std::hint::black_box;

/// Builds a `frames`-long animation of 120x90 gradients in memory.
fn synthetic_gif(frames: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut bytes);
        let frames = (0..frames).map(|i| {
            let buffer = RgbaImage::from_fn(120, 90, |x, y| {
                Rgba([(x * 2) as u8, (y * 2) as u8, (i * 25) as u8, 255])
            });
            Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(80, 1))
        });
        encoder.encode_frames(frames).unwrap();
    }
    bytes
}

fn frame_extraction_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_extraction");

    for count in [4u32, 16] {
        let gif = synthetic_gif(count);
        group.bench_with_input(BenchmarkId::new("extract", count), &gif, |b, gif| {
            b.iter(|| black_box(decoder::extract_frames_blocking(gif).unwrap()));
        });
    }

    let frames = decoder::extract_frames_blocking(&synthetic_gif(16)).unwrap();
    group.bench_function("archive_16", |b| {
        b.iter(|| black_box(frame_export::archive_bytes(&frames).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, frame_extraction_benchmark);
criterion_main!(benches);
