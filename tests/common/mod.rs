// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for integration tests.

#![allow(dead_code)]

use image_rs::codecs::gif::GifEncoder;
use image_rs::{Delay, Frame, Rgba, RgbaImage};

/// Encodes an animated GIF with one solid-colored `width`x`height` frame per
/// delay.
pub fn gif_with_delays(width: u32, height: u32, delays_ms: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut bytes);
        let frames = delays_ms.iter().enumerate().map(|(i, delay)| {
            let shade = (i as u8).wrapping_mul(40);
            let buffer = RgbaImage::from_pixel(width, height, Rgba([shade, 128, 255 - shade, 255]));
            Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(*delay, 1))
        });
        encoder
            .encode_frames(frames)
            .expect("failed to encode test GIF");
    }
    bytes
}

/// A GIF with `count` frames of 100 ms each.
pub fn gif_with_frames(count: usize) -> Vec<u8> {
    gif_with_delays(6, 4, &vec![100; count])
}
