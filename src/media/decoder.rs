// SPDX-License-Identifier: MPL-2.0
//! GIF frame extraction.
//!
//! LZW decompression and palette expansion are delegated to the `gif` crate.
//! Every frame is kept as the patch it declares (its own rectangle inside the
//! logical screen), never composited onto the canvas. This module only turns
//! those patches into standalone PNG frames.

use crate::error::{Error, Result};
use crate::frame_store::{Frame, Raster};
use crate::source::SourceBuffer;
use futures_util::future::join_all;
use image_rs::{ImageFormat, RgbaImage};
use std::io::Cursor;
use tokio::task::JoinError;

/// One frame patch as handed out by the decoder, before PNG encoding.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixels of the patch, `width * height * 4` bytes.
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Offset of the patch inside the logical screen.
    pub left: u32,
    pub top: u32,
    pub delay_ms: u32,
}

/// Converts a GIF delay (hundredths of a second) to milliseconds.
#[must_use]
pub fn delay_to_ms(centiseconds: u16) -> u32 {
    u32::from(centiseconds) * 10
}

/// Decodes every frame patch of a GIF. Fails as a whole; no partial list is
/// returned.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the container is malformed, a frame fails to
/// decompress, or the GIF holds no frames.
pub fn decode_frames(bytes: &[u8]) -> Result<Vec<DecodedFrame>> {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::RGBA);
    let mut decoder = options.read_info(Cursor::new(bytes))?;

    let mut frames = Vec::new();
    while let Some(frame) = decoder.read_next_frame()? {
        frames.push(DecodedFrame {
            rgba: frame.buffer.to_vec(),
            width: u32::from(frame.width),
            height: u32::from(frame.height),
            left: u32::from(frame.left),
            top: u32::from(frame.top),
            delay_ms: delay_to_ms(frame.delay),
        });
    }

    if frames.is_empty() {
        return Err(Error::Decode("GIF contains no frames".to_string()));
    }
    Ok(frames)
}

/// Encodes one decoded frame as a standalone PNG.
pub fn encode_frame(index: usize, decoded: DecodedFrame) -> Result<Frame> {
    let DecodedFrame {
        rgba,
        width,
        height,
        delay_ms,
        ..
    } = decoded;

    let image = RgbaImage::from_raw(width, height, rgba).ok_or_else(|| {
        Error::Decode(format!(
            "frame {index} pixel buffer does not match {width}x{height}"
        ))
    })?;

    let mut png = Cursor::new(Vec::new());
    image.write_to(&mut png, ImageFormat::Png)?;

    let raster = Raster::new(png.into_inner(), width, height, image.into_raw());
    Ok(Frame::new(index, raster, delay_ms, width, height))
}

/// Extracts all frames of `source` off the UI thread.
///
/// Decoding runs on one blocking worker; each frame is then encoded on its
/// own worker. The result is assembled in original order once every encode
/// has finished.
pub async fn extract_frames(source: &SourceBuffer) -> Result<Vec<Frame>> {
    let bytes = source.shared_bytes();
    let decoded = tokio::task::spawn_blocking(move || decode_frames(&bytes))
        .await
        .map_err(worker_failed)??;

    tracing::debug!(
        name = source.name(),
        frames = decoded.len(),
        "decoded GIF, encoding frames"
    );

    let encodes = decoded
        .into_iter()
        .enumerate()
        .map(|(index, frame)| tokio::task::spawn_blocking(move || encode_frame(index, frame)));

    join_all(encodes)
        .await
        .into_iter()
        .map(|joined| joined.map_err(worker_failed).and_then(|encoded| encoded))
        .collect()
}

/// Sequential variant of [`extract_frames`] for callers without a runtime.
pub fn extract_frames_blocking(bytes: &[u8]) -> Result<Vec<Frame>> {
    decode_frames(bytes)?
        .into_iter()
        .enumerate()
        .map(|(index, frame)| encode_frame(index, frame))
        .collect()
}

fn worker_failed(err: JoinError) -> Error {
    Error::Decode(format!("frame worker failed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceOrigin;
    use image_rs::codecs::gif::GifEncoder;
    use image_rs::{Delay, Rgba};
    use std::borrow::Cow;

    fn gif_with_delays(delays_ms: &[u32]) -> Vec<u8> {
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            let frames = delays_ms.iter().enumerate().map(|(i, delay)| {
                let shade = (i as u8).wrapping_mul(60);
                let buffer = RgbaImage::from_pixel(4, 3, Rgba([shade, 0, 255 - shade, 255]));
                image_rs::Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(*delay, 1))
            });
            encoder
                .encode_frames(frames)
                .expect("failed to encode test GIF");
        }
        bytes
    }

    /// An 8x6 screen with a full first frame and a 2x2 patch at (3, 2).
    fn gif_with_sub_rectangle() -> Vec<u8> {
        let mut bytes = Vec::new();
        {
            let mut encoder = gif::Encoder::new(&mut bytes, 8, 6, &[]).expect("gif header");

            let first = gif::Frame {
                width: 8,
                height: 6,
                delay: 5,
                palette: Some(vec![255, 255, 255]),
                buffer: Cow::Owned(vec![0; 8 * 6]),
                ..gif::Frame::default()
            };
            encoder.write_frame(&first).expect("first frame");

            let second = gif::Frame {
                left: 3,
                top: 2,
                width: 2,
                height: 2,
                delay: 12,
                palette: Some(vec![0, 0, 255]),
                buffer: Cow::Owned(vec![0; 2 * 2]),
                ..gif::Frame::default()
            };
            encoder.write_frame(&second).expect("second frame");
        }
        bytes
    }

    #[test]
    fn delay_is_converted_from_centiseconds() {
        assert_eq!(delay_to_ms(10), 100);
        assert_eq!(delay_to_ms(0), 0);
        assert_eq!(delay_to_ms(7), 70);
    }

    #[test]
    fn patch_keeps_its_own_rectangle() {
        let decoded = decode_frames(&gif_with_sub_rectangle()).unwrap();
        assert_eq!(decoded.len(), 2);

        let first = &decoded[0];
        assert_eq!((first.width, first.height, first.left, first.top), (8, 6, 0, 0));
        assert_eq!(first.delay_ms, 50);

        let second = &decoded[1];
        assert_eq!((second.width, second.height), (2, 2));
        assert_eq!((second.left, second.top), (3, 2));
        assert_eq!(second.rgba.len(), 2 * 2 * 4);
        assert_eq!(second.delay_ms, 120);
    }

    #[test]
    fn exported_patch_has_patch_dimensions() {
        let frames = extract_frames_blocking(&gif_with_sub_rectangle()).unwrap();
        assert_eq!((frames[1].width, frames[1].height), (2, 2));

        let png = image_rs::load_from_memory(frames[1].raster.png_bytes()).unwrap();
        assert_eq!((png.width(), png.height()), (2, 2));
        assert_eq!(png.to_rgba8().get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn decode_keeps_frame_count_and_delays() {
        let decoded = decode_frames(&gif_with_delays(&[100, 150, 200])).unwrap();
        let delays: Vec<_> = decoded.iter().map(|frame| frame.delay_ms).collect();
        assert_eq!(delays, vec![100, 150, 200]);
        assert!(decoded.iter().all(|frame| frame.width == 4 && frame.height == 3));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode_frames(b"definitely not a gif").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn truncated_gif_is_a_decode_error() {
        let bytes = gif_with_delays(&[100, 100]);
        let err = decode_frames(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn encode_rejects_mismatched_buffer() {
        let decoded = DecodedFrame {
            rgba: vec![0; 7],
            width: 2,
            height: 2,
            left: 0,
            top: 0,
            delay_ms: 10,
        };
        assert!(matches!(encode_frame(0, decoded), Err(Error::Decode(_))));
    }

    #[test]
    fn encoded_frame_is_a_png() {
        let decoded = DecodedFrame {
            rgba: vec![255; 2 * 2 * 4],
            width: 2,
            height: 2,
            left: 0,
            top: 0,
            delay_ms: 40,
        };
        let frame = encode_frame(5, decoded).unwrap();
        assert_eq!(frame.index, 5);
        assert_eq!(frame.delay_ms, 40);
        assert_eq!(&frame.raster.png_bytes()[1..4], b"PNG");
        assert_eq!(frame.byte_size, frame.raster.png_bytes().len());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn extract_preserves_original_order() {
        let delays = [10, 20, 30, 40, 50, 60, 70, 80];
        let source = SourceBuffer::new("order.gif", gif_with_delays(&delays), SourceOrigin::FilePicker);

        let frames = extract_frames(&source).await.unwrap();
        let indices: Vec<_> = frames.iter().map(|frame| frame.index).collect();
        let got: Vec<_> = frames.iter().map(|frame| frame.delay_ms).collect();
        assert_eq!(indices, (0..delays.len()).collect::<Vec<_>>());
        assert_eq!(got, delays.to_vec());
    }

    #[test]
    fn blocking_extraction_matches_async_shape() {
        let frames = extract_frames_blocking(&gif_with_delays(&[100, 100])).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].index, 1);
    }
}
