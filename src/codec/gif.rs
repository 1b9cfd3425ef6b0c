use std::io::{Cursor, Write};

use image::codecs::gif::{GifDecoder, GifEncoder, Repeat};
use image::{AnimationDecoder, Delay, ImageDecoder, ImageFormat, RgbaImage};

use crate::foundation::error::{QuadfadeError, QuadfadeResult};
use crate::sequence::model::{Frame, Image};

/// Decode encoded image bytes into an RGBA8 frame sequence.
///
/// GIFs keep every frame (composited at full canvas size) and their delays in milliseconds.
/// Any other format `image` understands becomes a single frame with delay 0.
pub fn decode_image(bytes: &[u8]) -> QuadfadeResult<Image> {
    let format = image::guess_format(bytes)
        .map_err(|e| QuadfadeError::codec(format!("detect image format: {e}")))?;

    if format == ImageFormat::Gif {
        return decode_gif(bytes);
    }

    let rgba = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| QuadfadeError::codec(format!("decode {format:?}: {e}")))?
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Image::still(width, height, rgba.into_raw()))
}

fn decode_gif(bytes: &[u8]) -> QuadfadeResult<Image> {
    let decoder = GifDecoder::new(Cursor::new(bytes))
        .map_err(|e| QuadfadeError::codec(format!("open gif: {e}")))?;
    let (width, height) = decoder.dimensions();
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| QuadfadeError::codec(format!("decode gif frames: {e}")))?;

    let frames = frames
        .into_iter()
        .map(|f| {
            let (numer, denom) = f.delay().numer_denom_ms();
            let delay = numer.checked_div(denom).unwrap_or(0);
            Frame::new(f.into_buffer().into_raw(), delay)
        })
        .collect::<Vec<_>>();
    tracing::debug!(width, height, frames = frames.len(), "decoded gif");
    Ok(Image::new(width, height, frames))
}

/// Encode an image as an endlessly looping animated GIF.
///
/// Each frame's delay is written in milliseconds (GIF stores hundredths of a second). Every
/// frame buffer must be exactly `width * height * 4` bytes.
pub fn encode_gif<W: Write>(image: &Image, out: W) -> QuadfadeResult<()> {
    let want = image.dimensions().byte_len();
    let mut encoder = GifEncoder::new(out);
    encoder
        .set_repeat(Repeat::Infinite)
        .map_err(|e| QuadfadeError::codec(format!("set gif repeat: {e}")))?;

    for (i, frame) in image.frames.iter().enumerate() {
        if frame.data.len() != want {
            return Err(QuadfadeError::codec(format!(
                "frame {i} holds {} bytes, expected {want} for {}x{}",
                frame.data.len(),
                image.width,
                image.height
            )));
        }
        let buffer = RgbaImage::from_raw(image.width, image.height, frame.data.clone())
            .ok_or_else(|| QuadfadeError::codec(format!("frame {i}: invalid raster buffer")))?;
        let delay = Delay::from_numer_denom_ms(frame.delay, 1);
        encoder
            .encode_frame(image::Frame::from_parts(buffer, 0, 0, delay))
            .map_err(|e| QuadfadeError::codec(format!("encode gif frame {i}: {e}")))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/codec/gif.rs"]
mod tests;
