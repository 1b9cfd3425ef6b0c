use crate::foundation::core::Dimensions;

/// One still in an animated sequence: interleaved RGBA8 pixels plus a display delay.
///
/// `data` is expected to hold `width * height * 4` bytes for the owning [`Image`]; shorter
/// buffers are padded with transparent black when degraded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub data: Vec<u8>,
    /// Display delay, in milliseconds when produced by [`crate::decode_image`].
    pub delay: u32,
}

impl Frame {
    pub fn new(data: Vec<u8>, delay: u32) -> Self {
        Self { data, delay }
    }
}

/// An ordered frame sequence sharing one width/height.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub frames: Vec<Frame>,
}

impl Image {
    pub fn new(width: u32, height: u32, frames: Vec<Frame>) -> Self {
        Self {
            width,
            height,
            frames,
        }
    }

    /// A single-frame image with no delay.
    pub fn still(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self::new(width, height, vec![Frame::new(data, 0)])
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}
