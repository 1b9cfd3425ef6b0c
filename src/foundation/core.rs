/// Number of interleaved channels per pixel in every raster buffer (RGBA8).
pub const CHANNELS: usize = 4;

/// Straight (non-premultiplied) RGBA8 color.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black, used to pad short frame buffers.
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Build a pixel from the first four bytes of `px`; missing bytes read as 0.
    pub fn from_rgba8(px: &[u8]) -> Self {
        let at = |i: usize| px.get(i).copied().unwrap_or(0);
        Self::new(at(0), at(1), at(2), at(3))
    }

    pub const fn to_rgba8(self) -> [u8; CHANNELS] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Width/height shared by every frame of one image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Length of a full RGBA8 buffer for these dimensions.
    pub fn byte_len(self) -> usize {
        self.pixel_count().saturating_mul(CHANNELS)
    }

    pub fn long_edge(self) -> u32 {
        self.width.max(self.height)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
