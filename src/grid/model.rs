use crate::foundation::core::{CHANNELS, Dimensions, Pixel};

/// A rectangular block of pixels, either a whole frame or a quadrant of one.
///
/// Pixels are stored row-major; `pixels.len() == width * height` always holds. `origin` is the
/// block's top-left position inside the full frame, so quadrants can be put back where they
/// came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    origin_x: u32,
    origin_y: u32,
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Grid {
    /// Build a full-frame grid from an interleaved RGBA8 buffer.
    ///
    /// Bytes are consumed four at a time; a buffer shorter than `dims` is padded with
    /// transparent black and any excess is ignored. A trailing partial pixel reads its
    /// missing channels as 0.
    pub fn from_rgba8(data: &[u8], dims: Dimensions) -> Self {
        let count = dims.pixel_count();
        let mut pixels = Vec::with_capacity(count);
        pixels.extend(data.chunks(CHANNELS).take(count).map(Pixel::from_rgba8));
        pixels.resize(count, Pixel::transparent());

        Self {
            origin_x: 0,
            origin_y: 0,
            width: dims.width,
            height: dims.height,
            pixels,
        }
    }

    /// A `width x height` grid where every pixel is `fill`.
    pub fn uniform(width: u32, height: u32, fill: Pixel) -> Self {
        let count = Dimensions::new(width, height).pixel_count();
        Self {
            origin_x: 0,
            origin_y: 0,
            width,
            height,
            pixels: vec![fill; count],
        }
    }

    pub(crate) fn from_parts(
        origin: (u32, u32),
        width: u32,
        height: u32,
        pixels: Vec<Pixel>,
    ) -> Self {
        debug_assert_eq!(
            pixels.len(),
            Dimensions::new(width, height).pixel_count(),
            "grid pixel count must equal width * height"
        );
        Self {
            origin_x: origin.0,
            origin_y: origin.1,
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Top-left corner of this block in full-frame coordinates.
    pub fn origin(&self) -> (u32, u32) {
        (self.origin_x, self.origin_y)
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn row(&self, y: u32) -> Option<&[Pixel]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        self.pixels.get(start..start + w)
    }

    /// Rows top to bottom. A zero-width grid still yields `height` empty rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        (0..self.height).filter_map(move |y| self.row(y))
    }

    /// Serialize this block's own pixels, row-major, as RGBA8.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.to_rgba8()).collect()
    }

    /// Write this block into a full-frame RGBA8 buffer `frame_width` pixels wide, at its origin.
    ///
    /// Rows falling outside `dst` are skipped.
    pub fn composite_into(&self, dst: &mut [u8], frame_width: u32) {
        let w = self.width as usize;
        let stride = frame_width as usize * CHANNELS;
        for (y, row) in self.rows().enumerate() {
            let start = (self.origin_y as usize + y) * stride + self.origin_x as usize * CHANNELS;
            let Some(out) = dst.get_mut(start..start + w * CHANNELS) else {
                continue;
            };
            for (px, out) in row.iter().zip(out.chunks_exact_mut(CHANNELS)) {
                out.copy_from_slice(&px.to_rgba8());
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/model.rs"]
mod tests;
