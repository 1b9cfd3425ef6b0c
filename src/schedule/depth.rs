use crate::foundation::core::Dimensions;
use crate::foundation::math::{ceil_log2, scale};

/// Per-frame split depth for one image.
///
/// Frame `i` of `N` gets `floor(scale(i, 0, N, 1, split_max))` rounds: early frames are split
/// once, later frames approach `split_max`, the number of halvings that brings the long edge
/// down to single pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthSchedule {
    split_max: u32,
    frame_count: usize,
}

impl DepthSchedule {
    /// Schedule with `split_max = ceil(log2(long_edge))`.
    pub fn new(dims: Dimensions, frame_count: usize) -> Self {
        Self {
            split_max: ceil_log2(dims.long_edge()),
            frame_count,
        }
    }

    /// Schedule with an explicit depth ceiling.
    pub fn with_split_max(split_max: u32, frame_count: usize) -> Self {
        Self {
            split_max,
            frame_count,
        }
    }

    pub fn split_max(&self) -> u32 {
        self.split_max
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Split rounds for frame `index`.
    ///
    /// Never below 0 nor above `max(split_max, 1)`. An empty schedule yields 0.
    pub fn depth(&self, index: usize) -> u32 {
        if self.frame_count == 0 {
            return 0;
        }
        let ceiling = self.split_max.max(1);
        let d = scale(
            index as f64,
            0.0,
            self.frame_count as f64,
            1.0,
            f64::from(ceiling),
        )
        .floor();
        if !d.is_finite() {
            return 0;
        }
        d.clamp(0.0, f64::from(ceiling)) as u32
    }

    /// Depths for every frame, in frame order.
    pub fn depths(&self) -> Vec<u32> {
        (0..self.frame_count).map(|i| self.depth(i)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/depth.rs"]
mod tests;
