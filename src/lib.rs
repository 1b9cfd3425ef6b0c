//! quadfade turns a still or animated image into a sequence that grows blockier frame by frame.
//!
//! Each frame is split into quadrants at the midpoints of its dimensions, the split is repeated
//! `depth(i)` times, and every resulting block is flattened to its mean color. Later frames get
//! deeper splits, so the animation moves from coarse blocks toward finer ones.
//!
//! # Pipeline overview
//!
//! 1. **Synthesize**: a single still is expanded to 10 identical frames (delay 100).
//! 2. **Schedule**: `depth(i) = floor(scale(i, 0, N, 1, ceil(log2(long_edge))))`.
//! 3. **Split**: `depth(i)` rounds of quadrant splitting over the full-frame [`Grid`].
//! 4. **Average**: each quadrant becomes a uniform block of its mean color.
//! 5. **Reassemble**: blocks are written back at their original offsets.
//!
//! The core works on decoded RGBA8 buffers only; [`decode_image`] and [`encode_gif`] are a thin
//! adapter for callers that start from files.
#![forbid(unsafe_code)]

mod codec;
mod foundation;
mod grid;
mod pipeline;
mod schedule;
mod sequence;

pub use codec::gif::{decode_image, encode_gif};
pub use foundation::core::{CHANNELS, Dimensions, Pixel};
pub use foundation::error::{QuadfadeError, QuadfadeResult};
pub use foundation::math::{ceil_log2, scale};
pub use grid::average::{average, mean_pixel};
pub use grid::model::Grid;
pub use grid::split::{Quadrants, split, split_rounds};
pub use pipeline::degrade::{
    DegradeStats, degrade, degrade_frame, degrade_with, degrade_with_stats,
};
pub use pipeline::options::{DegradeOptions, Threading};
pub use schedule::depth::DepthSchedule;
pub use sequence::model::{Frame, Image};
pub use sequence::synth::{DEFAULT_SYNTH_DELAY, DEFAULT_SYNTH_FRAMES, synthesize_frames};
