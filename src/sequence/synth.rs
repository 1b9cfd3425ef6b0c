use crate::sequence::model::{Frame, Image};

/// Frames produced from a single still by default.
pub const DEFAULT_SYNTH_FRAMES: usize = 10;
/// Delay given to every synthesized frame by default.
pub const DEFAULT_SYNTH_DELAY: u32 = 100;

/// Expand a single-frame image into `total` identical frames, each with `delay`.
///
/// Images with zero or several frames are left untouched. Returns the number of frames added.
pub fn synthesize_frames(image: &mut Image, total: usize, delay: u32) -> usize {
    let [still] = image.frames.as_mut_slice() else {
        return 0;
    };
    still.delay = delay;
    let base = still.data.clone();

    let added = total.saturating_sub(1);
    image
        .frames
        .extend((0..added).map(|_| Frame::new(base.clone(), delay)));
    added
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/synth.rs"]
mod tests;
