use rayon::prelude::*;

use crate::{
    foundation::core::Dimensions,
    foundation::error::{QuadfadeError, QuadfadeResult},
    grid::{average::average, model::Grid, split::split_rounds},
    pipeline::options::DegradeOptions,
    schedule::depth::DepthSchedule,
    sequence::model::{Frame, Image},
    sequence::synth::synthesize_frames,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Aggregated counters for one [`degrade_with_stats`] call.
pub struct DegradeStats {
    /// Frames in the output sequence.
    pub frames_total: u64,
    /// Frames added by synthesis from a single still.
    pub frames_synthesized: u64,
    /// Frames whose buffer was shorter than `width * height * 4` and got padded.
    pub frames_padded: u64,
    /// Deepest split applied to any frame.
    pub max_depth: u32,
}

/// Degrade an image with the default options.
///
/// A single still becomes 10 frames of delay 100; every frame is split into quadrants
/// `depth(i)` times and each quadrant is flattened to its mean color. Frame count, width and
/// height are the only inputs to the schedule.
pub fn degrade(mut image: Image) -> Image {
    let opts = DegradeOptions::default();
    let schedule = prepare(&mut image, &opts);
    let dims = image.dimensions();
    degrade_frames_sequential(&mut image.frames, dims, &schedule);
    image
}

/// Degrade an image with explicit options.
pub fn degrade_with(image: Image, opts: &DegradeOptions) -> QuadfadeResult<Image> {
    degrade_with_stats(image, opts).map(|(image, _)| image)
}

/// Degrade an image and return both the result and counters.
#[tracing::instrument(
    skip_all,
    fields(width = image.width, height = image.height, frames = image.frames.len())
)]
pub fn degrade_with_stats(
    mut image: Image,
    opts: &DegradeOptions,
) -> QuadfadeResult<(Image, DegradeStats)> {
    opts.validate()?;

    let before = image.frame_count();
    let schedule = prepare(&mut image, opts);
    let dims = image.dimensions();

    let frames_padded = if opts.threading.parallel {
        let pool = build_thread_pool(opts.threading.threads)?;
        pool.install(|| {
            image
                .frames
                .par_iter_mut()
                .enumerate()
                .map(|(i, frame)| u64::from(degrade_frame_in_place(i, frame, dims, &schedule)))
                .sum::<u64>()
        })
    } else {
        degrade_frames_sequential(&mut image.frames, dims, &schedule)
    };

    let stats = DegradeStats {
        frames_total: image.frame_count() as u64,
        frames_synthesized: image.frame_count().saturating_sub(before) as u64,
        frames_padded,
        max_depth: schedule.depths().into_iter().max().unwrap_or(0),
    };
    tracing::debug!(?stats, "degrade finished");
    Ok((image, stats))
}

/// Degrade one raster buffer at a fixed split depth.
///
/// `data` is padded or truncated to `dims`; the returned buffer is always
/// `width * height * 4` bytes.
pub fn degrade_frame(data: &[u8], dims: Dimensions, depth: u32) -> Vec<u8> {
    let blocks = split_rounds(Grid::from_rgba8(data, dims), depth);
    tracing::trace!(depth, blocks = blocks.len(), "averaging quadrants");

    let mut out = vec![0u8; dims.byte_len()];
    for block in &blocks {
        average(block).composite_into(&mut out, dims.width);
    }
    out
}

fn prepare(image: &mut Image, opts: &DegradeOptions) -> DepthSchedule {
    let added = synthesize_frames(image, opts.synth_frames, opts.synth_delay);
    if added > 0 {
        tracing::info!(added, delay = opts.synth_delay, "synthesized frames from still");
    }

    let frame_count = image.frame_count();
    match opts.split_max {
        Some(split_max) => DepthSchedule::with_split_max(split_max, frame_count),
        None => DepthSchedule::new(image.dimensions(), frame_count),
    }
}

fn degrade_frames_sequential(
    frames: &mut [Frame],
    dims: Dimensions,
    schedule: &DepthSchedule,
) -> u64 {
    frames
        .iter_mut()
        .enumerate()
        .map(|(i, frame)| u64::from(degrade_frame_in_place(i, frame, dims, schedule)))
        .sum()
}

/// Returns `true` when the frame's buffer had to be padded.
fn degrade_frame_in_place(
    index: usize,
    frame: &mut Frame,
    dims: Dimensions,
    schedule: &DepthSchedule,
) -> bool {
    let padded = frame.data.len() < dims.byte_len();
    if padded {
        tracing::warn!(
            frame = index,
            have = frame.data.len(),
            want = dims.byte_len(),
            "short frame buffer, padding with transparent black"
        );
    }

    let depth = schedule.depth(index);
    tracing::debug!(frame = index, depth, "degrading frame");
    frame.data = degrade_frame(&frame.data, dims, depth);
    padded
}

fn build_thread_pool(threads: Option<usize>) -> QuadfadeResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| QuadfadeError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/degrade.rs"]
mod tests;
