use super::*;
use crate::pipeline::options::Threading;

const R: [u8; 4] = [255, 0, 0, 255];
const K: [u8; 4] = [0, 0, 0, 255];
const A: [u8; 4] = [63, 0, 0, 255];

fn raster(rows: &[[[u8; 4]; 4]]) -> Vec<u8> {
    rows.iter().flat_map(|row| row.concat()).collect()
}

fn red_corner_4x4() -> Vec<u8> {
    raster(&[[R, R, K, K], [R, R, K, K], [K, K, K, K], [K, K, K, K]])
}

#[test]
fn red_corner_still_degrades_to_quadrant_blocks() {
    let out = degrade(Image::still(4, 4, red_corner_4x4()));

    assert_eq!(out.width, 4);
    assert_eq!(out.height, 4);
    assert_eq!(out.frame_count(), 10);

    #[rustfmt::skip]
    let expected: Vec<u8> = vec![
        255, 0, 0, 255,  255, 0, 0, 255,  0, 0, 0, 255,  0, 0, 0, 255,
        255, 0, 0, 255,  255, 0, 0, 255,  0, 0, 0, 255,  0, 0, 0, 255,
          0, 0, 0, 255,    0, 0, 0, 255,  0, 0, 0, 255,  0, 0, 0, 255,
          0, 0, 0, 255,    0, 0, 0, 255,  0, 0, 0, 255,  0, 0, 0, 255,
    ];
    for (i, f) in out.frames.iter().enumerate() {
        assert_eq!(f.delay, 100, "frame {i}");
        assert_eq!(f.data, expected, "frame {i}");
    }
}

#[test]
fn single_red_pixel_averages_with_truncation() {
    let input = raster(&[[R, K, K, K], [K, K, K, K], [K, K, K, K], [K, K, K, K]]);
    let out = degrade(Image::still(4, 4, input));

    let expected = raster(&[[A, A, K, K], [A, A, K, K], [K, K, K, K], [K, K, K, K]]);
    assert_eq!(out.frames[0].data, expected);
    assert_eq!(out.frames[9].data, expected);
}

#[test]
fn full_depth_reproduces_raster_order() {
    let dims = Dimensions::new(5, 3);
    let data: Vec<u8> = (0u8..60).collect();
    assert_eq!(degrade_frame(&data, dims, 3), data);
    assert_eq!(degrade_frame(&data, dims, 12), data);
}

#[test]
fn depth_zero_averages_whole_frame() {
    let dims = Dimensions::new(2, 1);
    let out = degrade_frame(&[0, 10, 20, 30, 4, 10, 21, 31], dims, 0);
    assert_eq!(out, vec![2, 10, 20, 30, 2, 10, 20, 30]);
}

#[test]
fn output_length_always_matches_dimensions() {
    let dims = Dimensions::new(3, 3);
    assert_eq!(degrade_frame(&[], dims, 1).len(), 36);
    assert_eq!(degrade_frame(&[1u8; 100], dims, 2).len(), 36);
}

#[test]
fn one_by_one_image_survives() {
    let out = degrade(Image::still(1, 1, vec![12, 34, 56, 78]));
    assert_eq!(out.frame_count(), 10);
    assert!(out.frames.iter().all(|f| f.data == [12, 34, 56, 78]));
}

#[test]
fn zero_frames_and_zero_area_are_safe() {
    let out = degrade(Image::new(4, 4, vec![]));
    assert!(out.frames.is_empty());

    let out = degrade(Image::still(0, 5, vec![]));
    assert_eq!(out.frame_count(), 10);
    assert!(out.frames.iter().all(|f| f.data.is_empty()));
}

#[test]
fn animated_input_keeps_frames_and_delays() {
    let frames = vec![
        Frame::new(red_corner_4x4(), 20),
        Frame::new(red_corner_4x4(), 30),
        Frame::new(red_corner_4x4(), 40),
    ];
    let out = degrade(Image::new(4, 4, frames));
    assert_eq!(out.frame_count(), 3);
    let delays: Vec<u32> = out.frames.iter().map(|f| f.delay).collect();
    assert_eq!(delays, vec![20, 30, 40]);
}

#[test]
fn stats_count_synthesis_padding_and_depth() {
    let (out, stats) =
        degrade_with_stats(Image::still(8, 8, vec![255; 16]), &DegradeOptions::default()).unwrap();
    assert_eq!(out.frame_count(), 10);
    assert_eq!(
        stats,
        DegradeStats {
            frames_total: 10,
            frames_synthesized: 9,
            frames_padded: 10,
            max_depth: 2,
        }
    );
    assert!(out.frames.iter().all(|f| f.data.len() == 256));
}

#[test]
fn options_change_synthesis_and_ceiling() {
    let opts = DegradeOptions {
        synth_frames: 4,
        synth_delay: 25,
        split_max: Some(4),
        ..DegradeOptions::default()
    };
    let (out, stats) = degrade_with_stats(Image::still(16, 16, vec![9; 1024]), &opts).unwrap();
    assert_eq!(out.frame_count(), 4);
    assert!(out.frames.iter().all(|f| f.delay == 25));
    assert_eq!(stats.max_depth, 3);
}

#[test]
fn parallel_matches_sequential() {
    let data: Vec<u8> = (0..32 * 24 * 4).map(|i| (i * 7 % 251) as u8).collect();
    let image = Image::still(32, 24, data);

    let sequential = degrade(image.clone());
    let opts = DegradeOptions {
        threading: Threading {
            parallel: true,
            threads: Some(3),
        },
        ..DegradeOptions::default()
    };
    let parallel = degrade_with(image, &opts).unwrap();
    assert_eq!(parallel, sequential);
}

#[test]
fn invalid_options_are_rejected() {
    let opts = DegradeOptions {
        synth_frames: 0,
        ..DegradeOptions::default()
    };
    let err = degrade_with(Image::still(1, 1, vec![0; 4]), &opts).unwrap_err();
    assert!(matches!(err, QuadfadeError::Validation(_)));
}
