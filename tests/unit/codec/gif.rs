use super::*;

fn solid(width: u32, height: u32, px: [u8; 4]) -> Vec<u8> {
    px.repeat((width * height) as usize)
}

#[test]
fn png_decodes_to_single_still() {
    let src = vec![10u8, 20, 30, 255, 40, 50, 60, 128];
    let img = RgbaImage::from_raw(2, 1, src.clone()).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();

    let decoded = decode_image(&buf).unwrap();
    assert_eq!((decoded.width, decoded.height), (2, 1));
    assert_eq!(decoded.frame_count(), 1);
    assert_eq!(decoded.frames[0].delay, 0);
    assert_eq!(decoded.frames[0].data, src);
}

#[test]
fn gif_round_trip_keeps_frames_and_delays() {
    let image = Image::new(
        4,
        2,
        vec![
            Frame::new(solid(4, 2, [255, 0, 0, 255]), 100),
            Frame::new(solid(4, 2, [0, 0, 255, 255]), 250),
        ],
    );
    let mut buf = Vec::new();
    encode_gif(&image, &mut buf).unwrap();

    let decoded = decode_image(&buf).unwrap();
    assert_eq!((decoded.width, decoded.height), (4, 2));
    assert_eq!(decoded.frame_count(), 2);
    assert_eq!(decoded.frames[0].delay, 100);
    assert_eq!(decoded.frames[1].delay, 250);
    for f in &decoded.frames {
        assert_eq!(f.data.len(), 32);
    }
    let first = &decoded.frames[0].data;
    assert!(first[0] > 200 && first[2] < 50, "expected red, got {:?}", &first[..4]);
    let second = &decoded.frames[1].data;
    assert!(second[2] > 200 && second[0] < 50, "expected blue, got {:?}", &second[..4]);
}

#[test]
fn encode_rejects_mismatched_buffers() {
    let image = Image::new(2, 2, vec![Frame::new(vec![0; 5], 10)]);
    let err = encode_gif(&image, Vec::new()).unwrap_err();
    assert!(matches!(err, QuadfadeError::Codec(_)));
    assert!(err.to_string().contains("frame 0"));
}

#[test]
fn garbage_bytes_are_a_codec_error() {
    let err = decode_image(b"not an image").unwrap_err();
    assert!(matches!(err, QuadfadeError::Codec(_)));
}
