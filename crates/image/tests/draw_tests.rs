use base::Vec2;
use image::{
    Image, PixelFormat,
    draw::{draw_disc, draw_line, put_pixel},
    to_u32,
};

fn black(width: usize, height: usize, format: PixelFormat) -> Image {
    Image::filled(Vec2::new(width, height), format, [0, 0, 0])
}

#[test]
fn test_draw_line_horizontal() {
    let mut img = black(10, 5, PixelFormat::Rgb8);
    draw_line(&mut img, Vec2::new(1, 2), Vec2::new(8, 2), [255, 255, 255], 1);

    for x in 1..=8 {
        assert_eq!(img.rgb_at(x, 2), Some([255, 255, 255]), "pixel ({x}, 2)");
    }
    assert_eq!(img.rgb_at(0, 2), Some([0, 0, 0]));
    assert_eq!(img.rgb_at(1, 1), Some([0, 0, 0]));
}

#[test]
fn test_draw_line_vertical() {
    let mut img = black(5, 10, PixelFormat::Rgb8);
    draw_line(&mut img, Vec2::new(2, 1), Vec2::new(2, 8), [255, 0, 0], 1);
    for y in 1..=8 {
        assert_eq!(img.rgb_at(2, y), Some([255, 0, 0]));
    }
}

#[test]
fn test_draw_line_clips_to_bounds() {
    let mut img = black(10, 10, PixelFormat::Rgb8);
    draw_line(&mut img, Vec2::new(-5, 5), Vec2::new(15, 5), [255, 255, 255], 1);
    for x in 0..10 {
        assert_eq!(img.rgb_at(x, 5), Some([255, 255, 255]));
    }
}

#[test]
fn test_thick_line_covers_two_rows() {
    let mut img = black(10, 10, PixelFormat::Rgb8);
    draw_line(&mut img, Vec2::new(2, 4), Vec2::new(7, 4), [9, 9, 9], 2);
    for x in 2..=7 {
        assert_eq!(img.rgb_at(x, 4), Some([9, 9, 9]));
        assert_eq!(img.rgb_at(x, 5), Some([9, 9, 9]));
    }
    assert_eq!(img.rgb_at(4, 3), Some([0, 0, 0]));
    assert_eq!(img.rgb_at(4, 6), Some([0, 0, 0]));
}

#[test]
fn test_draw_disc() {
    let mut img = black(20, 20, PixelFormat::Rgb8);
    draw_disc(&mut img, Vec2::new(10, 10), 3, [0, 255, 0]);
    assert_eq!(img.rgb_at(10, 10), Some([0, 255, 0]));
    assert_eq!(img.rgb_at(12, 10), Some([0, 255, 0]));
    assert_eq!(img.rgb_at(15, 10), Some([0, 0, 0]));
    assert_eq!(img.rgb_at(13, 13), Some([0, 0, 0]));
}

#[test]
fn test_draw_disc_clips() {
    let mut img = black(10, 10, PixelFormat::Rgb8);
    draw_disc(&mut img, Vec2::new(1, 1), 5, [0, 0, 255]);
    assert_eq!(img.rgb_at(1, 1), Some([0, 0, 255]));
    assert_eq!(img.data.len(), 300);
}

#[test]
fn test_colors_follow_channel_order() {
    let mut img = black(2, 1, PixelFormat::Bgr8);
    put_pixel(&mut img, 0, 0, [255, 0, 0]);
    // red lands in the last byte of a BGR pixel
    assert_eq!(&img.data[0..3], &[0, 0, 255]);
    assert_eq!(img.rgb_at(0, 0), Some([255, 0, 0]));
}

#[test]
fn test_drawing_on_compressed_frame_is_noop() {
    let mut img = Image::new(Vec2::new(2, 2), vec![1, 2, 3], PixelFormat::Jpeg);
    put_pixel(&mut img, 0, 0, [255, 255, 255]);
    assert_eq!(img.data, vec![1, 2, 3]);
}

#[test]
fn test_to_u32_rgb_and_bgr_agree() {
    let rgb = Image::new(Vec2::new(2, 1), vec![255, 0, 0, 0, 0, 255], PixelFormat::Rgb8);
    let bgr = rgb.to_format(PixelFormat::Bgr8).unwrap();

    let packed = to_u32(&rgb).unwrap();
    assert_eq!(packed, vec![0xFFFF0000, 0xFF0000FF]);
    assert_eq!(to_u32(&bgr).unwrap(), packed);
}

#[test]
fn test_to_u32_truncated() {
    let img = Image::new(Vec2::new(2, 2), vec![0; 6], PixelFormat::Rgb8);
    assert!(to_u32(&img).is_err());
}

#[test]
fn test_draw_line_far_off_frame_endpoints() {
    let mut img = black(640, 480, PixelFormat::Rgb8);
    draw_line(
        &mut img,
        Vec2::new(-60000, -50000),
        Vec2::new(60000, 50000),
        [255, 255, 255],
        1,
    );
    // the visible part runs through the origin with slope 5/6
    assert_eq!(img.rgb_at(0, 0), Some([255, 255, 255]));
    assert_eq!(img.rgb_at(120, 100), Some([255, 255, 255]));
    assert_eq!(img.rgb_at(100, 120), Some([0, 0, 0]));

    // endpoints at the ends of the i32 range
    let mut img = black(10, 10, PixelFormat::Rgb8);
    draw_line(&mut img, Vec2::new(i32::MIN, 5), Vec2::new(i32::MAX, 5), [255, 0, 0], 2);
    assert_eq!(img.rgb_at(0, 5), Some([255, 0, 0]));
    assert_eq!(img.rgb_at(9, 5), Some([255, 0, 0]));
}
