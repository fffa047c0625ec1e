use {
    base::{Rect, Vec2},
    camera_pose::{
        OverlayStyle, draw_landmarks,
        overlay::{VISIBILITY_THRESHOLD, landmark_to_pixel},
    },
    image::{Image, PixelFormat},
    inference::{LANDMARK_COUNT, Landmark, LandmarkIndex, PoseLandmarks},
};

const RED: [u8; 3] = [255, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];
const GRAY: [u8; 3] = [224, 224, 224];
const BLACK: [u8; 3] = [0, 0, 0];

/// Everything hidden except the given landmarks.
fn pose(visible: &[(LandmarkIndex, f32, f32)]) -> PoseLandmarks {
    let mut landmarks = [Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
    for &(index, x, y) in visible {
        landmarks[usize::from(index)] = Landmark::new(x, y, 0.9);
    }
    PoseLandmarks {
        landmarks,
        bbox: Rect::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0)),
        score: 0.9,
    }
}

#[test]
fn test_landmark_to_pixel() {
    let size = Vec2::new(100, 50);
    assert_eq!(
        landmark_to_pixel(&Landmark::new(0.25, 0.5, 0.9), size),
        Some(Vec2::new(25, 25))
    );
    // right and bottom edges land on the last pixel
    assert_eq!(
        landmark_to_pixel(&Landmark::new(1.0, 1.0, 0.9), size),
        Some(Vec2::new(99, 49))
    );
    assert_eq!(landmark_to_pixel(&Landmark::new(1.01, 0.5, 0.9), size), None);
    assert_eq!(landmark_to_pixel(&Landmark::new(0.5, -0.1, 0.9), size), None);
    assert_eq!(
        landmark_to_pixel(&Landmark::new(0.5, 0.5, VISIBILITY_THRESHOLD - 0.01), size),
        None
    );
    assert!(landmark_to_pixel(&Landmark::new(0.5, 0.5, VISIBILITY_THRESHOLD), size).is_some());
}

#[test]
fn test_draw_connection_and_dots() {
    let mut frame = Image::filled(Vec2::new(100, 100), PixelFormat::Bgr8, BLACK);
    let pose = pose(&[
        (LandmarkIndex::LeftShoulder, 0.2, 0.5),
        (LandmarkIndex::RightShoulder, 0.8, 0.5),
    ]);
    draw_landmarks(&mut frame, &pose, &OverlayStyle::default());

    // dot centers are red, ringed in white
    assert_eq!(frame.rgb_at(20, 50), Some(RED));
    assert_eq!(frame.rgb_at(80, 50), Some(RED));
    assert_eq!(frame.rgb_at(20, 47), Some(WHITE));
    // line between them, two pixels thick
    assert_eq!(frame.rgb_at(50, 50), Some(GRAY));
    assert_eq!(frame.rgb_at(50, 51), Some(GRAY));
    assert_eq!(frame.rgb_at(50, 52), Some(BLACK));
    // written in the frame's own channel order
    let idx = (50 * 100 + 20) * 3;
    assert_eq!(&frame.data[idx..idx + 3], &[0, 0, 255]);
}

#[test]
fn test_hidden_endpoint_drops_connection() {
    let mut frame = Image::filled(Vec2::new(100, 100), PixelFormat::Rgb8, BLACK);
    let pose = pose(&[(LandmarkIndex::LeftShoulder, 0.2, 0.5)]);
    draw_landmarks(&mut frame, &pose, &OverlayStyle::default());

    assert_eq!(frame.rgb_at(20, 50), Some(RED));
    assert_eq!(frame.rgb_at(50, 50), Some(BLACK));
    assert_eq!(frame.rgb_at(80, 50), Some(BLACK));
}

#[test]
fn test_nothing_visible_leaves_frame_untouched() {
    let original = Image::filled(Vec2::new(40, 30), PixelFormat::Bgr8, [12, 34, 56]);
    let mut frame = original.clone();
    draw_landmarks(&mut frame, &pose(&[]), &OverlayStyle::default());
    assert_eq!(frame, original);
}

#[test]
fn test_overlay_stays_local() {
    let original = Image::filled(Vec2::new(100, 100), PixelFormat::Rgb8, BLACK);
    let mut frame = original.clone();
    let pose = pose(&[(LandmarkIndex::Nose, 0.5, 0.5)]);
    draw_landmarks(&mut frame, &pose, &OverlayStyle::default());

    let changed: Vec<(usize, usize)> = (0..100)
        .flat_map(|y| (0..100).map(move |x| (x, y)))
        .filter(|&(x, y)| frame.rgb_at(x, y) != original.rgb_at(x, y))
        .collect();
    assert!(!changed.is_empty());
    // a radius-3 disc around (50, 50)
    assert!(
        changed
            .iter()
            .all(|&(x, y)| x.abs_diff(50) <= 3 && y.abs_diff(50) <= 3)
    );
}

#[test]
fn test_custom_style() {
    let mut frame = Image::filled(Vec2::new(20, 20), PixelFormat::Rgb8, BLACK);
    let mut style = OverlayStyle::default();
    style.landmark.color = [0, 255, 0];
    style.landmark.circle_radius = 1;
    draw_landmarks(&mut frame, &pose(&[(LandmarkIndex::Nose, 0.5, 0.5)]), &style);

    assert_eq!(frame.rgb_at(10, 10), Some([0, 255, 0]));
    assert_eq!(frame.rgb_at(10, 8), Some(WHITE));
    assert_eq!(frame.rgb_at(10, 7), Some(BLACK));
}
