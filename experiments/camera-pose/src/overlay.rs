use {
    base::Vec2,
    image::{
        Image,
        draw::{draw_disc, draw_line},
    },
    inference::{Landmark, POSE_CONNECTIONS, PoseLandmarks},
};

/// Landmarks less visible than this are not drawn.
pub const VISIBILITY_THRESHOLD: f32 = 0.5;

/// Color and size of one kind of stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingSpec {
    pub color: [u8; 3],
    pub thickness: i32,
    pub circle_radius: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub landmark: DrawingSpec,
    pub connection: DrawingSpec,
    /// Disc drawn under each landmark, one pixel wider.
    pub border_color: [u8; 3],
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            landmark: DrawingSpec {
                color: [255, 0, 0],
                thickness: 2,
                circle_radius: 2,
            },
            connection: DrawingSpec {
                color: [224, 224, 224],
                thickness: 2,
                circle_radius: 2,
            },
            border_color: [255, 255, 255],
        }
    }
}

/// Pixel position of a landmark, or `None` when it should not be drawn.
pub fn landmark_to_pixel(landmark: &Landmark, size: Vec2<usize>) -> Option<Vec2<i32>> {
    if landmark.visibility < VISIBILITY_THRESHOLD {
        return None;
    }
    if !(0.0..=1.0).contains(&landmark.x) || !(0.0..=1.0).contains(&landmark.y) {
        return None;
    }
    if size.is_empty() {
        return None;
    }
    let x = ((landmark.x * size.x as f32) as usize).min(size.x - 1);
    let y = ((landmark.y * size.y as f32) as usize).min(size.y - 1);
    Some(Vec2::new(x as i32, y as i32))
}

/// Draw the skeleton of `pose` onto `frame`: connections first, then one
/// dot per landmark.
pub fn draw_landmarks(frame: &mut Image, pose: &PoseLandmarks, style: &OverlayStyle) {
    let size = frame.size;
    let pixels: Vec<Option<Vec2<i32>>> = pose
        .landmarks
        .iter()
        .map(|landmark| landmark_to_pixel(landmark, size))
        .collect();

    for (a, b) in POSE_CONNECTIONS {
        if let (Some(from), Some(to)) = (pixels[usize::from(a)], pixels[usize::from(b)]) {
            draw_line(
                frame,
                from,
                to,
                style.connection.color,
                style.connection.thickness,
            );
        }
    }

    let radius = style.landmark.circle_radius;
    for center in pixels.into_iter().flatten() {
        draw_disc(frame, center, radius + 1, style.border_color);
        draw_disc(frame, center, radius, style.landmark.color);
    }
}
