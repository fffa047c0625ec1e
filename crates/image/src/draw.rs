//! Clipped raster primitives for three-channel frames.
//!
//! Colors are always given as `[r, g, b]` and written in the frame's own
//! channel order. Frames in other formats are left untouched.

use {crate::Image, base::Vec2};

/// Write one pixel, ignoring coordinates outside the frame.
pub fn put_pixel(image: &mut Image, x: i32, y: i32, color: [u8; 3]) {
    let Some([r, g, b]) = image.format.rgb_offsets() else {
        return;
    };
    if x < 0 || y < 0 || x as usize >= image.size.x || y as usize >= image.size.y {
        return;
    }
    let idx = (y as usize * image.size.x + x as usize) * 3;
    if let Some(pixel) = image.data.get_mut(idx..idx + 3) {
        pixel[r] = color[0];
        pixel[g] = color[1];
        pixel[b] = color[2];
    }
}

/// Fill a square brush of `thickness` pixels centered on `(x, y)`.
fn stamp(image: &mut Image, x: i32, y: i32, thickness: i32, color: [u8; 3]) {
    let lo = -(thickness - 1) / 2;
    let hi = thickness / 2;
    for dy in lo..=hi {
        for dx in lo..=hi {
            put_pixel(image, x + dx, y + dy, color);
        }
    }
}

/// Draw a line with Bresenham's algorithm after Cohen-Sutherland clipping.
///
/// `thickness` below 1 is treated as 1.
pub fn draw_line(image: &mut Image, from: Vec2<i32>, to: Vec2<i32>, color: [u8; 3], thickness: i32) {
    let thickness = thickness.max(1);
    let bounds = Vec2::new(image.size.x as i32, image.size.y as i32);
    let Some((from, to)) = clip_line(from, to, bounds) else {
        return;
    };

    let (mut x0, mut y0) = (from.x, from.y);
    let (x1, y1) = (to.x, to.y);
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        stamp(image, x0, y0, thickness, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw a filled disc of `radius` around `center`.
pub fn draw_disc(image: &mut Image, center: Vec2<i32>, radius: i32, color: [u8; 3]) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                put_pixel(image, center.x + dx, center.y + dy, color);
            }
        }
    }
}

// Cohen-Sutherland outcodes
const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

fn outcode(p: Vec2<i32>, bounds: Vec2<i32>) -> u8 {
    let mut code = INSIDE;
    if p.x < 0 {
        code |= LEFT;
    } else if p.x >= bounds.x {
        code |= RIGHT;
    }
    if p.y < 0 {
        code |= TOP;
    } else if p.y >= bounds.y {
        code |= BOTTOM;
    }
    code
}

/// Clip the segment to `[0, bounds)`; `None` when nothing is visible.
fn clip_line(
    mut p0: Vec2<i32>,
    mut p1: Vec2<i32>,
    bounds: Vec2<i32>,
) -> Option<(Vec2<i32>, Vec2<i32>)> {
    if bounds.x <= 0 || bounds.y <= 0 {
        return None;
    }
    loop {
        let code0 = outcode(p0, bounds);
        let code1 = outcode(p1, bounds);
        if code0 | code1 == INSIDE {
            return Some((p0, p1));
        }
        if code0 & code1 != 0 {
            return None;
        }

        let code = if code0 != INSIDE { code0 } else { code1 };
        // i64 so far off-frame endpoints cannot overflow the products
        let (x0, y0) = (p0.x as i64, p0.y as i64);
        let dx = p1.x as i64 - x0;
        let dy = p1.y as i64 - y0;
        let (w, h) = (bounds.x as i64, bounds.y as i64);
        let (x, y) = if code & TOP != 0 {
            (x0 + dx * (0 - y0) / dy, 0)
        } else if code & BOTTOM != 0 {
            (x0 + dx * (h - 1 - y0) / dy, h - 1)
        } else if code & LEFT != 0 {
            (0, y0 + dy * (0 - x0) / dx)
        } else {
            (w - 1, y0 + dy * (w - 1 - x0) / dx)
        };
        let clamp = |v: i64| v.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        let clipped = Vec2::new(clamp(x), clamp(y));

        if code == code0 {
            p0 = clipped;
        } else {
            p1 = clipped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_line_fully_outside() {
        let bounds = Vec2::new(10, 10);
        assert!(clip_line(Vec2::new(-5, -5), Vec2::new(-1, -2), bounds).is_none());
    }

    #[test]
    fn test_clip_line_crossing() {
        let bounds = Vec2::new(10, 10);
        let (a, b) = clip_line(Vec2::new(-5, 5), Vec2::new(15, 5), bounds).unwrap();
        assert_eq!(a, Vec2::new(0, 5));
        assert_eq!(b, Vec2::new(9, 5));
    }
}
