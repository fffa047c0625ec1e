// fourcc codes
pub(crate) const FOURCC_YUYV: [u8; 4] = *b"YUYV";
pub(crate) const FOURCC_MJPG: [u8; 4] = *b"MJPG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Packed 8-bit red, green, blue.
    Rgb8,
    /// Packed 8-bit blue, green, red.
    Bgr8,
    /// YUV 4:2:2, two pixels in `[Y0, U, Y1, V]`.
    Yuyv,
    /// One compressed JPEG image.
    Jpeg,
}

impl PixelFormat {
    /// Map a capture fourcc to a format, `None` if it is not handled.
    pub fn from_fourcc(fourcc: [u8; 4]) -> Option<Self> {
        match fourcc {
            FOURCC_YUYV => Some(PixelFormat::Yuyv),
            FOURCC_MJPG => Some(PixelFormat::Jpeg),
            _ => None,
        }
    }

    pub fn as_fourcc(&self) -> Option<[u8; 4]> {
        match self {
            PixelFormat::Yuyv => Some(FOURCC_YUYV),
            PixelFormat::Jpeg => Some(FOURCC_MJPG),
            PixelFormat::Rgb8 | PixelFormat::Bgr8 => None,
        }
    }

    /// Bytes per pixel for uncompressed formats.
    pub fn bytes_per_pixel(&self) -> Option<usize> {
        match self {
            PixelFormat::Rgb8 | PixelFormat::Bgr8 => Some(3),
            PixelFormat::Yuyv => Some(2),
            PixelFormat::Jpeg => None,
        }
    }

    /// Byte offsets of red, green and blue inside one pixel.
    pub fn rgb_offsets(&self) -> Option<[usize; 3]> {
        match self {
            PixelFormat::Rgb8 => Some([0, 1, 2]),
            PixelFormat::Bgr8 => Some([2, 1, 0]),
            PixelFormat::Yuyv | PixelFormat::Jpeg => None,
        }
    }
}

// BT.601 YUV-to-RGB conversion for a single pixel (fixed-point, shift 8)
pub(crate) fn yuv_to_rgb(y: u8, u: u8, v: u8) -> (u8, u8, u8) {
    let y = y as i32;
    let u = u as i32 - 128;
    let v = v as i32 - 128;
    let r = (y + ((359 * v) >> 8)).clamp(0, 255) as u8;
    let g = (y - ((88 * u + 183 * v) >> 8)).clamp(0, 255) as u8;
    let b = (y + ((454 * u) >> 8)).clamp(0, 255) as u8;
    (r, g, b)
}
