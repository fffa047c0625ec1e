use {
    crate::{ImageError, PixelFormat, convert},
    base::Vec2,
};

/// A captured or decoded frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    /// A frame of `size` with every pixel set to `rgb`.
    pub fn filled(size: Vec2<usize>, format: PixelFormat, rgb: [u8; 3]) -> Self {
        let [r, g, b] = rgb;
        let pixel = match format {
            PixelFormat::Bgr8 => [b, g, r],
            _ => [r, g, b],
        };
        Self::new(size, pixel.repeat(size.area()), format)
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    /// True when the frame carries no usable pixels: a zero dimension, or
    /// fewer bytes than the format needs.
    pub fn is_empty(&self) -> bool {
        if self.size.is_empty() || self.data.is_empty() {
            return true;
        }
        match self.format.bytes_per_pixel() {
            Some(bpp) => self.data.len() < self.size.area() * bpp,
            None => false,
        }
    }

    /// Pixel at `(x, y)` as `[r, g, b]`, for three-channel frames.
    pub fn rgb_at(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        let [r, g, b] = self.format.rgb_offsets()?;
        if x >= self.size.x || y >= self.size.y {
            return None;
        }
        let base = (y * self.size.x + x) * 3;
        let pixel = self.data.get(base..base + 3)?;
        Some([pixel[r], pixel[g], pixel[b]])
    }

    /// Produce a copy of this frame in `target` channel order.
    ///
    /// Supported targets are `Rgb8` and `Bgr8`. Sources may be any format
    /// that decodes to three channels.
    pub fn to_format(&self, target: PixelFormat) -> Result<Image, ImageError> {
        if self.format == target {
            return Ok(self.clone());
        }
        let (size, rgb) = match (self.format, target) {
            (PixelFormat::Rgb8 | PixelFormat::Bgr8, PixelFormat::Rgb8 | PixelFormat::Bgr8) => {
                return Ok(Image::new(self.size, convert::swap_red_blue(&self.data), target));
            }
            (PixelFormat::Yuyv, PixelFormat::Rgb8 | PixelFormat::Bgr8) => {
                (self.size, convert::yuyv_to_rgb(self.size, &self.data)?)
            }
            (PixelFormat::Jpeg, PixelFormat::Rgb8 | PixelFormat::Bgr8) => {
                convert::jpeg_to_rgb(&self.data)?
            }
            (from, to) => return Err(ImageError::Unsupported { from, to }),
        };
        let data = match target {
            PixelFormat::Bgr8 => convert::swap_red_blue(&rgb),
            _ => rgb,
        };
        Ok(Image::new(size, data, target))
    }
}
