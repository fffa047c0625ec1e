use {
    crate::VideoError,
    base::Vec2,
    image::{Image, PixelFormat},
};

/// How a device lays out the frames it hands over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    size: Vec2<usize>,
    format: PixelFormat,
    stride: usize,
}

impl FrameLayout {
    /// `stride` is the number of bytes per row in the buffer. Zero means
    /// tightly packed rows. Ignored for compressed formats.
    pub fn new(size: Vec2<usize>, format: PixelFormat, stride: usize) -> Result<Self, VideoError> {
        let stride = match format.bytes_per_pixel() {
            Some(bpp) => {
                let row = size.x * bpp;
                match stride {
                    0 => row,
                    stride if stride < row => {
                        return Err(VideoError::Device(format!(
                            "row stride {} is shorter than a {:?} row of {} bytes",
                            stride, format, row
                        )));
                    }
                    stride => stride,
                }
            }
            None => 0,
        };
        Ok(Self {
            size,
            format,
            stride,
        })
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Turn one dequeued buffer into a frame in `output` order.
    ///
    /// Only the first `bytesused` bytes belong to the frame; the rest of the
    /// buffer holds whatever an earlier frame left there. A buffer with no
    /// payload, or too little for a whole frame, yields an empty image.
    pub fn frame(&self, buffer: &[u8], bytesused: u32, output: PixelFormat) -> Result<Image, VideoError> {
        let used = (bytesused as usize).min(buffer.len());
        let payload = &buffer[..used];

        let data = match self.format.bytes_per_pixel() {
            Some(bpp) => {
                let row = self.size.x * bpp;
                let needed = match self.size.y {
                    0 => 0,
                    rows => (rows - 1) * self.stride + row,
                };
                if payload.is_empty() || payload.len() < needed {
                    log::trace!("short buffer: {} of {} bytes", payload.len(), needed);
                    return Ok(empty(output));
                }
                if self.stride == row {
                    payload[..row * self.size.y].to_vec()
                } else {
                    payload
                        .chunks(self.stride)
                        .take(self.size.y)
                        .flat_map(|line| &line[..row])
                        .copied()
                        .collect()
                }
            }
            None => {
                if payload.is_empty() {
                    return Ok(empty(output));
                }
                payload.to_vec()
            }
        };

        Ok(Image::new(self.size, data, self.format).to_format(output)?)
    }
}

fn empty(format: PixelFormat) -> Image {
    Image::new(Vec2::zero(), Vec::new(), format)
}
