use {base::Vec2, image::PixelFormat, std::path::PathBuf};

/// Configuration for camera capture.
#[derive(Clone, Debug)]
pub struct CameraConfig {
    device: PathBuf,
    size: Vec2<usize>,
    fps: Option<u32>,
    capture_format: Option<PixelFormat>,
    output_format: PixelFormat,
    buffer_count: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: PathBuf::from("/dev/video0"),
            size: Vec2::new(640, 480),
            fps: None,
            capture_format: None,
            output_format: PixelFormat::Bgr8,
            buffer_count: 4,
        }
    }
}

impl CameraConfig {
    /// Set the device path (e.g., "/dev/video0").
    pub fn with_device(mut self, device: impl Into<PathBuf>) -> Self {
        self.device = device.into();
        self
    }

    /// Set the requested capture size in pixels.
    pub fn with_size(mut self, size: Vec2<usize>) -> Self {
        self.size = size;
        self
    }

    /// Request a frame rate. Without one the device keeps its own.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = Some(fps);
        self
    }

    /// Request a wire format (`Yuyv` or `Jpeg`). Without one the device keeps its own.
    pub fn with_capture_format(mut self, format: PixelFormat) -> Self {
        self.capture_format = Some(format);
        self
    }

    /// Channel order of the frames handed out by `Camera::read`.
    pub fn with_output_format(mut self, format: PixelFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_buffer_count(mut self, buffer_count: u32) -> Self {
        self.buffer_count = buffer_count;
        self
    }

    pub fn device(&self) -> &PathBuf {
        &self.device
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn fps(&self) -> Option<u32> {
        self.fps
    }

    pub fn capture_format(&self) -> Option<PixelFormat> {
        self.capture_format
    }

    pub fn output_format(&self) -> PixelFormat {
        self.output_format
    }

    pub fn buffer_count(&self) -> u32 {
        self.buffer_count
    }
}
