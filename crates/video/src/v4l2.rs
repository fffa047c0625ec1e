use {
    crate::*,
    base::Vec2,
    image::{Image, PixelFormat},
    v4l::{
        Device, Format, FourCC, buffer::Type, io::mmap::Stream as MmapStream,
        io::traits::CaptureStream, video::Capture,
    },
};

/// Video4Linux capture device streaming through mmap buffers.
pub struct V4l2Camera {
    stream: Option<MmapStream<'static>>,
    layout: FrameLayout,
    output_format: PixelFormat,
    frame_rate: f32,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("open", &self.stream.is_some())
            .field("layout", &self.layout)
            .field("output_format", &self.output_format)
            .field("frame_rate", &self.frame_rate)
            .finish()
    }
}

impl V4l2Camera {
    /// Open the device, negotiate size, wire format and frame rate, and
    /// start streaming.
    ///
    /// # Errors
    ///
    /// Returns `VideoError::Device` if the device cannot be opened or
    /// negotiates a wire format other than YUYV or MJPEG or a row stride
    /// shorter than a row, and
    /// `VideoError::Stream` if the mmap stream cannot be created.
    pub fn open(config: &CameraConfig) -> Result<Self, VideoError> {
        let device = Device::with_path(config.device())?;
        let device_format = Capture::format(&device)?;

        let desired_fourcc = match config.capture_format().and_then(|f| f.as_fourcc()) {
            Some(fourcc) => FourCC::new(&fourcc),
            None => device_format.fourcc,
        };
        let size = config.size();

        // the driver may adjust the request, so keep what it reports back
        let actual = Capture::set_format(
            &device,
            &Format::new(size.x as u32, size.y as u32, desired_fourcc),
        )?;
        let size = Vec2::new(actual.width as usize, actual.height as usize);
        let wire_format = PixelFormat::from_fourcc(actual.fourcc.repr).ok_or_else(|| {
            VideoError::Device(format!("unsupported pixel format: {}", actual.fourcc))
        })?;
        let layout = FrameLayout::new(size, wire_format, actual.stride as usize)?;

        let params = match config.fps() {
            Some(fps) => {
                Capture::set_params(&device, &v4l::video::capture::Parameters::with_fps(fps))?
            }
            None => Capture::params(&device)?,
        };
        let frame_rate = params.interval.denominator as f32 / params.interval.numerator.max(1) as f32;

        let stream = MmapStream::with_buffers(&device, Type::VideoCapture, config.buffer_count())
            .map_err(|error| VideoError::Stream(error.to_string()))?;

        log::info!(
            "v4l2: opened {} at {}x{} {:?} (stride {}) {:.1} fps",
            config.device().display(),
            size.x,
            size.y,
            wire_format,
            layout.stride(),
            frame_rate
        );

        Ok(Self {
            stream: Some(stream),
            layout,
            output_format: config.output_format(),
            frame_rate,
        })
    }
}

impl Camera for V4l2Camera {
    async fn read(&mut self) -> Result<Image, VideoError> {
        let mut stream = self.stream.take().ok_or(VideoError::Closed)?;
        let (layout, output) = (self.layout, self.output_format);

        // dequeueing blocks until the driver hands over a buffer
        let (stream, frame) = tokio::task::spawn_blocking(move || {
            let frame = match CaptureStream::next(&mut stream) {
                Ok((buffer, metadata)) => layout.frame(buffer, metadata.bytesused, output),
                Err(error) => Err(VideoError::Stream(error.to_string())),
            };
            (stream, frame)
        })
        .await
        .map_err(|error| VideoError::Stream(format!("capture task failed: {error}")))?;
        self.stream = Some(stream);
        frame
    }

    fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    fn size(&self) -> Vec2<usize> {
        self.layout.size()
    }
}

impl Drop for V4l2Camera {
    fn drop(&mut self) {
        if self.stream.take().is_some() {
            log::debug!("v4l2: stream released");
        }
    }
}
