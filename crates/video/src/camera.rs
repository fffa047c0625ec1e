use {crate::VideoError, base::Vec2, image::Image};

/// A source of frames.
///
/// `read` errors describe a single failed capture; the camera stays usable
/// until `is_open` reports false.
#[allow(async_fn_in_trait)]
pub trait Camera {
    /// Capture the next frame.
    async fn read(&mut self) -> Result<Image, VideoError>;

    /// Whether the device can still deliver frames.
    fn is_open(&self) -> bool;

    /// Negotiated frame size.
    fn size(&self) -> Vec2<usize>;
}
