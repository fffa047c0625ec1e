//! Frame buffers and pixel handling.
//!
//! `Image` is a packed pixel buffer tagged with its `PixelFormat`. Camera
//! payloads (YUYV, MJPEG) are turned into three-channel frames here, channel
//! order is permuted here, and overlays are rasterized here.

pub mod convert;
pub mod draw;
pub mod error;
pub mod image;
pub mod pixelformat;
pub mod u32;

pub use convert::{jpeg_to_rgb, swap_red_blue, yuyv_to_rgb};
pub use error::ImageError;
pub use image::Image;
pub use pixelformat::PixelFormat;
pub use u32::to_u32;
