//! Video capture for the pose pipeline.
//!
//! `Camera` is the capability the capture loop consumes; `V4l2Camera` is
//! the Video4Linux backend.

pub mod buffer;
pub mod camera;
pub mod config;
pub mod error;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use buffer::FrameLayout;
pub use camera::Camera;
pub use config::CameraConfig;
pub use error::VideoError;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
