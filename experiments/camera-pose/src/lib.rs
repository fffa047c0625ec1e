//! Live pose overlay: camera frames in, annotated frames on screen.

pub mod app;
pub mod display;
pub mod overlay;
pub mod settings;

pub use app::{AppError, CaptureLoop, LoopState, LoopSummary, RetryPolicy, TerminationReason, launch};
pub use display::{Display, DisplayError, KeyPress, MinifbDisplay};
pub use overlay::{DrawingSpec, OverlayStyle, draw_landmarks};
pub use settings::Settings;
