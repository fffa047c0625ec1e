//! The capture, estimate, draw, display loop.

use {
    crate::{
        display::{Display, DisplayError, KeyPress},
        overlay::{OverlayStyle, draw_landmarks},
    },
    base::Vec2,
    image::ImageError,
    inference::{InferError, PoseEstimator},
    std::{fmt, time::Duration},
    video::{Camera, VideoError},
};

/// Wait for a key after each displayed frame.
pub const KEY_WAIT: Duration = Duration::from_millis(1);

/// What to do when the camera fails to deliver a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetryPolicy {
    /// Give up after this many failed reads in a row. `None` retries forever.
    pub max_consecutive_failures: Option<u32>,
    /// Pause before the next read.
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn with_max_consecutive_failures(mut self, max: u32) -> Self {
        self.max_consecutive_failures = Some(max);
        self
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    fn exhausted(&self, failures: u32) -> bool {
        self.max_consecutive_failures
            .is_some_and(|max| failures >= max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ExitKey,
    WindowClosed,
    CameraClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated(TerminationReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub reason: TerminationReason,
    pub frames: u64,
    pub detections: u64,
    pub failed_reads: u64,
}

#[derive(Debug)]
pub enum AppError {
    CameraOpen(VideoError),
    ReadFailures { count: u32, last: Option<VideoError> },
    Convert(ImageError),
    Inference(InferError),
    Display(DisplayError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::CameraOpen(err) => write!(f, "cannot open camera: {}", err),
            AppError::ReadFailures { count, last: Some(err) } => {
                write!(f, "{} consecutive failed reads, last: {}", count, err)
            }
            AppError::ReadFailures { count, last: None } => {
                write!(f, "{} consecutive empty frames", count)
            }
            AppError::Convert(err) => write!(f, "frame conversion failed: {}", err),
            AppError::Inference(err) => write!(f, "pose estimation failed: {}", err),
            AppError::Display(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ImageError> for AppError {
    fn from(err: ImageError) -> Self {
        AppError::Convert(err)
    }
}

impl From<InferError> for AppError {
    fn from(err: InferError) -> Self {
        AppError::Inference(err)
    }
}

impl From<DisplayError> for AppError {
    fn from(err: DisplayError) -> Self {
        AppError::Display(err)
    }
}

/// Owns the camera, estimator and display for the lifetime of the loop.
/// All three are released when it is dropped, whatever ended the loop.
pub struct CaptureLoop<C, E, D> {
    camera: C,
    estimator: E,
    display: D,
    policy: RetryPolicy,
    style: OverlayStyle,
    state: LoopState,
    consecutive_failures: u32,
    frames: u64,
    detections: u64,
    failed_reads: u64,
}

impl<C: Camera, E: PoseEstimator, D: Display> CaptureLoop<C, E, D> {
    pub fn new(camera: C, estimator: E, display: D, policy: RetryPolicy) -> Self {
        Self {
            camera,
            estimator,
            display,
            policy,
            style: OverlayStyle::default(),
            state: LoopState::Running,
            consecutive_failures: 0,
            frames: 0,
            detections: 0,
            failed_reads: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Run one iteration.
    pub async fn step(&mut self) -> Result<LoopState, AppError> {
        if let LoopState::Terminated(_) = self.state {
            return Ok(self.state);
        }
        if !self.camera.is_open() {
            return Ok(self.terminate(TerminationReason::CameraClosed));
        }

        let mut frame = match self.camera.read().await {
            Ok(frame) if !frame.is_empty() => frame,
            Ok(_) => {
                log::trace!("empty frame");
                self.read_failed(None).await?;
                return Ok(self.state);
            }
            Err(err) => {
                log::trace!("read failed: {}", err);
                self.read_failed(Some(err)).await?;
                return Ok(self.state);
            }
        };
        self.consecutive_failures = 0;
        self.frames += 1;

        let input = frame.to_format(self.estimator.input_format())?;
        if let Some(pose) = self.estimator.detect(&input)? {
            self.detections += 1;
            if log::log_enabled!(log::Level::Trace) {
                for (index, landmark) in pose.iter() {
                    log::trace!(
                        "{}: ({:.3}, {:.3}) visibility {:.2}",
                        index.name(),
                        landmark.x,
                        landmark.y,
                        landmark.visibility
                    );
                }
            }
            draw_landmarks(&mut frame, &pose, &self.style);
        }

        self.display.show(&frame)?;

        tokio::time::sleep(KEY_WAIT).await;
        match self.display.poll_key() {
            Some(KeyPress::Escape) => return Ok(self.terminate(TerminationReason::ExitKey)),
            Some(KeyPress::Other) | None => {}
        }
        if !self.display.is_open() {
            return Ok(self.terminate(TerminationReason::WindowClosed));
        }
        Ok(self.state)
    }

    /// Iterate until the loop terminates or fails.
    pub async fn run(mut self) -> Result<LoopSummary, AppError> {
        loop {
            if let LoopState::Terminated(reason) = self.step().await? {
                let summary = LoopSummary {
                    reason,
                    frames: self.frames,
                    detections: self.detections,
                    failed_reads: self.failed_reads,
                };
                log::info!(
                    "loop ended ({:?}): {} frames, {} with a pose, {} failed reads",
                    summary.reason,
                    summary.frames,
                    summary.detections,
                    summary.failed_reads
                );
                return Ok(summary);
            }
        }
    }

    async fn read_failed(&mut self, err: Option<VideoError>) -> Result<(), AppError> {
        self.consecutive_failures += 1;
        self.failed_reads += 1;
        if self.policy.exhausted(self.consecutive_failures) {
            return Err(AppError::ReadFailures {
                count: self.consecutive_failures,
                last: err,
            });
        }
        if !self.policy.backoff.is_zero() {
            tokio::time::sleep(self.policy.backoff).await;
        }
        Ok(())
    }

    fn terminate(&mut self, reason: TerminationReason) -> LoopState {
        self.state = LoopState::Terminated(reason);
        self.state
    }
}

/// Open the camera, then the display sized to it, then run the loop.
///
/// If the camera does not open, the display is never created and the
/// estimator is dropped unused.
pub async fn launch<C, E, D>(
    open_camera: impl FnOnce() -> Result<C, VideoError>,
    estimator: E,
    open_display: impl FnOnce(Vec2<usize>) -> Result<D, DisplayError>,
    policy: RetryPolicy,
) -> Result<LoopSummary, AppError>
where
    C: Camera,
    E: PoseEstimator,
    D: Display,
{
    log::info!("starting camera");
    let camera = open_camera().map_err(AppError::CameraOpen)?;
    let size = camera.size();
    log::info!("camera configured: {}x{}", size.x, size.y);

    let display = open_display(size)?;
    log::info!("press ESC to exit");

    CaptureLoop::new(camera, estimator, display, policy)
        .run()
        .await
}
