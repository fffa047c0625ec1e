use {
    super::{
        config::PoseConfig,
        postprocess::{NMS_IOU, PersonCandidate, postprocess},
        preprocess::preprocess,
        types::{LANDMARK_COUNT, Landmark, PoseLandmarks},
    },
    crate::{Device, InferError, ModelSource, OnnxSession, Session},
    base::Rect,
    image::{Image, PixelFormat},
    std::path::Path,
};

/// Minimum overlap with the previous frame's person for a candidate to count
/// as the same person.
pub const TRACKING_IOU: f32 = 0.3;

/// Maps a frame to at most one set of body landmarks.
pub trait PoseEstimator {
    /// Channel order `detect` expects.
    fn input_format(&self) -> PixelFormat {
        PixelFormat::Rgb8
    }

    /// `Ok(None)` means no body was found.
    fn detect(&mut self, frame: &Image) -> Result<Option<PoseLandmarks>, InferError>;
}

/// Single-person pose estimator on top of a YOLO pose model.
pub struct YoloPoseEstimator {
    session: Box<dyn Session>,
    config: PoseConfig,
    tracked: Option<Rect<f32>>,
}

impl YoloPoseEstimator {
    /// Load the model matching `config.model_complexity()` from `model_dir`.
    pub fn new(model_dir: &Path, config: PoseConfig, device: &Device) -> Result<Self, InferError> {
        config.validate()?;
        let path = model_dir.join(config.model_complexity().model_file_name());
        log::info!(
            "pose: loading {} (static_image_mode={}, detection={}, tracking={})",
            path.display(),
            config.static_image_mode(),
            config.min_detection_confidence(),
            config.min_tracking_confidence()
        );
        let session = OnnxSession::load(ModelSource::File(path), device)?;
        Self::with_session(Box::new(session), config)
    }

    pub fn with_session(session: Box<dyn Session>, config: PoseConfig) -> Result<Self, InferError> {
        config.validate()?;
        Ok(Self {
            session,
            config,
            tracked: None,
        })
    }

    pub fn config(&self) -> &PoseConfig {
        &self.config
    }

    pub fn is_tracking(&self) -> bool {
        self.tracked.is_some()
    }

    /// Forget the tracked person.
    pub fn reset(&mut self) {
        self.tracked = None;
    }

    fn select(&self, candidates: Vec<PersonCandidate>) -> Option<PersonCandidate> {
        if let Some(previous) = &self.tracked {
            let min_tracking = self.config.min_tracking_confidence();
            let tracked = candidates
                .iter()
                .find(|c| c.score >= min_tracking && c.bbox.iou(previous) >= TRACKING_IOU);
            if let Some(candidate) = tracked {
                return Some(candidate.clone());
            }
        }
        let min_detection = self.config.min_detection_confidence();
        candidates.into_iter().find(|c| c.score >= min_detection)
    }
}

impl PoseEstimator for YoloPoseEstimator {
    fn detect(&mut self, frame: &Image) -> Result<Option<PoseLandmarks>, InferError> {
        let (input, letterbox) = preprocess(frame)?;

        let input_name = self
            .session
            .input_names()
            .first()
            .ok_or_else(|| InferError::Runtime("model has no inputs".to_string()))?
            .clone();
        let output_name = self
            .session
            .output_names()
            .first()
            .ok_or_else(|| InferError::Runtime("model has no outputs".to_string()))?
            .clone();

        let mut outputs = self.session.run(&[(input_name.as_str(), input)])?;
        let output = outputs.remove(&output_name).ok_or_else(|| {
            InferError::Runtime(format!("model did not produce output '{}'", output_name))
        })?;

        let candidates = postprocess(
            &output,
            &letterbox,
            self.config.candidate_threshold(),
            NMS_IOU,
        )?;
        let selected = self.select(candidates);

        if !self.config.static_image_mode() {
            self.tracked = selected.as_ref().map(|c| c.bbox);
        }

        let (w, h) = (frame.width() as f32, frame.height() as f32);
        Ok(selected.map(|candidate| {
            let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
            for (landmark, (x, y, confidence)) in landmarks.iter_mut().zip(candidate.keypoints) {
                *landmark = Landmark::new(x / w, y / h, confidence);
            }
            PoseLandmarks {
                landmarks,
                bbox: candidate.bbox,
                score: candidate.score,
            }
        }))
    }
}
