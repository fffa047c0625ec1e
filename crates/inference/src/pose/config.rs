use crate::InferError;

/// Model size/accuracy tradeoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelComplexity {
    Lite,
    #[default]
    Full,
    Heavy,
}

impl ModelComplexity {
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(ModelComplexity::Lite),
            1 => Some(ModelComplexity::Full),
            2 => Some(ModelComplexity::Heavy),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            ModelComplexity::Lite => 0,
            ModelComplexity::Full => 1,
            ModelComplexity::Heavy => 2,
        }
    }

    pub fn model_file_name(self) -> &'static str {
        match self {
            ModelComplexity::Lite => "yolov8n-pose.onnx",
            ModelComplexity::Full => "yolov8s-pose.onnx",
            ModelComplexity::Heavy => "yolov8m-pose.onnx",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PoseConfig {
    static_image_mode: bool,
    model_complexity: ModelComplexity,
    min_detection_confidence: f32,
    min_tracking_confidence: f32,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            static_image_mode: false,
            model_complexity: ModelComplexity::Full,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}

impl PoseConfig {
    pub fn with_static_image_mode(mut self, static_image_mode: bool) -> Self {
        self.static_image_mode = static_image_mode;
        self
    }

    pub fn with_model_complexity(mut self, model_complexity: ModelComplexity) -> Self {
        self.model_complexity = model_complexity;
        self
    }

    pub fn with_min_detection_confidence(mut self, confidence: f32) -> Self {
        self.min_detection_confidence = confidence;
        self
    }

    pub fn with_min_tracking_confidence(mut self, confidence: f32) -> Self {
        self.min_tracking_confidence = confidence;
        self
    }

    pub fn static_image_mode(&self) -> bool {
        self.static_image_mode
    }

    pub fn model_complexity(&self) -> ModelComplexity {
        self.model_complexity
    }

    pub fn min_detection_confidence(&self) -> f32 {
        self.min_detection_confidence
    }

    pub fn min_tracking_confidence(&self) -> f32 {
        self.min_tracking_confidence
    }

    /// Lowest score a candidate may have and still be selected.
    pub(crate) fn candidate_threshold(&self) -> f32 {
        if self.static_image_mode {
            self.min_detection_confidence
        } else {
            self.min_detection_confidence
                .min(self.min_tracking_confidence)
        }
    }

    pub fn validate(&self) -> Result<(), InferError> {
        for (name, value) in [
            ("min_detection_confidence", self.min_detection_confidence),
            ("min_tracking_confidence", self.min_tracking_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(InferError::InvalidConfig(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}
