mod config;
mod estimator;
mod postprocess;
mod preprocess;
mod types;

pub use config::{ModelComplexity, PoseConfig};
pub use estimator::{PoseEstimator, TRACKING_IOU, YoloPoseEstimator};
pub use postprocess::{NMS_IOU, PersonCandidate, postprocess};
pub use preprocess::{INPUT_SIZE, preprocess};
pub use types::{
    LANDMARK_COUNT, Landmark, LandmarkIndex, LetterboxInfo, POSE_CONNECTIONS, PoseLandmarks,
};
