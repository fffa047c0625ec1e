pub mod device;
pub mod error;
pub mod modelsource;
pub mod onnx;
pub mod pose;
pub mod session;

pub use device::Device;
pub use error::InferError;
pub use modelsource::ModelSource;
pub use onnx::OnnxSession;
pub use pose::{
    LANDMARK_COUNT, Landmark, LandmarkIndex, ModelComplexity, POSE_CONNECTIONS, PoseConfig,
    PoseEstimator, PoseLandmarks, YoloPoseEstimator,
};
pub use session::Session;
