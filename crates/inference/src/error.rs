use {crate::Device, std::fmt};

#[derive(Debug)]
pub enum InferError {
    Shape(String),
    ModelLoad(String),
    Runtime(String),
    InvalidConfig(String),
    UnsupportedDevice(Device),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::Shape(msg) => write!(f, "shape error: {msg}"),
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::Runtime(msg) => write!(f, "runtime error: {msg}"),
            InferError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            InferError::UnsupportedDevice(device) => write!(f, "unsupported device: {device}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<base::TensorError> for InferError {
    fn from(err: base::TensorError) -> Self {
        InferError::Shape(err.to_string())
    }
}

impl From<image::ImageError> for InferError {
    fn from(err: image::ImageError) -> Self {
        InferError::Shape(err.to_string())
    }
}
