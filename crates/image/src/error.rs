use {crate::PixelFormat, std::fmt};

#[derive(Debug)]
pub enum ImageError {
    Decode(String),
    Truncated { expected: usize, got: usize },
    Unsupported { from: PixelFormat, to: PixelFormat },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Decode(msg) => write!(f, "decode error: {msg}"),
            ImageError::Truncated { expected, got } => {
                write!(f, "truncated frame: expected {expected} bytes, got {got}")
            }
            ImageError::Unsupported { from, to } => {
                write!(f, "unsupported conversion: {from:?} -> {to:?}")
            }
        }
    }
}

impl std::error::Error for ImageError {}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}
