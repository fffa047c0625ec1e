use {
    base::Vec2,
    image::{Image, ImageError},
    minifb::{Key, KeyRepeat, Window, WindowOptions},
    std::fmt,
};

pub const WINDOW_TITLE: &str = "Pose - ESC to exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Escape,
    Other,
}

#[derive(Debug)]
pub enum DisplayError {
    Window(String),
    Frame(ImageError),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::Window(msg) => write!(f, "window error: {}", msg),
            DisplayError::Frame(err) => write!(f, "cannot display frame: {}", err),
        }
    }
}

impl std::error::Error for DisplayError {}

impl From<minifb::Error> for DisplayError {
    fn from(err: minifb::Error) -> Self {
        DisplayError::Window(err.to_string())
    }
}

impl From<ImageError> for DisplayError {
    fn from(err: ImageError) -> Self {
        DisplayError::Frame(err)
    }
}

/// Somewhere to show frames and read keys from.
pub trait Display {
    fn show(&mut self, frame: &Image) -> Result<(), DisplayError>;

    /// Key pressed since the last poll, if any.
    fn poll_key(&mut self) -> Option<KeyPress>;

    fn is_open(&self) -> bool;
}

pub struct MinifbDisplay {
    window: Window,
    size: Vec2<usize>,
}

impl MinifbDisplay {
    pub fn new(size: Vec2<usize>, target_fps: Option<usize>) -> Result<Self, DisplayError> {
        let mut window = Window::new(WINDOW_TITLE, size.x, size.y, WindowOptions::default())?;
        if let Some(fps) = target_fps {
            window.set_target_fps(fps);
        }
        log::debug!("display: {}x{} window open", size.x, size.y);
        Ok(Self { window, size })
    }
}

impl Display for MinifbDisplay {
    fn show(&mut self, frame: &Image) -> Result<(), DisplayError> {
        let buffer = image::to_u32(frame)?;
        self.window
            .update_with_buffer(&buffer, frame.width(), frame.height())?;
        self.size = frame.size;
        Ok(())
    }

    fn poll_key(&mut self) -> Option<KeyPress> {
        self.window.update();
        if self.window.is_key_down(Key::Escape) {
            return Some(KeyPress::Escape);
        }
        if self.window.get_keys_pressed(KeyRepeat::No).is_empty() {
            None
        } else {
            Some(KeyPress::Other)
        }
    }

    fn is_open(&self) -> bool {
        self.window.is_open()
    }
}

impl Drop for MinifbDisplay {
    fn drop(&mut self) {
        log::debug!("display: closing {}x{} window", self.size.x, self.size.y);
    }
}
