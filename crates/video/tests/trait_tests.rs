use base::Vec2;
use image::{Image, PixelFormat};
use video::{Camera, VideoError};

// Scripted camera: alternates good and failed reads, then closes.
struct MockCamera {
    reads: usize,
    limit: usize,
}

impl Camera for MockCamera {
    async fn read(&mut self) -> Result<Image, VideoError> {
        if !self.is_open() {
            return Err(VideoError::Closed);
        }
        self.reads += 1;
        if self.reads % 2 == 0 {
            return Err(VideoError::Stream("dropped buffer".to_string()));
        }
        Ok(Image::filled(self.size(), PixelFormat::Bgr8, [1, 2, 3]))
    }

    fn is_open(&self) -> bool {
        self.reads < self.limit
    }

    fn size(&self) -> Vec2<usize> {
        Vec2::new(2, 2)
    }
}

async fn drain(camera: &mut impl Camera) -> (usize, usize) {
    let (mut good, mut bad) = (0, 0);
    while camera.is_open() {
        match camera.read().await {
            Ok(frame) if !frame.is_empty() => good += 1,
            _ => bad += 1,
        }
    }
    (good, bad)
}

#[tokio::test]
async fn test_camera_trait_polymorphism() {
    let mut cam = MockCamera { reads: 0, limit: 5 };
    assert_eq!(drain(&mut cam).await, (3, 2));
    assert!(matches!(cam.read().await, Err(VideoError::Closed)));
}

#[cfg(feature = "v4l2")]
#[test]
fn test_v4l2_camera_invalid_device() {
    let config = video::CameraConfig::default().with_device("/dev/nonexistent_camera");

    match video::V4l2Camera::open(&config) {
        Err(VideoError::Device(msg)) => assert!(!msg.is_empty()),
        other => panic!("Expected VideoError::Device, got {other:?}"),
    }
}
