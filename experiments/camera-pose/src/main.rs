use {
    base::{LogSettings, Vec2, init_stdout_logger, log_fatal},
    camera_pose::{MinifbDisplay, Settings, launch},
    inference::{PoseConfig, YoloPoseEstimator},
    video::{CameraConfig, V4l2Camera},
};

const FRAME_SIZE: Vec2<usize> = Vec2::new(640, 480);

async fn run(settings: Settings) -> anyhow::Result<()> {
    let pose_config = PoseConfig::default()
        .with_static_image_mode(false)
        .with_model_complexity(settings.model_complexity)
        .with_min_detection_confidence(0.5)
        .with_min_tracking_confidence(0.5);
    let estimator = YoloPoseEstimator::new(&settings.model_dir, pose_config, &settings.device)?;

    let camera_config = CameraConfig::default()
        .with_device(settings.camera_device.clone())
        .with_size(FRAME_SIZE);
    let target_fps = settings.target_fps;

    launch(
        || V4l2Camera::open(&camera_config),
        estimator,
        |size| MinifbDisplay::new(size, target_fps),
        settings.retry,
    )
    .await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            init_stdout_logger(LogSettings::default());
            log_fatal!("{}", err);
        }
    };
    init_stdout_logger(settings.log);
    log::debug!("settings: {:?}", settings);

    // everything acquired inside run() is dropped before we exit
    if let Err(err) = run(settings).await {
        log_fatal!("{:#}", err);
    }
}
