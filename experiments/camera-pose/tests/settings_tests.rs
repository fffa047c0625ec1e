use {
    base::LogSettings,
    camera_pose::{RetryPolicy, Settings},
    inference::{Device, ModelComplexity},
    log::LevelFilter,
    std::{collections::HashMap, path::PathBuf, time::Duration},
};

fn settings(vars: &[(&str, &str)]) -> Result<Settings, camera_pose::settings::SettingsError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn test_defaults() {
    let settings = settings(&[]).unwrap();
    assert_eq!(settings.camera_device, PathBuf::from("/dev/video0"));
    assert_eq!(settings.model_dir, PathBuf::from("models"));
    assert_eq!(settings.model_complexity, ModelComplexity::Lite);
    assert_eq!(settings.device, Device::Cpu);
    assert_eq!(settings.retry, RetryPolicy::default());
    assert_eq!(settings.retry.max_consecutive_failures, None);
    assert_eq!(settings.retry.backoff, Duration::ZERO);
    assert_eq!(settings.target_fps, None);
    assert_eq!(settings.log, LogSettings::default());
}

#[test]
fn test_overrides() {
    let settings = settings(&[
        ("POSE_CAMERA_DEVICE", "/dev/video2"),
        ("POSE_MODEL_DIR", "/opt/models"),
        ("POSE_MODEL_COMPLEXITY", "2"),
        ("POSE_DEVICE", "cuda:1"),
        ("POSE_MAX_READ_FAILURES", "50"),
        ("POSE_READ_BACKOFF_MS", " 10 "),
        ("POSE_TARGET_FPS", "30"),
        ("POSE_LOG", "trace"),
    ])
    .unwrap();
    assert_eq!(settings.camera_device, PathBuf::from("/dev/video2"));
    assert_eq!(settings.model_dir, PathBuf::from("/opt/models"));
    assert_eq!(settings.model_complexity, ModelComplexity::Heavy);
    assert_eq!(settings.device, Device::Cuda { device_id: 1 });
    assert_eq!(settings.retry.max_consecutive_failures, Some(50));
    assert_eq!(settings.retry.backoff, Duration::from_millis(10));
    assert_eq!(settings.target_fps, Some(30));
    assert_eq!(settings.log.level, LevelFilter::Trace);
}

#[test]
fn test_zero_fps_means_unlimited() {
    let settings = settings(&[("POSE_TARGET_FPS", "0")]).unwrap();
    assert_eq!(settings.target_fps, None);
}

#[test]
fn test_invalid_values() {
    let err = settings(&[("POSE_MODEL_COMPLEXITY", "3")]).unwrap_err();
    assert_eq!(err.variable, "POSE_MODEL_COMPLEXITY");

    let err = settings(&[("POSE_MAX_READ_FAILURES", "many")]).unwrap_err();
    assert_eq!(err.variable, "POSE_MAX_READ_FAILURES");
    assert_eq!(err.value, "many");

    assert!(settings(&[("POSE_READ_BACKOFF_MS", "-5")]).is_err());

    let err = settings(&[("POSE_DEVICE", "gpu")]).unwrap_err();
    assert_eq!(err.variable, "POSE_DEVICE");
}

#[test]
fn test_unknown_log_level_falls_back() {
    let settings = settings(&[("POSE_LOG", "chatty")]).unwrap();
    assert_eq!(settings.log, LogSettings::default());
}
