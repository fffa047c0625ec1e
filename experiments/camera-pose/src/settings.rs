use {
    crate::app::RetryPolicy,
    base::LogSettings,
    inference::{Device, ModelComplexity},
    std::{env, fmt, path::PathBuf, time::Duration},
};

/// Runtime settings read from `POSE_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub camera_device: PathBuf,
    pub model_dir: PathBuf,
    pub model_complexity: ModelComplexity,
    pub device: Device,
    pub retry: RetryPolicy,
    pub target_fps: Option<usize>,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsError {
    pub variable: &'static str,
    pub value: String,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value for {}: {:?}", self.variable, self.value)
    }
}

impl std::error::Error for SettingsError {}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build settings from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let camera_device = lookup("POSE_CAMERA_DEVICE")
            .unwrap_or_else(|| "/dev/video0".to_string())
            .into();
        let model_dir = lookup("POSE_MODEL_DIR")
            .unwrap_or_else(|| "models".to_string())
            .into();

        let level: u8 = parse(&lookup, "POSE_MODEL_COMPLEXITY")?.unwrap_or(0);
        let model_complexity = ModelComplexity::from_level(level).ok_or(SettingsError {
            variable: "POSE_MODEL_COMPLEXITY",
            value: level.to_string(),
        })?;

        let device = parse(&lookup, "POSE_DEVICE")?.unwrap_or(Device::Cpu);

        let retry = RetryPolicy {
            max_consecutive_failures: parse(&lookup, "POSE_MAX_READ_FAILURES")?,
            backoff: Duration::from_millis(parse(&lookup, "POSE_READ_BACKOFF_MS")?.unwrap_or(0)),
        };

        let target_fps = parse(&lookup, "POSE_TARGET_FPS")?.filter(|&fps: &usize| fps > 0);

        let log = LogSettings::from_level_name(lookup("POSE_LOG").as_deref());

        Ok(Self {
            camera_device,
            model_dir,
            model_complexity,
            device,
            retry,
            target_fps,
            log,
        })
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    variable: &'static str,
) -> Result<Option<T>, SettingsError> {
    match lookup(variable) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SettingsError { variable, value }),
    }
}
