use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq)]
pub enum Device {
    Cpu,
    Cuda { device_id: i32 },
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "CPU"),
            Device::Cuda { device_id } => write!(f, "CUDA(device_id={device_id})"),
        }
    }
}

/// Parses `cpu`, `cuda` or `cuda:<id>`, ignoring case.
impl FromStr for Device {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.split_once(':') {
            None if name == "cpu" => Ok(Device::Cpu),
            None if name == "cuda" => Ok(Device::Cuda { device_id: 0 }),
            Some(("cuda", id)) => id
                .parse::<i32>()
                .ok()
                .filter(|id| *id >= 0)
                .map(|device_id| Device::Cuda { device_id })
                .ok_or_else(|| format!("invalid CUDA device id: {id:?}")),
            _ => Err(format!("unknown device: {s:?}")),
        }
    }
}
