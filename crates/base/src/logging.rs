use {
    log::{LevelFilter, Log, Metadata, Record},
    std::{
        io::Write,
        str::FromStr,
        time::{SystemTime, UNIX_EPOCH},
    },
};

/// Level selection for the process-wide logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
}

impl Default for LogSettings {
    /// Debug builds log everything down to Debug, release builds stop at Info.
    fn default() -> Self {
        let level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        Self { level }
    }
}

impl LogSettings {
    /// Build settings from an optional level name such as `"warn"`.
    ///
    /// Unknown names fall back to the build default.
    pub fn from_level_name(name: Option<&str>) -> Self {
        match name.map(|name| LevelFilter::from_str(name.trim())) {
            Some(Ok(level)) => Self { level },
            _ => Self::default(),
        }
    }
}

/// A logger that writes one line per record to stdout.
pub struct StdoutLogger {
    level: LevelFilter,
}

impl StdoutLogger {
    pub fn new(settings: LogSettings) -> Self {
        Self {
            level: settings.level,
        }
    }

    /// Render a record the way it is printed.
    pub fn format_record(record: &Record) -> String {
        format!(
            "{} [{}] [thread:{:?}] {}:{} - {}",
            format_timestamp(),
            record.level(),
            std::thread::current().id(),
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
            record.args()
        )
    }
}

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        println!("{}", Self::format_record(record));
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

/// Format current time as YYYY-MM-DDTHH:MM:SS (UTC)
pub fn format_timestamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    format_unix_seconds(secs)
}

pub fn format_unix_seconds(secs: u64) -> String {
    let (year, month, day) = civil_from_days((secs / 86400) as i64);
    let time_of_day = secs % 86400;
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

// Howard Hinnant's days-to-civil algorithm (public domain)
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

/// Install `StdoutLogger` as the global logger.
///
/// This can only be called once per process. Subsequent calls are silently ignored.
pub fn init_stdout_logger(settings: LogSettings) {
    let logger: &'static StdoutLogger = Box::leak(Box::new(StdoutLogger::new(settings)));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(settings.level);
    }
}

/// Log a fatal error and exit the process
///
/// Logs at Error level (since the log crate has no Fatal level),
/// flushes stdout, and calls std::process::exit(1). Anything still alive
/// on the caller's stack is not dropped, so call this only after handles
/// have been released.
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
        $crate::log::logger().flush();
        std::process::exit(1);
    }};
}
