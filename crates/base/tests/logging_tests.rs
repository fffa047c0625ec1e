use base::logging::{LogSettings, StdoutLogger, format_timestamp};
use log::{LevelFilter, Log};

#[test]
fn test_level_name_parsing() {
    assert_eq!(LogSettings::from_level_name(Some("warn")).level, LevelFilter::Warn);
    assert_eq!(LogSettings::from_level_name(Some(" TRACE ")).level, LevelFilter::Trace);
    assert_eq!(LogSettings::from_level_name(Some("off")).level, LevelFilter::Off);
}

#[test]
fn test_unknown_level_falls_back_to_default() {
    assert_eq!(LogSettings::from_level_name(Some("loud")), LogSettings::default());
    assert_eq!(LogSettings::from_level_name(None), LogSettings::default());
}

#[test]
fn test_stdout_logger_respects_level() {
    let logger = StdoutLogger::new(LogSettings {
        level: LevelFilter::Info,
    });

    let info = log::MetadataBuilder::new().level(log::Level::Info).build();
    let trace = log::MetadataBuilder::new().level(log::Level::Trace).build();

    assert!(logger.enabled(&info));
    assert!(!logger.enabled(&trace));
}

#[test]
fn test_record_format() {
    let record = log::RecordBuilder::new()
        .level(log::Level::Warn)
        .target("test")
        .file(Some("camera.rs"))
        .line(Some(42))
        .args(format_args!("camera hiccup"))
        .build();

    let line = StdoutLogger::format_record(&record);

    assert!(line.contains("[WARN]"));
    assert!(line.contains("camera.rs:42"));
    assert!(line.ends_with("- camera hiccup"));
}

#[test]
fn test_format_timestamp_structure() {
    let ts = format_timestamp();
    assert_eq!(ts.len(), 19);
    assert_eq!(&ts[4..5], "-");
    assert_eq!(&ts[10..11], "T");
    assert_eq!(&ts[13..14], ":");
}
