use log::{error, info, warn, LevelFilter};
use std::path::Path;

// For file-based logging with rotation
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

/// Environment variable that overrides the file log level
pub const LOG_ENV_VAR: &str = "PHOTO_DEDUP_LOG";

/// Initialize the logger with timestamp, log level, and module path
/// Logs will be written to file only to avoid interfering with progress bars
pub fn init_logger(log_dir: &Path, level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(log_dir)?;

    let log_file_path = log_dir.join("photo-dedup.log");
    let archived_logs_pattern = format!("{}/photo-dedup.{{}}.log", log_dir.display());

    // Rotate at 10MB, keep 5 archived log files
    let file_trigger = SizeTrigger::new(10 * 1024 * 1024);
    let file_roller = FixedWindowRoller::builder()
        .build(&archived_logs_pattern, 5)
        .map_err(|e| format!("Failed to create log roller: {}", e))?;
    let compound_policy = CompoundPolicy::new(Box::new(file_trigger), Box::new(file_roller));

    let rolling_file = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] [{M}:{L}] - {m}{n}",
        )))
        .build(&log_file_path, Box::new(compound_policy))
        .map_err(|e| format!("Failed to create log appender: {}", e))?;

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(rolling_file)))
        .build(Root::builder().appender("file").build(LevelFilter::Trace))
        .map_err(|e| format!("Failed to build log config: {}", e))?;

    log4rs::init_config(config).map_err(|e| format!("Failed to initialize log4rs: {}", e))?;

    let level = std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(level);
    log::set_max_level(level);

    info!("Photo dedup started");
    info!("Logging to file: {}", log_file_path.display());
    Ok(())
}

/// Log an image that could not be fingerprinted
pub fn log_decode_error(path: &Path, error: &dyn std::error::Error) {
    warn!(
        "Fingerprint failed - Path: {}, Error: {}",
        path.display(),
        error
    );
}

/// Log a deletion that did not happen
pub fn log_deletion_error(path: &Path, error: &dyn std::error::Error) {
    error!(
        "File operation failed - Operation: DELETE, Path: {}, Error: {}",
        path.display(),
        error
    );
}

/// Log file system modification
pub fn log_fs_modification(operation: &str, path: &Path, details: Option<&str>) {
    match details {
        Some(details) => info!(
            "FS CHANGE - Operation: {}, Path: {}, Details: {}",
            operation,
            path.display(),
            details
        ),
        None => info!("FS CHANGE - Operation: {}, Path: {}", operation, path.display()),
    }
}
