use image::imageops::FilterType;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Filename fragments that conventionally mark a file as a copy
pub const DEFAULT_DELETE_PATTERNS: [&str; 5] = [" - Copy", " 1", "-Alienware", " copy", "Copy of"];

/// Edge length of the square grid images are resized to before hashing
pub const DEFAULT_NORMALIZED_SIZE: u32 = 256;

/// Resampling filter used when normalizing images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Log level for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Configuration for the scan and resolution process
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether to report planned deletions without removing anything
    pub dry_run: bool,

    /// Maximum directory depth for scanning
    pub max_depth: Option<usize>,

    /// Whether to follow symbolic links while walking
    pub follow_links: bool,

    /// Edge length of the normalized pixel grid
    pub normalized_size: u32,

    /// Filter used to resize images onto the normalized grid
    pub resample_filter: ResampleFilter,

    /// Filename substrings that mark a file as the copy to delete
    pub delete_patterns: Vec<String>,

    /// Number of threads used for fingerprinting (0 = auto)
    pub threads: usize,

    /// Whether to draw a progress bar while fingerprinting
    pub show_progress: bool,

    /// Log level
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dry_run: false,
            max_depth: None,
            follow_links: false,
            normalized_size: DEFAULT_NORMALIZED_SIZE,
            resample_filter: ResampleFilter::CatmullRom,
            delete_patterns: DEFAULT_DELETE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            threads: 0, // Auto
            show_progress: false,
            log_level: LogLevel::Info,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())
            .map_err(|e| Error::Configuration(format!("Failed to open config file: {}", e)))?;

        let config: Config = serde_json::from_reader(file)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())
            .map_err(|e| Error::Configuration(format!("Failed to create config file: {}", e)))?;

        serde_json::to_writer_pretty(file, self)
            .map_err(|e| Error::Configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.normalized_size == 0 {
            return Err(Error::Configuration(
                "Normalized size must be greater than zero".to_string(),
            ));
        }

        // An empty pattern is a substring of every name and would flag everything
        if self.delete_patterns.iter().any(|p| p.is_empty()) {
            return Err(Error::Configuration(
                "Delete patterns must not be empty strings".to_string(),
            ));
        }

        Ok(())
    }
}
