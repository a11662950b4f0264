//! Hawaii Climate Core Library
//!
//! Shared utilities for the climate API service:
//! - Configuration loading (XDG-compliant)
//! - File system checks for the dataset file
//! - Common constants

mod config;
pub mod fs;

pub use config::{find_config_file, get_xdg_config_dir, get_xdg_data_dir, load_config, ConfigSource};
pub use fs::{is_directory, is_file, path_exists};

/// Application name used for XDG paths
pub const APP_NAME: &str = "hawaii-climate";

/// Default API port
pub const DEFAULT_API_PORT: u16 = 5000;

/// Day offset of the trailing observation window served by the series endpoints
pub const TRAILING_WINDOW_DAYS: i64 = 365;
