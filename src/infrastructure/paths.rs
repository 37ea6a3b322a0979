//! Filesystem location management.
//!
//! This module resolves the platform directories used for configuration and
//! log storage, following the XDG conventions the `dirs` crate implements.

use std::path::PathBuf;

/// Returns the data directory for octoseek storage.
///
/// Resolves to the platform's local data directory plus an `octoseek`
/// component, e.g. `~/.local/share/octoseek` on Linux. Falls back to the
/// current directory when the platform reports no data directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("octoseek")
}

/// Returns the path of the log file inside the data directory.
#[must_use]
pub fn log_file_path() -> PathBuf {
    get_data_dir().join("octoseek.log")
}

/// Returns the path of the user configuration file.
///
/// Resolves to the platform's config directory plus `octoseek/config.toml`,
/// e.g. `~/.config/octoseek/config.toml` on Linux.
#[must_use]
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("octoseek")
        .join("config.toml")
}
