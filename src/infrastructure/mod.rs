//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves the platform directories the application stores its
//! configuration and logs in.

pub mod paths;

pub use paths::{config_file_path, get_data_dir, log_file_path};
