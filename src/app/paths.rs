// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - the `--config-dir` CLI argument, or a path passed by tests
//! 2. **Environment variable** (`TEE_STUDIO_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "TeeStudio";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TEE_STUDIO_CONFIG_DIR";

/// Returns the application config directory path.
///
/// - Linux: `~/.config/TeeStudio/`
/// - macOS: `~/Library/Application Support/TeeStudio/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\TeeStudio\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory with an optional override.
///
/// An empty environment variable is treated as unset.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(value) = std::env::var(ENV_CONFIG_DIR) {
        if !value.is_empty() {
            return Some(PathBuf::from(value));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
