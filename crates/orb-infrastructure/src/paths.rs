//! Path resolution for the app's config files.
//!
//! Everything lives under `~/.config/orb/`:
//!
//! ```text
//! ~/.config/orb/
//! ├── secret.json          # API keys
//! └── preferences.toml     # birth profile, daily reading cache
//! ```

use std::path::PathBuf;

use orb_core::{OrbError, Result};

/// Returns the app configuration directory, `~/.config/orb/`.
///
/// # Errors
///
/// Returns `Config` when the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| OrbError::config("cannot find home directory"))?;
    Ok(home.join(".config").join("orb"))
}

/// Returns the path of the preference store file.
///
/// # Errors
///
/// Returns `Config` when the home directory cannot be determined.
pub fn preferences_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("preferences.toml"))
}
