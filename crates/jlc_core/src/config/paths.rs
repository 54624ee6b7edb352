//! Platform locations for settings, logs and the default output directory.

use std::env;
use std::path::PathBuf;

use directories::{ProjectDirs, UserDirs};

/// Organization half of the settings scope.
pub const ORGANIZATION: &str = "Knartz Software Bude";
/// Application half of the settings scope.
pub const APPLICATION: &str = "JLC2KiCadGUI";

/// Environment variable overriding the settings file location.
pub const CONFIG_PATH_ENV: &str = "JLC2KICAD_GUI_CONFIG";

const SETTINGS_FILE: &str = "settings.toml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", ORGANIZATION, APPLICATION)
}

/// Settings file path.
///
/// `JLC2KICAD_GUI_CONFIG` wins; otherwise the platform config directory
/// for the organization/application pair; otherwise `.config/settings.toml`
/// relative to the working directory.
pub fn default_config_path() -> PathBuf {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    project_dirs()
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
        .unwrap_or_else(|| PathBuf::from(".config").join(SETTINGS_FILE))
}

/// Directory for this application's own log files.
pub fn default_logs_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from(".logs"))
}

/// The user's Documents folder, used when no output directory is remembered.
pub fn documents_dir() -> PathBuf {
    if let Some(docs) = UserDirs::new().and_then(|u| u.document_dir().map(|d| d.to_path_buf())) {
        return docs;
    }
    UserDirs::new()
        .map(|u| u.home_dir().join("Documents"))
        .unwrap_or_else(|| PathBuf::from("Documents"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_ends_with_settings_file() {
        if env::var_os(CONFIG_PATH_ENV).is_some() {
            return;
        }
        assert!(default_config_path().ends_with(SETTINGS_FILE));
    }

    #[test]
    fn logs_dir_is_named_logs() {
        assert!(default_logs_dir().ends_with("logs") || default_logs_dir().ends_with(".logs"));
    }
}
