use std::path::PathBuf;

/// Overrides the config directory when set
pub const CONFIG_DIR_ENV: &str = "DISRUPTION_CONFIG_DIR";

/// Flag store file name inside the config directory
pub const STATE_FILE_NAME: &str = "state.toml";

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "disruption.log";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Config directory: `$DISRUPTION_CONFIG_DIR`, else `~/.config/disruption`
/// on every OS
pub fn get_config_dir() -> PathBuf {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => get_home_dir().join(".config").join("disruption"),
    }
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory the log file is written to
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("disruption")
}

/// Expand `~` and `~/...`; anything else is returned as given
pub fn expand_path(path_str: &str) -> PathBuf {
    if path_str == "~" {
        get_home_dir()
    } else if let Some(rest) = path_str.strip_prefix("~/") {
        get_home_dir().join(rest)
    } else {
        PathBuf::from(path_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path() {
        assert_eq!(expand_path("~"), get_home_dir());
        assert_eq!(expand_path("~/x.toml"), get_home_dir().join("x.toml"));
        assert_eq!(expand_path("/etc/x.toml"), PathBuf::from("/etc/x.toml"));
        assert_eq!(expand_path("rel/x.toml"), PathBuf::from("rel/x.toml"));
    }

    #[test]
    fn test_config_path_in_config_dir() {
        assert!(get_config_path().starts_with(get_config_dir()));
        assert!(get_config_path().ends_with("config.toml"));
    }
}
