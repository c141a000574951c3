use std::{env, path::PathBuf};

use chrono::Local;

pub const PROGRAM_NAME: &str = "filecat";
pub const PROGRAM_LOG_LEVEL: &str = "FILECAT_LOG_LEVEL";

/// Overrides the location of the catalog file loaded at session start.
pub const CATALOG_ENV: &str = "FILECAT_CATALOG";
pub const CATALOG_FILE_NAME: &str = "catalog.txt";

/// Record dates are kept as `DD.MM.YYYY` strings and never parsed.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

pub const DEFAULT_SORT_KEY: &str = "name";

pub fn xdg_or_home(xdg_var: &str, home_suffix: &str) -> PathBuf {
    match env::var_os(xdg_var) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(home_suffix),
    }
}

/// Directory holding the catalog file.
pub fn data_dir() -> PathBuf {
    xdg_or_home("XDG_DATA_HOME", ".local/share").join(PROGRAM_NAME)
}

/// Directory for session state such as the history log.
pub fn state_dir() -> Option<PathBuf> {
    if let Ok(xdg_state) = env::var("XDG_STATE_HOME")
        && !xdg_state.is_empty()
    {
        return Some(PathBuf::from(xdg_state).join(PROGRAM_NAME));
    }

    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|p| p.join(PROGRAM_NAME))
}

/// Catalog file imported when a session starts, if it exists.
///
/// The file uses the bulk-import line format.
pub fn default_catalog_path() -> PathBuf {
    match env::var_os(CATALOG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => data_dir().join(CATALOG_FILE_NAME),
    }
}

/// Current local date in the catalog's date format.
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
