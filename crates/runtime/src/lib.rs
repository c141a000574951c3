mod config;
pub mod history;
pub mod logging;

pub use config::{
    CATALOG_ENV, CATALOG_FILE_NAME, DATE_FORMAT, DEFAULT_SORT_KEY, PROGRAM_LOG_LEVEL,
    PROGRAM_NAME, data_dir, default_catalog_path, state_dir, today, xdg_or_home,
};

pub use logging::init;
