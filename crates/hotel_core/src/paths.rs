use std::path::{Path, PathBuf};

/// Per-user data directory (`~/.frontdesk`).
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".frontdesk")
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

pub fn database_path(data_dir: &Path) -> PathBuf {
    data_dir.join("hotel.db")
}

pub fn transcripts_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("transcripts")
}

/// Create the data directory if it does not exist yet.
pub fn ensure_data_dir(data_dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(data_dir)
}
