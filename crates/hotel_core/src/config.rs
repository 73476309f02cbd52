use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::paths;

pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2:1b";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration, resolved from defaults, then `config.toml` in the
/// data directory, then environment variables. Later layers win.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: PathBuf,
    pub ollama_base_url: String,
    pub ollama_model: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    /// When false the receptionist answers with the data layer's own wording.
    pub llm_enabled: bool,
}

/// The on-disk shape: every field optional so partial files work.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    ollama_base_url: Option<String>,
    ollama_model: Option<String>,
    port: Option<u16>,
    request_timeout_secs: Option<u64>,
    llm_enabled: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: paths::default_data_dir(),
            ollama_base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
            ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
            port: DEFAULT_PORT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            llm_enabled: true,
        }
    }
}

impl Config {
    /// Resolve the configuration. `data_dir` overrides the default location
    /// (and the `HOTEL_DATA_DIR` environment variable overrides both).
    pub fn load(data_dir: Option<PathBuf>) -> Self {
        let mut config = Config {
            data_dir: data_dir.unwrap_or_else(paths::default_data_dir),
            ..Config::default()
        };
        if let Some(dir) = std::env::var_os("HOTEL_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        let file_path = paths::config_path(&config.data_dir);
        if file_path.exists() {
            if let Ok(content) = std::fs::read_to_string(&file_path) {
                match toml::from_str::<ConfigFile>(&content) {
                    Ok(file) => config.apply_file(file),
                    Err(e) => log::warn!("ignoring malformed {}: {e}", file_path.display()),
                }
            }
        }

        config.apply_env();
        config
    }

    pub fn database_path(&self) -> PathBuf {
        paths::database_path(&self.data_dir)
    }

    pub fn transcripts_dir(&self) -> PathBuf {
        paths::transcripts_dir(&self.data_dir)
    }

    fn apply_file(&mut self, file: ConfigFile) {
        if let Some(url) = file.ollama_base_url {
            self.ollama_base_url = url;
        }
        if let Some(model) = file.ollama_model {
            self.ollama_model = model;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(timeout) = file.request_timeout_secs {
            self.request_timeout_secs = timeout;
        }
        if let Some(enabled) = file.llm_enabled {
            self.llm_enabled = enabled;
        }
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("OLLAMA_BASE_URL") {
            self.ollama_base_url = url;
        }
        if let Ok(model) = std::env::var("OLLAMA_MODEL") {
            self.ollama_model = model;
        }
        if let Ok(port) = std::env::var("APP_PORT") {
            if let Ok(port) = port.parse() {
                self.port = port;
            }
        }
    }
}
