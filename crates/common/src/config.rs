use crate::error::SummarizerError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Summarizer application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenAI API key; absence disables AI summaries
    #[serde(skip_serializing)]
    pub openai_api_key: Option<String>,

    /// OpenAI-compatible API base URL
    pub openai_base_url: String,

    /// Chat completion model name
    pub llm_model: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Database base path (summary history lives here)
    pub db_base_path: PathBuf,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,

    /// Public URL advertised in the workflow descriptor
    pub public_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            llm_model: "gpt-3.5-turbo".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
            db_base_path: PathBuf::from("./db"),
            log_dir: PathBuf::from("./db/log"),
            log_level: "info".to_string(),
            public_url: String::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file.
    ///
    /// Directories are not created here; call `ensure_directories` once overrides are applied.
    pub fn from_env() -> Result<Self, SummarizerError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            llm_model: std::env::var("LLM_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            db_base_path: Self::get_env_path("DB_BASE_PATH")
                .unwrap_or_else(|| PathBuf::from("./db")),
            log_dir: Self::get_env_path("LOG_DIR")
                .unwrap_or_else(|| PathBuf::from("./db/log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
            public_url: std::env::var("PUBLIC_URL").unwrap_or_default(),
        };

        config.validate()?;

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), SummarizerError> {
        for dir in [&self.db_base_path, &self.log_dir] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    SummarizerError::config(format!(
                        "Failed to create directory {}: {}",
                        dir.display(),
                        e
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Whether an API key is available for AI summaries
    pub fn has_api_key(&self) -> bool {
        self.openai_api_key.is_some()
    }

    /// Summary history file
    pub fn history_path(&self) -> PathBuf {
        self.db_base_path.join("summary_history.json")
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SummarizerError> {
        if self.llm_model.is_empty() {
            return Err(SummarizerError::config("LLM model name cannot be empty"));
        }

        if !self.openai_base_url.starts_with("http://")
            && !self.openai_base_url.starts_with("https://") {
            return Err(SummarizerError::config(
                "OpenAI base URL must start with http:// or https://"
            ));
        }

        if self.server_port == 0 {
            return Err(SummarizerError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.llm_model, "gpt-3.5-turbo");
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_server_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.server_bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_history_path() {
        let config = AppConfig {
            db_base_path: PathBuf::from("/var/lib/summarizer"),
            ..AppConfig::default()
        };
        assert_eq!(
            config.history_path(),
            PathBuf::from("/var/lib/summarizer/summary_history.json")
        );
    }

    #[test]
    fn test_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let mut invalid_config = AppConfig::default();
        invalid_config.llm_model = String::new();
        assert!(invalid_config.validate().is_err());

        let mut invalid_url = AppConfig::default();
        invalid_url.openai_base_url = "api.openai.com".to_string();
        assert!(invalid_url.validate().is_err());
    }

    #[test]
    fn test_ensure_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let config = AppConfig {
            db_base_path: tmp.path().join("db"),
            log_dir: tmp.path().join("db/log"),
            ..AppConfig::default()
        };
        config.ensure_directories().unwrap();
        assert!(config.db_base_path.is_dir());
        assert!(config.log_dir.is_dir());
    }

    #[test]
    fn test_from_env_creates_no_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let db = tmp.path().join("env-db");
        std::env::set_var("DB_BASE_PATH", &db);
        std::env::set_var("LOG_DIR", db.join("log"));

        let config = AppConfig::from_env().unwrap();

        std::env::remove_var("DB_BASE_PATH");
        std::env::remove_var("LOG_DIR");
        assert_eq!(config.db_base_path, db);
        assert!(!db.exists());
    }

    #[test]
    fn test_api_key_never_serialized() {
        let config = AppConfig {
            openai_api_key: Some("sk-secret".to_string()),
            ..AppConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
    }
}
