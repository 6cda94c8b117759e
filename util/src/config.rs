//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from a local `.env` file and the process
//! environment. It provides thread-safe access and mutation for tests or runtime
//! overrides.
//!
//! Free-function accessors (`config::host()`, `config::openai_api_key()`, ...) are
//! provided at the bottom of the module so callers don't have to hold the read
//! guard themselves.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_chat_model: String,
    pub openai_completion_model: String,
    pub openai_timeout_secs: u64,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}

fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparsable config value");
            default
        }),
        Err(_) => default,
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every value has a default, so this never fails. A missing
    /// `OPENAI_API_KEY` is only detected when the first outbound call is made.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: var_or("APP_ENV", "development"),
            project_name: var_or("PROJECT_NAME", "essay-coach"),
            log_level: var_or("LOG_LEVEL", "api=info,grader=info,db=info"),
            log_file: var_or("LOG_FILE", "api.log"),
            log_to_stdout: var_or("LOG_TO_STDOUT", "false") == "true",
            database_path: var_or("DATABASE_PATH", "data/essays.db"),
            host: var_or("HOST", "127.0.0.1"),
            port: parsed_or("PORT", 5000),
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_base_url: var_or("OPENAI_BASE_URL", "https://api.openai.com/v1"),
            openai_chat_model: var_or("OPENAI_CHAT_MODEL", "gpt-4"),
            openai_completion_model: var_or("OPENAI_COMPLETION_MODEL", "gpt-3.5-turbo-instruct"),
            openai_timeout_secs: parsed_or("OPENAI_TIMEOUT_SECS", 60),
        }
    }

    /// Returns a shared reference to the global configuration.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
            *guard = AppConfig::from_env();
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_port(value: u16) {
        AppConfig::set_field(|cfg| cfg.port = value);
    }

    pub fn set_openai_api_key(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.openai_api_key = value.into());
    }

    /// Override the upstream base URL (tests point this at a local server).
    pub fn set_openai_base_url(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.openai_base_url = value.into());
    }

    pub fn set_openai_chat_model(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.openai_chat_model = value.into());
    }

    pub fn set_openai_completion_model(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.openai_completion_model = value.into());
    }

    pub fn set_openai_timeout_secs(value: u64) {
        AppConfig::set_field(|cfg| cfg.openai_timeout_secs = value);
    }
}

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn openai_api_key() -> String {
    AppConfig::global().openai_api_key.clone()
}

pub fn openai_base_url() -> String {
    AppConfig::global().openai_base_url.clone()
}

pub fn openai_chat_model() -> String {
    AppConfig::global().openai_chat_model.clone()
}

pub fn openai_completion_model() -> String {
    AppConfig::global().openai_completion_model.clone()
}

pub fn openai_timeout_secs() -> u64 {
    AppConfig::global().openai_timeout_secs
}
