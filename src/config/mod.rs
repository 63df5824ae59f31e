use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_default_cache_file_path, get_log_dir_path};
use user_prompts::prompt_for_api_key;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Fixtures API domain. Should include https:// prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Key sent in the `x-apisports-key` header.
    #[serde(default)]
    pub api_key: String,
    /// Timezone the fixtures API renders kickoff timestamps in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// URL template of the listing-style broadcast guide. `{date}` expands to
    /// dd-mm-yyyy and `{iso_date}` to yyyy-mm-dd.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_guide_url: Option<String>,
    /// URL template of the card-style broadcast guide, same placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_guide_url: Option<String>,
    /// Location of the on-disk match cache. Defaults to the platform cache dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_file_path: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// League IDs tracked in addition to the built-in allow-list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_league_ids: Vec<i64>,
}

fn default_api_domain() -> String {
    constants::DEFAULT_API_DOMAIN.to_string()
}

fn default_timezone() -> String {
    constants::DEFAULT_TIMEZONE.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            api_key: String::new(),
            timezone: default_timezone(),
            primary_guide_url: None,
            secondary_guide_url: None,
            cache_file_path: None,
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            extra_league_ids: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts user for the API key and creates one.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `JOGOS_API_DOMAIN` - Override API domain
    /// - `JOGOS_API_KEY` - Override API key
    /// - `JOGOS_LOG_FILE` - Override log file path
    /// - `JOGOS_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    /// - `JOGOS_CACHE_FILE` - Override cache file location
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else if std::env::var(env_vars::API_KEY).is_ok() {
            Config::default()
        } else {
            let config = Config {
                api_key: prompt_for_api_key().await?,
                ..Config::default()
            };
            config.save().await?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.api_key = api_key;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Ok(cache_file_path) = std::env::var(env_vars::CACHE_FILE) {
            self.cache_file_path = Some(cache_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Resolved location of the on-disk match cache
    pub fn cache_file(&self) -> String {
        self.cache_file_path
            .clone()
            .unwrap_or_else(get_default_cache_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// The API key is masked; only its last four characters are shown.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Domain:");
            println!("{}", config.api_domain);
            println!("API Key:");
            println!("{}", mask_secret(&config.api_key));
            println!("Timezone:");
            println!("{}", config.timezone);
            println!("────────────────────────────────────");
            println!("Broadcast Guides:");
            println!(
                "{}",
                config.primary_guide_url.as_deref().unwrap_or("(not set)")
            );
            println!(
                "{}",
                config.secondary_guide_url.as_deref().unwrap_or("(not set)")
            );
            println!("────────────────────────────────────");
            println!("Cache File:");
            println!("{}", config.cache_file());
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            if !config.extra_league_ids.is_empty() {
                println!("Extra League IDs:");
                println!("{:?}", config.extra_league_ids);
            }
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/jogos_na_tv.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures the API
    /// domain has the https:// prefix.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let api_domain = if !self.api_domain.starts_with("https://") {
            format!("https://{}", self.api_domain.trim_start_matches("http://"))
        } else {
            self.api_domain.clone()
        };
        let content = toml::to_string_pretty(&Config {
            api_domain,
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let visible: String = secret.chars().skip(count - 4).collect();
    format!("{}{visible}", "*".repeat(count - 4))
}
