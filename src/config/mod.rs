use crate::constants::{
    DEFAULT_API_DOMAIN, DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_OUTPUT_PATH, DEFAULT_TEAMS,
    LOG_FILE_NAME, env_vars,
};
use crate::error::AppError;
use crate::report::{DisplayLocale, FormatterConfig, ReportSettings, StandingsLayout, TimeZoneSetting};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
///
/// Every field has a default, so a partial or missing config file is fine.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// API base URL. A bare domain gets an https:// prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Tracked team codes, in display order.
    #[serde(default = "default_teams")]
    pub teams: Vec<String>,
    /// Where the HTML page is written.
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// HTTP timeout in seconds for each API request.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// `local`, a UTC offset such as `+02:00`, or an IANA zone name.
    #[serde(default)]
    pub timezone: TimeZoneSetting,
    /// `fi`, `en` or `none` (no weekday names).
    #[serde(default)]
    pub locale: DisplayLocale,
    #[serde(default = "default_true")]
    pub show_live_marker: bool,
    #[serde(default = "default_true")]
    pub show_game_list: bool,
    #[serde(default)]
    pub split_by_state: bool,
    /// Limit the standings table to tracked teams.
    #[serde(default)]
    pub standings_tracked_only: bool,
    #[serde(default)]
    pub standings_layout: StandingsLayout,
}

fn default_api_domain() -> String {
    DEFAULT_API_DOMAIN.to_string()
}

fn default_teams() -> Vec<String> {
    DEFAULT_TEAMS.iter().map(|t| t.to_string()).collect()
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            teams: default_teams(),
            output_path: default_output_path(),
            http_timeout_seconds: default_http_timeout(),
            log_file_path: None,
            timezone: TimeZoneSetting::default(),
            locale: DisplayLocale::default(),
            show_live_marker: true,
            show_game_list: true,
            split_by_state: false,
            standings_tracked_only: false,
            standings_layout: StandingsLayout::default(),
        }
    }
}

/// Splits a comma separated team list, dropping empty items.
pub fn parse_team_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

impl Config {
    /// Loads configuration from `path`, or from the default config file location.
    /// Environment variables can override config file values.
    ///
    /// A missing default file means built-in defaults; a missing file that was
    /// asked for explicitly is an error. The result is not validated yet, so
    /// command line overrides can still replace bad values; call
    /// [`Config::validate`] once they are applied.
    ///
    /// # Environment Variables
    /// - `NHL_REPORT_API_DOMAIN` - Override API domain
    /// - `NHL_REPORT_TEAMS` - Override tracked teams (comma separated)
    /// - `NHL_REPORT_OUTPUT` - Override output path
    /// - `NHL_REPORT_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `NHL_REPORT_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Missing, unreadable or undecodable configuration
    pub async fn load(path: Option<&str>) -> Result<Self, AppError> {
        let config_path = path.map(str::to_string).unwrap_or_else(get_config_path);

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else if path.is_some() {
            return Err(AppError::config_error(format!(
                "Config file not found: {config_path}"
            )));
        } else {
            Config::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.normalize();

        Ok(config)
    }

    /// Applies overrides from a variable lookup. Unparseable timeouts are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_domain) = lookup(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Some(teams) = lookup(env_vars::TEAMS) {
            self.teams = parse_team_list(&teams);
        }

        if let Some(output) = lookup(env_vars::OUTPUT) {
            self.output_path = output;
        }

        if let Some(timeout) = lookup(env_vars::HTTP_TIMEOUT).and_then(|s| s.trim().parse::<u64>().ok()) {
            self.http_timeout_seconds = timeout;
        }

        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Uppercases team codes, drops repeats, and prefixes a bare domain with https://.
    pub fn normalize(&mut self) {
        let mut teams: Vec<String> = Vec::with_capacity(self.teams.len());
        for team in &self.teams {
            let code = team.trim().to_ascii_uppercase();
            if !code.is_empty() && !teams.contains(&code) {
                teams.push(code);
            }
        }
        self.teams = teams;

        self.api_domain = self.api_domain.trim().to_string();
        if !self.api_domain.is_empty()
            && !self.api_domain.starts_with("http://")
            && !self.api_domain.starts_with("https://")
        {
            self.api_domain = format!("https://{}", self.api_domain);
        }
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Formatting options derived from this configuration.
    pub fn formatter_config(&self) -> FormatterConfig {
        FormatterConfig {
            timezone: self.timezone,
            locale: self.locale,
            show_live_marker: self.show_live_marker,
        }
    }

    /// Page layout options derived from this configuration.
    pub fn report_settings(&self) -> ReportSettings {
        ReportSettings {
            formatter: self.formatter_config(),
            show_game_list: self.show_game_list,
            split_by_state: self.split_by_state,
            standings_layout: self.standings_layout,
        }
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Log file used when none is configured.
    pub fn default_log_file_path() -> String {
        Path::new(&get_log_dir_path())
            .join(LOG_FILE_NAME)
            .to_string_lossy()
            .to_string()
    }

    /// Displays the effective configuration to stdout.
    ///
    /// # Arguments
    /// * `config_path` - Where the configuration was looked up, shown as the source
    pub fn display(&self, config_path: &str) {
        let source = if Path::new(config_path).exists() {
            config_path.to_string()
        } else {
            format!("{config_path} (not found, using defaults)")
        };

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{source}");
        println!("────────────────────────────────────");
        println!("API Domain:");
        println!("{}", self.api_domain);
        println!("────────────────────────────────────");
        println!("Teams:");
        println!("{}", self.teams.join(", "));
        println!("────────────────────────────────────");
        println!("Output File:");
        println!("{}", self.output_path);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", self.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Time Zone / Locale:");
        println!("{} / {}", self.timezone, self.locale.tag());
        println!("────────────────────────────────────");
        println!("Layout:");
        println!(
            "game list: {}, split by state: {}, live marker: {}",
            self.show_game_list, self.split_by_state, self.show_live_marker
        );
        println!(
            "standings: {}{}",
            self.standings_layout,
            if self.standings_tracked_only {
                " (tracked teams only)"
            } else {
                ""
            }
        );
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{}", Self::default_log_file_path());
            println!("(Default location)");
        }
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a file path without applying overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
