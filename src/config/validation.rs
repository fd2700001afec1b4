use crate::error::AppError;

use super::Config;

/// A team code is two to four ASCII letters, e.g. `NJ` or `MTL`.
pub fn is_valid_team_code(code: &str) -> bool {
    (2..=4).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validates the API domain.
///
/// # Validation Rules
/// - API domain cannot be empty
/// - API domain must be a valid URL or domain name
pub fn validate_api_domain(api_domain: &str) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // Without a protocol it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    Ok(())
}

/// Validates the configuration settings
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(AppError)` - Configuration validation failed
///
/// # Validation Rules
/// - API domain rules from [`validate_api_domain`]
/// - At least one team, every code two to four ASCII letters
/// - HTTP timeout greater than zero
/// - Output path cannot be empty
/// - If log file path is provided, it cannot be empty
///
/// Validation never touches the filesystem; the log directory is created by
/// logging setup.
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_api_domain(&config.api_domain)?;

    if config.teams.is_empty() {
        return Err(AppError::config_error("At least one team must be configured"));
    }
    if let Some(bad) = config.teams.iter().find(|code| !is_valid_team_code(code)) {
        return Err(AppError::config_error(format!(
            "Invalid team code '{bad}': expected 2-4 letters such as MTL"
        )));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be greater than zero seconds",
        ));
    }

    if config.output_path.trim().is_empty() {
        return Err(AppError::config_error("Output path cannot be empty"));
    }

    if config.log_file_path.as_deref().is_some_and(str::is_empty) {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}
