//! Application-wide constants and configuration defaults
//!
//! This module centralizes magic numbers, default settings and the
//! user-facing Finnish strings of the report.

/// Default API domain for the NHL web API
pub const DEFAULT_API_DOMAIN: &str = "https://api-web.nhle.com";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 2;

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "index.html";

/// Teams tracked when nothing else is configured
pub const DEFAULT_TEAMS: [&str; 4] = ["ANA", "CAR", "DAL", "MTL"];

/// Default display offset: UTC+2
pub const DEFAULT_TIMEZONE: &str = "+02:00";

/// Default weekday locale
pub const DEFAULT_LOCALE: &str = "fi";

/// Name of the application directory under the platform config dir
pub const APP_DIR_NAME: &str = "nhl_report";

/// Default log file name
pub const LOG_FILE_NAME: &str = "nhl_report.log";

/// API endpoint paths
pub mod endpoints {
    /// Current week's league schedule
    pub const SCHEDULE_NOW: &str = "/v1/schedule/now";

    /// Current league standings
    pub const STANDINGS_NOW: &str = "/v1/standings/now";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "NHL_REPORT_API_DOMAIN";

    /// Comma separated team list override
    pub const TEAMS: &str = "NHL_REPORT_TEAMS";

    /// Output path override
    pub const OUTPUT: &str = "NHL_REPORT_OUTPUT";

    /// HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "NHL_REPORT_HTTP_TIMEOUT";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "NHL_REPORT_LOG_FILE";
}

/// Finnish texts shown in the generated page
pub mod texts {
    pub const PAGE_TITLE: &str = "NHL tulokset ja sarjataulukko";
    pub const PAGE_HEADING: &str = "NHL tulokset ja tulevat pelit";
    pub const LAST_GAME_LABEL: &str = "Edellinen";
    pub const NEXT_GAME_LABEL: &str = "Seuraava";
    pub const NO_DATA: &str = "Ei tietoja";
    pub const NO_GAMES: &str = "Ei otteluita valituille joukkueille.";
    pub const GAMES_HEADING: &str = "Ottelut";
    pub const FINISHED_HEADING: &str = "Päättyneet";
    pub const UPCOMING_HEADING: &str = "Tulevat";
    pub const STANDINGS_HEADING: &str = "Sarjataulukko";
    pub const STANDINGS_UNAVAILABLE: &str = "Sarjataulukko ei saatavilla";
    pub const UPDATED_LABEL: &str = "Päivitetty";
    pub const LIVE_MARKER: &str = "(kesken)";
    pub const TIME_SEPARATOR: &str = "klo";
}
