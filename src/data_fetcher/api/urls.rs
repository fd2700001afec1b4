//! URL building utilities for API endpoints

use crate::constants::endpoints;

fn join(api_domain: &str, path: &str) -> String {
    format!("{}{path}", api_domain.trim_end_matches('/'))
}

/// Builds the URL of the current week's league schedule.
///
/// # Example
/// ```
/// use nhl_report::data_fetcher::api::build_schedule_url;
///
/// let url = build_schedule_url("https://api-web.nhle.com/");
/// assert_eq!(url, "https://api-web.nhle.com/v1/schedule/now");
/// ```
pub fn build_schedule_url(api_domain: &str) -> String {
    join(api_domain, endpoints::SCHEDULE_NOW)
}

/// Builds the URL of the current league standings.
///
/// # Example
/// ```
/// use nhl_report::data_fetcher::api::build_standings_url;
///
/// let url = build_standings_url("https://api-web.nhle.com");
/// assert_eq!(url, "https://api-web.nhle.com/v1/standings/now");
/// ```
pub fn build_standings_url(api_domain: &str) -> String {
    join(api_domain, endpoints::STANDINGS_NOW)
}
