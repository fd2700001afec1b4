// src/data_fetcher/api/orchestrator.rs - Fetches both API documents for one report run

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{error, info, instrument, warn};

use crate::config::Config;
use crate::data_fetcher::models::{ScheduleResponse, StandingsResponse};

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::{build_schedule_url, build_standings_url};

/// Raw documents of one run. A `None` means the fetch failed and was already logged.
#[derive(Debug, Clone, Default)]
pub struct ReportData {
    pub schedule: Option<ScheduleResponse>,
    pub standings: Option<StandingsResponse>,
}

/// Fetches `url` and downgrades any failure to `None` after logging it.
async fn fetch_or_none<T: DeserializeOwned>(client: &Client, url: &str, what: &str) -> Option<T> {
    match fetch::<T>(client, url).await {
        Ok(document) => Some(document),
        Err(e) if e.is_not_found() => {
            warn!("No {what} available: {e}");
            None
        }
        Err(e) => {
            error!("Failed to fetch {what}: {e}");
            None
        }
    }
}

/// Fetches the schedule and the standings concurrently.
///
/// Never fails: each document is fetched once with the configured timeout and a
/// failed fetch leaves its slot empty, so the report can still be rendered from
/// whatever arrived.
///
/// # Example
/// ```rust,no_run
/// use nhl_report::config::Config;
/// use nhl_report::data_fetcher::api::fetch_report_data;
///
/// #[tokio::main]
/// async fn main() {
///     let data = fetch_report_data(&Config::default()).await;
///     println!("schedule available: {}", data.schedule.is_some());
/// }
/// ```
#[instrument(skip(config), fields(api_domain = %config.api_domain))]
pub async fn fetch_report_data(config: &Config) -> ReportData {
    let client = match create_http_client_with_timeout(config.http_timeout_seconds) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create HTTP client: {e}");
            return ReportData::default();
        }
    };

    let schedule_url = build_schedule_url(&config.api_domain);
    let standings_url = build_standings_url(&config.api_domain);

    let (schedule, standings) = tokio::join!(
        fetch_or_none::<ScheduleResponse>(&client, &schedule_url, "schedule"),
        fetch_or_none::<StandingsResponse>(&client, &standings_url, "standings"),
    );

    info!(
        schedule_ok = schedule.is_some(),
        standings_ok = standings.is_some(),
        "Finished fetching report data"
    );

    ReportData {
        schedule,
        standings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn config_for(api_domain: String) -> Config {
        Config {
            api_domain,
            http_timeout_seconds: 5,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_fetches_both_documents() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/schedule/now"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"gameWeek": []})))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/standings/now"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"standings": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let data = fetch_report_data(&config_for(mock_server.uri())).await;
        assert!(data.schedule.is_some());
        assert!(data.standings.is_some());
    }

    #[tokio::test]
    async fn test_unreachable_api_yields_empty_data() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let data = fetch_report_data(&config_for(format!("http://{addr}"))).await;
        assert!(data.schedule.is_none());
        assert!(data.standings.is_none());
    }

    #[tokio::test]
    async fn test_failed_standings_keep_schedule() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/schedule/now"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"gameWeek": []})))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/standings/now"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let data = fetch_report_data(&config_for(mock_server.uri())).await;
        assert!(data.schedule.is_some());
        assert!(data.standings.is_none());
    }

    #[tokio::test]
    async fn test_missing_schedule_keeps_standings() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/standings/now"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"standings": []})))
            .mount(&mock_server)
            .await;

        let data = fetch_report_data(&config_for(mock_server.uri())).await;
        assert!(data.schedule.is_none());
        assert!(data.standings.is_some());
    }

    #[tokio::test]
    async fn test_slow_schedule_times_out_and_keeps_standings() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/schedule/now"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"gameWeek": []}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/standings/now"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"standings": []})))
            .mount(&mock_server)
            .await;

        let config = Config {
            http_timeout_seconds: 1,
            ..config_for(mock_server.uri())
        };
        let data = fetch_report_data(&config).await;
        assert!(data.schedule.is_none());
        assert!(data.standings.is_some());
    }
}
