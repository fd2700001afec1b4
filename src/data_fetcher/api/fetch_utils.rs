//! Generic HTTP fetching with status classification and error handling

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

use crate::error::AppError;

/// Fetches `url` once and decodes the JSON body into `T`.
///
/// There is no retry: a timeout, a connection failure, a non-2xx status or a body
/// that does not decode is returned as the matching `AppError` variant.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
///
/// # Returns
/// * `Result<T, AppError>` - Parsed response data or error
#[instrument(skip(client))]
pub async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            warn!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            // Tell malformed JSON apart from an unexpected structure
            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else if e.is_syntax() || e.is_eof() {
                Err(AppError::api_malformed_json(e.to_string(), url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::{
        create_http_client_with_timeout, create_test_http_client,
    };
    use std::time::{Duration, Instant};
    use crate::data_fetcher::models::ScheduleResponse;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    async fn serve_once(status: u16, body: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/schedule/now"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&mock_server)
            .await;
        mock_server
    }

    async fn fetch_schedule(mock_server: &MockServer) -> Result<ScheduleResponse, AppError> {
        let client = create_test_http_client();
        fetch(&client, &format!("{}/v1/schedule/now", mock_server.uri())).await
    }

    #[tokio::test]
    async fn test_fetch_decodes_success_body() {
        let mock_server = serve_once(200, r#"{"gameWeek":[{"date":"2026-10-16","games":[]}]}"#).await;
        let parsed = fetch_schedule(&mock_server).await.unwrap();
        assert_eq!(parsed.game_week.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_maps_not_found() {
        let mock_server = MockServer::start().await;
        let result = fetch_schedule(&mock_server).await;
        assert!(matches!(result, Err(AppError::ApiNotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_maps_rate_limit() {
        let mock_server = serve_once(429, "").await;
        let result = fetch_schedule(&mock_server).await;
        assert!(matches!(result, Err(AppError::ApiRateLimit { .. })));
    }

    #[tokio::test]
    async fn test_fetch_maps_client_error() {
        let mock_server = serve_once(403, "").await;
        let result = fetch_schedule(&mock_server).await;
        assert!(matches!(
            result,
            Err(AppError::ApiClientError { status: 403, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_maps_service_unavailable() {
        let mock_server = serve_once(503, "").await;
        let result = fetch_schedule(&mock_server).await;
        assert!(matches!(
            result,
            Err(AppError::ApiServiceUnavailable { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_maps_server_error() {
        let mock_server = serve_once(500, "").await;
        let result = fetch_schedule(&mock_server).await;
        assert!(matches!(
            result,
            Err(AppError::ApiServerError { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_empty_body_is_no_data() {
        let mock_server = serve_once(200, "").await;
        let result = fetch_schedule(&mock_server).await;
        assert!(matches!(result, Err(AppError::ApiNoData { .. })));
    }

    #[tokio::test]
    async fn test_fetch_html_body_is_malformed_json() {
        let mock_server = serve_once(200, "<html>maintenance</html>").await;
        let result = fetch_schedule(&mock_server).await;
        assert!(matches!(result, Err(AppError::ApiMalformedJson { .. })));
    }

    #[tokio::test]
    async fn test_fetch_truncated_json_is_malformed_json() {
        let mock_server = serve_once(200, r#"{"gameWeek": ["#).await;
        let result = fetch_schedule(&mock_server).await;
        assert!(matches!(result, Err(AppError::ApiMalformedJson { .. })));
    }

    #[tokio::test]
    async fn test_fetch_wrong_shape_is_unexpected_structure() {
        let mock_server = serve_once(200, r#"{"gameWeek": "soon"}"#).await;
        let result = fetch_schedule(&mock_server).await;
        assert!(matches!(
            result,
            Err(AppError::ApiUnexpectedStructure { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = create_test_http_client();
        let result: Result<ScheduleResponse, _> = fetch(&client, &format!("http://{addr}")).await;
        assert!(matches!(result, Err(AppError::NetworkConnection { .. })));
    }

    #[tokio::test]
    async fn test_fetch_slow_response_is_timeout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/schedule/now"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"gameWeek":[]}"#)
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let client = create_http_client_with_timeout(1).unwrap();
        let started = Instant::now();
        let result: Result<ScheduleResponse, _> =
            fetch(&client, &format!("{}/v1/schedule/now", mock_server.uri())).await;

        assert!(matches!(result, Err(AppError::NetworkTimeout { .. })));
        assert!(started.elapsed() < Duration::from_secs(3));
    }
}
