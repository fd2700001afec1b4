//! Full runs against a local HTTP server standing in for the NHL API.

use nhl_report::{Config, app::run, report::DisplayLocale, testing_utils::TestDataBuilder};
use serde_json::Value;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Mock NHL API. Endpoints given `None` are not mounted and answer 404.
async fn spawn_api(schedule: Option<ResponseTemplate>, standings: Option<ResponseTemplate>) -> MockServer {
    let mock_server = MockServer::start().await;
    if let Some(response) = schedule {
        Mock::given(method("GET"))
            .and(path("/v1/schedule/now"))
            .respond_with(response)
            .mount(&mock_server)
            .await;
    }
    if let Some(response) = standings {
        Mock::given(method("GET"))
            .and(path("/v1/standings/now"))
            .respond_with(response)
            .mount(&mock_server)
            .await;
    }
    mock_server
}

fn json_response(body: Value) -> Option<ResponseTemplate> {
    Some(ResponseTemplate::new(200).set_body_json(body))
}

fn config_for(api_domain: String, output: &std::path::Path) -> Config {
    Config {
        api_domain,
        teams: vec!["ANA".to_string(), "MTL".to_string()],
        output_path: output.to_string_lossy().to_string(),
        http_timeout_seconds: 5,
        locale: DisplayLocale::Numeric,
        ..Config::default()
    }
}

#[tokio::test]
async fn test_full_run_writes_report() {
    let now = chrono::Utc::now();
    let hours_since_reference = (now - TestDataBuilder::reference_now()).num_hours();
    let games = vec![
        TestDataBuilder::create_final_game(1, "ANA", 4, "CAR", 1, hours_since_reference - 24),
        TestDataBuilder::create_scheduled_game(2, "MTL", "ANA", hours_since_reference + 24),
    ];
    let standings = vec![
        TestDataBuilder::create_standing("ANA", "Pacific", 1, 16),
        TestDataBuilder::create_standing("MTL", "Atlantic", 2, 14),
    ];
    let mock_server = spawn_api(
        json_response(TestDataBuilder::schedule_json(&games)),
        json_response(TestDataBuilder::standings_json_grouped(&standings)),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("index.html");
    let written = run(&config_for(mock_server.uri(), &output)).await.unwrap();

    assert!(written.is_absolute());
    assert_eq!(written, output.canonicalize().unwrap());

    let html = tokio::fs::read_to_string(&written).await.unwrap();
    assert!(html.contains("ANA 4 – 1 CAR"));
    assert!(html.contains("MTL @ ANA — "));
    assert!(html.contains(r#"<tr class="tracked"><td>1</td><td class="team-name">ANA</td>"#));
    assert!(!html.contains("Sarjataulukko ei saatavilla"));
}

#[tokio::test]
async fn test_missing_standings_degrades_gracefully() {
    let mock_server = spawn_api(json_response(serde_json::json!({"gameWeek": []})), None).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out").join("index.html");
    let written = run(&config_for(mock_server.uri(), &output)).await.unwrap();

    let html = tokio::fs::read_to_string(&written).await.unwrap();
    assert!(html.contains("Sarjataulukko ei saatavilla"));
    assert_eq!(html.matches("Ei tietoja").count(), 4);
}

#[tokio::test]
async fn test_malformed_schedule_degrades_gracefully() {
    let mock_server = spawn_api(
        Some(ResponseTemplate::new(200).set_body_string("<html>down for maintenance</html>")),
        json_response(serde_json::json!({"standings": []})),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("index.html");
    let written = run(&config_for(mock_server.uri(), &output)).await.unwrap();

    let html = tokio::fs::read_to_string(&written).await.unwrap();
    assert!(html.contains("Ei otteluita valituille joukkueille."));
}

#[tokio::test]
async fn test_unwritable_output_is_an_error() {
    let mock_server = spawn_api(None, None).await;

    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    tokio::fs::write(&blocker, "x").await.unwrap();

    let result = run(&config_for(mock_server.uri(), &blocker.join("index.html"))).await;
    assert!(matches!(
        result,
        Err(nhl_report::AppError::ReportWrite { .. })
    ));
}
