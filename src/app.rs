use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use crate::config::Config;
use crate::data_fetcher::api::{ReportData, fetch_report_data};
use crate::data_fetcher::processors::{
    classify_all, extract_schedule, extract_standings, filter_by_teams,
};
use crate::error::AppError;
use crate::report::{Report, render, write_report};

/// Builds the page from already fetched data. Pure apart from logging.
///
/// A missing schedule behaves like an empty one; missing standings show the
/// "unavailable" notice.
pub fn build_report(data: &ReportData, config: &Config, now: DateTime<Utc>) -> Report {
    let games = data
        .schedule
        .as_ref()
        .map(extract_schedule)
        .unwrap_or_default();
    let games = filter_by_teams(games, &config.teams);
    let snapshots = classify_all(&config.teams, &games, now);

    let standings_filter = config
        .standings_tracked_only
        .then_some(config.teams.as_slice());
    let standings = data
        .standings
        .as_ref()
        .map(|document| extract_standings(document, standings_filter));

    info!(
        games = games.len(),
        teams = snapshots.len(),
        standings = ?standings.as_ref().map(Vec::len),
        "Building report"
    );

    render(
        &snapshots,
        &games,
        standings.as_deref(),
        now,
        &config.report_settings(),
    )
}

/// One full run: fetch, build, write. Returns the absolute path written.
///
/// Only a failed write is an error; API problems degrade the page instead.
#[instrument(skip(config), fields(output = %config.output_path))]
pub async fn run(config: &Config) -> Result<PathBuf, AppError> {
    let now = Utc::now();
    let data = fetch_report_data(config).await;
    let report = build_report(&data, config, now);
    write_report(&report, &config.output_path).await
}
