//! Flattening of the raw API documents into games and standing entries

use std::cmp::Reverse;
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::data_fetcher::models::{
    Game, ScheduleGame, ScheduleResponse, StandingEntry, StandingsItem, StandingsResponse,
    TeamRecord,
};
use crate::error::AppError;

/// Parses an ISO-8601 UTC timestamp such as `2026-10-16T23:00:00Z`.
pub fn parse_start_time(timestamp: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::datetime_parse_error(format!("'{timestamp}': {e}")))
}

fn to_game(game: &ScheduleGame) -> Result<Game, AppError> {
    Ok(Game {
        id: game.id,
        home_team: game.home_team.abbrev.clone(),
        away_team: game.away_team.abbrev.clone(),
        home_score: game.home_score(),
        away_score: game.away_score(),
        state: game.game_state.clone(),
        start: parse_start_time(&game.start_time_utc)?,
    })
}

/// Flattens the week → day → games structure into a single list, keeping source order.
/// Games with an unparseable start time are skipped.
pub fn extract_schedule(document: &ScheduleResponse) -> Vec<Game> {
    let mut games = Vec::new();
    for day in &document.game_week {
        for game in &day.games {
            match to_game(game) {
                Ok(parsed) => games.push(parsed),
                Err(e) => warn!("Skipping game {}: {}", game.id, e),
            }
        }
    }
    debug!("Extracted {} games from schedule", games.len());
    games
}

/// Keeps games where the home or the away team is one of `teams`.
pub fn filter_by_teams(games: Vec<Game>, teams: &[String]) -> Vec<Game> {
    let wanted: HashSet<&str> = teams.iter().map(String::as_str).collect();
    games
        .into_iter()
        .filter(|game| {
            wanted.contains(game.home_team.as_str()) || wanted.contains(game.away_team.as_str())
        })
        .collect()
}

fn to_entry(record: &TeamRecord, division: Option<&str>) -> StandingEntry {
    StandingEntry {
        team: record.team_abbrev.as_str().to_string(),
        division: division
            .or(record.division_name.as_deref())
            .map(str::to_string),
        games_played: record.games_played,
        wins: record.wins,
        losses: record.losses,
        ot_losses: record.ot_losses,
        points: record.points,
        league_rank: record.league_sequence,
    }
}

/// Reduces the standings document to one entry per team, ordered by league rank.
///
/// Division groups repeated under the same name are read once, and a team that
/// shows up more than once keeps its first occurrence. When `teams` is given the
/// result only holds those teams. Entries without a rank (0) sort last.
pub fn extract_standings(
    document: &StandingsResponse,
    teams: Option<&[String]>,
) -> Vec<StandingEntry> {
    let mut seen_divisions: HashSet<&str> = HashSet::new();
    let mut entries = Vec::new();

    for item in &document.standings {
        match item {
            StandingsItem::Division(group) => {
                if !seen_divisions.insert(group.division_name.as_str()) {
                    debug!("Skipping repeated division group {}", group.division_name);
                    continue;
                }
                entries.extend(
                    group
                        .team_records
                        .iter()
                        .map(|record| to_entry(record, Some(group.division_name.as_str()))),
                );
            }
            StandingsItem::Team(record) => entries.push(to_entry(record, None)),
        }
    }

    let mut seen_teams: HashSet<String> = HashSet::new();
    entries.retain(|entry| {
        let first = seen_teams.insert(entry.team.clone());
        if !first {
            debug!("Dropping duplicate standings row for {}", entry.team);
        }
        first
    });

    if let Some(teams) = teams {
        entries.retain(|entry| teams.iter().any(|team| *team == entry.team));
    }

    entries.sort_by_key(|entry| {
        (
            entry.league_rank == 0,
            entry.league_rank,
            Reverse(entry.points),
            entry.team.clone(),
        )
    });
    entries
}

/// Division names in first-seen order, without repeats.
pub fn division_order(entries: &[StandingEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    for division in entries.iter().filter_map(|entry| entry.division.as_deref()) {
        if seen.insert(division) {
            order.push(division.to_string());
        }
    }
    order
}
