//! Picks each team's last played and next scheduled game relative to `now`.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::data_fetcher::models::{Game, TeamSnapshot};

/// Returns the latest game of `team` that started strictly before `now` and the
/// earliest one starting at or after `now`.
///
/// The team's games are ordered by start time (game id breaks ties) and scanned
/// once: every past game replaces the running "last" candidate and the first game
/// at or after `now` becomes "next", ending the scan. A game starting exactly at
/// `now` therefore counts as next. The input order of `games` does not matter.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use nhl_report::data_fetcher::models::{Game, GameState};
/// use nhl_report::data_fetcher::processors::classify;
///
/// let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
/// let game = Game {
///     id: 1,
///     home_team: "CAR".to_string(),
///     away_team: "ANA".to_string(),
///     home_score: None,
///     away_score: None,
///     state: GameState::Scheduled,
///     start: Utc.with_ymd_and_hms(2026, 10, 16, 23, 0, 0).unwrap(),
/// };
/// let snapshot = classify("ANA", &[game], now);
/// assert!(snapshot.last_game.is_none());
/// assert_eq!(snapshot.next_game.map(|g| g.id), Some(1));
/// ```
pub fn classify(team: &str, games: &[Game], now: DateTime<Utc>) -> TeamSnapshot {
    let mut team_games: Vec<&Game> = games.iter().filter(|game| game.involves(team)).collect();
    if team_games.is_empty() {
        debug!("No games found for {team}");
        return TeamSnapshot::empty(team);
    }

    team_games.sort_by_key(|game| (game.start, game.id));

    let mut last_game = None;
    let mut next_game = None;
    for game in team_games {
        if game.start < now {
            last_game = Some(game);
        } else {
            next_game = Some(game);
            break;
        }
    }

    debug!(
        "{team}: last={:?} next={:?}",
        last_game.map(|g| g.id),
        next_game.map(|g| g.id)
    );

    TeamSnapshot {
        team: team.to_string(),
        last_game: last_game.cloned(),
        next_game: next_game.cloned(),
    }
}

/// Snapshots for every team, in the order the teams are given.
pub fn classify_all(teams: &[String], games: &[Game], now: DateTime<Utc>) -> Vec<TeamSnapshot> {
    teams
        .iter()
        .map(|team| classify(team, games, now))
        .collect()
}

/// Splits games into (started or finished, not yet started), keeping order within each part.
pub fn split_by_state(games: &[Game]) -> (Vec<&Game>, Vec<&Game>) {
    games.iter().partition(|game| game.state.has_started())
}
