use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};

use crate::data_fetcher::models::{Game, GameState, StandingEntry};

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// A fixed reference instant: 2026-10-16 12:00 UTC
    pub fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0)
            .single()
            .unwrap_or_default()
    }

    /// Creates a scheduled game starting `offset_hours` from [`Self::reference_now`]
    pub fn create_scheduled_game(id: i64, away_team: &str, home_team: &str, offset_hours: i64) -> Game {
        Game {
            id,
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_score: None,
            away_score: None,
            state: GameState::Scheduled,
            start: Self::reference_now() + chrono::Duration::hours(offset_hours),
        }
    }

    /// Creates a finished game
    pub fn create_final_game(
        id: i64,
        away_team: &str,
        away_score: u32,
        home_team: &str,
        home_score: u32,
        offset_hours: i64,
    ) -> Game {
        Game {
            home_score: Some(home_score),
            away_score: Some(away_score),
            state: GameState::Official,
            ..Self::create_scheduled_game(id, away_team, home_team, offset_hours)
        }
    }

    /// Creates a live game
    pub fn create_live_game(
        id: i64,
        away_team: &str,
        away_score: u32,
        home_team: &str,
        home_score: u32,
        offset_hours: i64,
    ) -> Game {
        Game {
            state: GameState::Live,
            ..Self::create_final_game(id, away_team, away_score, home_team, home_score, offset_hours)
        }
    }

    /// Creates a standings row
    pub fn create_standing(team: &str, division: &str, league_rank: u32, points: u32) -> StandingEntry {
        StandingEntry {
            team: team.to_string(),
            division: Some(division.to_string()),
            games_played: 10,
            wins: points / 2,
            losses: 10u32.saturating_sub(points / 2),
            ot_losses: 0,
            points,
            league_rank,
        }
    }

    /// The API schedule JSON for a list of games
    pub fn schedule_json(games: &[Game]) -> Value {
        let games: Vec<Value> = games
            .iter()
            .map(|game| {
                json!({
                    "id": game.id,
                    "startTimeUTC": game.start.to_rfc3339(),
                    "gameState": game.state.code(),
                    "homeTeam": {"abbrev": game.home_team, "score": game.home_score},
                    "awayTeam": {"abbrev": game.away_team, "score": game.away_score},
                })
            })
            .collect();
        json!({"gameWeek": [{"date": "2026-10-16", "games": games}]})
    }

    /// The API standings JSON, grouped by division in first-seen order
    pub fn standings_json_grouped(entries: &[StandingEntry]) -> Value {
        let mut groups: Vec<(String, Vec<Value>)> = Vec::new();
        for entry in entries {
            let division = entry.division.clone().unwrap_or_default();
            let record = Self::team_record_json(entry);
            match groups.iter_mut().find(|(name, _)| *name == division) {
                Some((_, records)) => records.push(record),
                None => groups.push((division, vec![record])),
            }
        }
        let standings: Vec<Value> = groups
            .into_iter()
            .map(|(division, records)| json!({"divisionName": division, "teamRecords": records}))
            .collect();
        json!({ "standings": standings })
    }

    /// The API standings JSON as flat team records
    pub fn standings_json_flat(entries: &[StandingEntry]) -> Value {
        let standings: Vec<Value> = entries.iter().map(Self::team_record_json).collect();
        json!({ "standings": standings })
    }

    fn team_record_json(entry: &StandingEntry) -> Value {
        json!({
            "teamAbbrev": {"default": entry.team},
            "divisionName": entry.division,
            "gamesPlayed": entry.games_played,
            "wins": entry.wins,
            "losses": entry.losses,
            "otLosses": entry.ot_losses,
            "points": entry.points,
            "leagueSequence": entry.league_rank,
        })
    }
}
