use super::common::GameState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScheduleTeam {
    #[serde(default)]
    pub abbrev: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleGame {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: String,
    #[serde(rename = "gameState", default)]
    pub game_state: GameState,
    #[serde(rename = "homeTeam")]
    pub home_team: ScheduleTeam,
    #[serde(rename = "awayTeam")]
    pub away_team: ScheduleTeam,
    // Older payloads carry the scores next to the teams instead of inside them
    #[serde(
        rename = "homeTeamScore",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub home_team_score: Option<u32>,
    #[serde(
        rename = "awayTeamScore",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub away_team_score: Option<u32>,
}

impl ScheduleGame {
    pub fn home_score(&self) -> Option<u32> {
        self.home_team.score.or(self.home_team_score)
    }

    pub fn away_score(&self) -> Option<u32> {
        self.away_team.score.or(self.away_team_score)
    }
}

/// One day of the schedule window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameWeek {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub games: Vec<ScheduleGame>,
}

/// Model for the `/v1/schedule/now` response
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScheduleResponse {
    #[serde(rename = "gameWeek", default)]
    pub game_week: Vec<GameWeek>,
}
