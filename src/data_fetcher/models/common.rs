use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle stage of a game as reported by the `gameState` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameState {
    Scheduled, // FUT
    PreGame,   // PRE
    Live,      // LIVE
    Critical,  // CRIT, late game or overtime pending
    Final,     // FINAL
    Official,  // OFF, final and official
    Unknown(String),
}

impl GameState {
    /// Live or critical: the game is being played right now.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameState::Live | GameState::Critical)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::Final | GameState::Official)
    }

    /// True once the puck has dropped, whether or not the game has ended.
    pub fn has_started(&self) -> bool {
        self.is_in_progress() || self.is_finished()
    }

    /// The raw API code for this state
    pub fn code(&self) -> &str {
        match self {
            GameState::Scheduled => "FUT",
            GameState::PreGame => "PRE",
            GameState::Live => "LIVE",
            GameState::Critical => "CRIT",
            GameState::Final => "FINAL",
            GameState::Official => "OFF",
            GameState::Unknown(raw) => raw,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::Unknown("Unknown".to_string())
    }
}

impl From<String> for GameState {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "FUT" => GameState::Scheduled,
            "PRE" => GameState::PreGame,
            "LIVE" => GameState::Live,
            "CRIT" => GameState::Critical,
            "FINAL" => GameState::Final,
            "OFF" => GameState::Official,
            _ => GameState::Unknown(raw),
        }
    }
}

impl From<GameState> for String {
    fn from(state: GameState) -> Self {
        state.code().to_string()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single game between two teams, normalized from the schedule response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub state: GameState,
    pub start: DateTime<Utc>,
}

impl Game {
    /// Whether `team` plays in this game, either home or away.
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    /// A score exists once the API reports one for both sides.
    pub fn has_score(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }
}

/// A team's season record in the league table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingEntry {
    pub team: String,
    pub division: Option<String>,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub ot_losses: u32,
    pub points: u32,
    pub league_rank: u32,
}

/// Last and next game of one team relative to a fixed instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSnapshot {
    pub team: String,
    pub last_game: Option<Game>,
    pub next_game: Option<Game>,
}

impl TeamSnapshot {
    pub fn empty(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            last_game: None,
            next_game: None,
        }
    }
}
