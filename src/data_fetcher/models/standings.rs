use serde::{Deserialize, Serialize};

/// Team abbreviation, either localized (`{"default": "CAR"}`) or a bare string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamAbbrev {
    Localized { default: String },
    Plain(String),
}

impl TeamAbbrev {
    pub fn as_str(&self) -> &str {
        match self {
            TeamAbbrev::Localized { default } => default,
            TeamAbbrev::Plain(abbrev) => abbrev,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRecord {
    #[serde(rename = "teamAbbrev")]
    pub team_abbrev: TeamAbbrev,
    #[serde(rename = "divisionName", default)]
    pub division_name: Option<String>,
    #[serde(rename = "gamesPlayed", default)]
    pub games_played: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(rename = "otLosses", alias = "otl", default)]
    pub ot_losses: u32,
    #[serde(default)]
    pub points: u32,
    #[serde(rename = "leagueSequence", alias = "leagueRank", default)]
    pub league_sequence: u32,
}

/// A division and its team records, as produced by the grouped standings layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionGroup {
    #[serde(rename = "divisionName")]
    pub division_name: String,
    #[serde(rename = "teamRecords")]
    pub team_records: Vec<TeamRecord>,
}

/// Entries of the `standings` array. The current API returns flat team records,
/// older payloads nest them under division groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StandingsItem {
    Division(DivisionGroup),
    Team(TeamRecord),
}

/// Model for the `/v1/standings/now` response
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StandingsResponse {
    #[serde(default)]
    pub standings: Vec<StandingsItem>,
}
