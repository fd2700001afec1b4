pub mod common;
pub mod schedule;
pub mod standings;

pub use common::{Game, GameState, StandingEntry, TeamSnapshot};
pub use schedule::{GameWeek, ScheduleGame, ScheduleResponse, ScheduleTeam};
pub use standings::{DivisionGroup, StandingsItem, StandingsResponse, TeamAbbrev, TeamRecord};
