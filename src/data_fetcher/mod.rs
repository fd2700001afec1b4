pub mod api;
pub mod models;
pub mod processors;

pub use api::{ReportData, fetch_report_data};
pub use models::{Game, GameState, StandingEntry, TeamSnapshot};
