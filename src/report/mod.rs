//! Turns team snapshots and standings into the HTML page and writes it to disk.

pub mod formatting;
pub mod rendering;
pub mod styles;
pub mod writer;

pub use formatting::{
    DisplayLocale, FormatterConfig, ScoreLine, TimeZoneSetting, format_game_line,
    format_score_line, format_time, format_upcoming, parse_score_line,
};
pub use rendering::{Report, ReportSettings, StandingsLayout, escape_html, render};
pub use writer::write_report;
