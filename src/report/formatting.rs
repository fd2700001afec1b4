//! Display strings for games, times and placeholders
//!
//! All formatting goes through an explicit [`FormatterConfig`]; nothing here reads
//! process-wide locale or timezone state except [`TimeZoneSetting::Local`], which
//! asks chrono for the system zone when selected.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOCALE, DEFAULT_TIMEZONE, texts};
use crate::data_fetcher::models::Game;

/// Zone in which game times are shown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeZoneSetting {
    /// The system's local zone
    Local,
    /// A constant offset from UTC, e.g. `+02:00`
    Fixed(FixedOffset),
    /// An IANA zone such as `Europe/Helsinki`, DST aware
    Named(Tz),
}

impl TimeZoneSetting {
    /// Moves a UTC instant into this zone.
    pub fn localize(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            TimeZoneSetting::Local => instant.with_timezone(&chrono::Local).fixed_offset(),
            TimeZoneSetting::Fixed(offset) => instant.with_timezone(offset),
            TimeZoneSetting::Named(tz) => instant.with_timezone(tz).fixed_offset(),
        }
    }
}

impl Default for TimeZoneSetting {
    fn default() -> Self {
        DEFAULT_TIMEZONE.parse().unwrap_or(TimeZoneSetting::Local)
    }
}

fn parse_offset(value: &str) -> Option<FixedOffset> {
    let (sign, rest) = match value.as_bytes().first()? {
        b'+' => (1, &value[1..]),
        b'-' => (-1, &value[1..]),
        _ => return None,
    };
    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?),
        None => (rest.parse::<i32>().ok()?, 0),
    };
    if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl FromStr for TimeZoneSetting {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("local") {
            return Ok(TimeZoneSetting::Local);
        }
        if value.eq_ignore_ascii_case("utc") || value == "Z" {
            return FixedOffset::east_opt(0)
                .map(TimeZoneSetting::Fixed)
                .ok_or_else(|| format!("invalid timezone '{value}'"));
        }
        if value.starts_with('+') || value.starts_with('-') {
            return parse_offset(value)
                .map(TimeZoneSetting::Fixed)
                .ok_or_else(|| format!("invalid UTC offset '{value}', expected e.g. +02:00"));
        }
        value
            .parse::<Tz>()
            .map(TimeZoneSetting::Named)
            .map_err(|_| format!("unknown timezone '{value}'"))
    }
}

impl TryFrom<String> for TimeZoneSetting {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeZoneSetting> for String {
    fn from(setting: TimeZoneSetting) -> Self {
        setting.to_string()
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneSetting::Local => f.write_str("local"),
            TimeZoneSetting::Fixed(offset) => write!(f, "{offset}"),
            TimeZoneSetting::Named(tz) => f.write_str(tz.name()),
        }
    }
}

/// Language of weekday names. `Numeric` shows dates without a weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DisplayLocale {
    Finnish,
    English,
    Numeric,
}

impl DisplayLocale {
    fn chrono_locale(self) -> Option<chrono::Locale> {
        match self {
            DisplayLocale::Finnish => Some(chrono::Locale::fi_FI),
            DisplayLocale::English => Some(chrono::Locale::en_US),
            DisplayLocale::Numeric => None,
        }
    }

    fn time_separator(self) -> &'static str {
        match self {
            DisplayLocale::English => "at",
            DisplayLocale::Finnish | DisplayLocale::Numeric => texts::TIME_SEPARATOR,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            DisplayLocale::Finnish => "fi",
            DisplayLocale::English => "en",
            DisplayLocale::Numeric => "none",
        }
    }
}

impl Default for DisplayLocale {
    fn default() -> Self {
        DEFAULT_LOCALE.parse().unwrap_or(DisplayLocale::Finnish)
    }
}

impl FromStr for DisplayLocale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fi" | "fi_fi" | "fi-fi" | "finnish" => Ok(DisplayLocale::Finnish),
            "en" | "en_us" | "en-us" | "english" => Ok(DisplayLocale::English),
            "none" | "numeric" => Ok(DisplayLocale::Numeric),
            other => Err(format!("unsupported locale '{other}', expected fi, en or none")),
        }
    }
}

impl TryFrom<String> for DisplayLocale {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DisplayLocale> for String {
    fn from(locale: DisplayLocale) -> Self {
        locale.tag().to_string()
    }
}

/// Everything the formatter needs to know about presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatterConfig {
    pub timezone: TimeZoneSetting,
    pub locale: DisplayLocale,
    pub show_live_marker: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            timezone: TimeZoneSetting::default(),
            locale: DisplayLocale::default(),
            show_live_marker: true,
        }
    }
}

fn format_with_weekday(local: DateTime<FixedOffset>, pattern: &str, locale: DisplayLocale) -> String {
    match locale.chrono_locale() {
        Some(chrono_locale) => {
            let pattern = format!("%A {pattern}");
            local.format_localized(&pattern, chrono_locale).to_string()
        }
        None => local.format(pattern).to_string(),
    }
}

/// Formats a game start as `DD.MM.YYYY klo HH:MM`, prefixed with the weekday when
/// a locale is configured (`perjantai 16.10.2026 klo 21:00`).
pub fn format_time(instant: DateTime<Utc>, config: &FormatterConfig) -> String {
    let local = config.timezone.localize(instant);
    let pattern = format!("%d.%m.%Y {} %H:%M", config.locale.time_separator());
    format_with_weekday(local, &pattern, config.locale)
}

/// Date only, used in the page heading.
pub fn format_date(instant: DateTime<Utc>, config: &FormatterConfig) -> String {
    format_with_weekday(config.timezone.localize(instant), "%d.%m.%Y", config.locale)
}

/// Full timestamp for the page footer.
pub fn format_timestamp(instant: DateTime<Utc>, config: &FormatterConfig) -> String {
    config
        .timezone
        .localize(instant)
        .format("%d.%m.%Y %H:%M:%S")
        .to_string()
}

/// The `AWAY a – h HOME` part of a result line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLine {
    pub away_team: String,
    pub away_score: u32,
    pub home_score: u32,
    pub home_team: String,
}

impl ScoreLine {
    pub fn from_game(game: &Game) -> Self {
        Self {
            away_team: game.away_team.clone(),
            away_score: game.away_score.unwrap_or(0),
            home_score: game.home_score.unwrap_or(0),
            home_team: game.home_team.clone(),
        }
    }
}

impl fmt::Display for ScoreLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} – {} {}",
            self.away_team, self.away_score, self.home_score, self.home_team
        )
    }
}

/// Reads back a line produced by [`format_score_line`]. A plain hyphen is accepted
/// in place of the en dash.
pub fn parse_score_line(line: &str) -> Option<ScoreLine> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [away_team, away_score, dash, home_score, home_team] = parts.as_slice() else {
        return None;
    };
    if *dash != "–" && *dash != "-" {
        return None;
    }
    Some(ScoreLine {
        away_team: away_team.to_string(),
        away_score: away_score.parse().ok()?,
        home_score: home_score.parse().ok()?,
        home_team: home_team.to_string(),
    })
}

/// `AWAY a – h HOME`; a missing score counts as 0.
pub fn format_score_line(game: &Game) -> String {
    ScoreLine::from_game(game).to_string()
}

/// Score line, live marker for games in progress, then the start time.
pub fn format_game_line(game: &Game, config: &FormatterConfig) -> String {
    let mut line = format_score_line(game);
    if config.show_live_marker && game.state.is_in_progress() {
        line.push(' ');
        line.push_str(texts::LIVE_MARKER);
    }
    format!("{line}, {}", format_time(game.start, config))
}

/// `AWAY @ HOME — time` for games without a score yet.
pub fn format_upcoming(game: &Game, config: &FormatterConfig) -> String {
    format!(
        "{} @ {} — {}",
        game.away_team,
        game.home_team,
        format_time(game.start, config)
    )
}

/// Result line once a game has started or carries a score, upcoming line before
/// that, and the "no data" placeholder when there is no game.
pub fn format_optional_game(game: Option<&Game>, config: &FormatterConfig) -> String {
    match game {
        Some(game) if game.state.has_started() || game.has_score() => {
            format_game_line(game, config)
        }
        Some(game) => format_upcoming(game, config),
        None => texts::NO_DATA.to_string(),
    }
}

/// One entry of the flat game list: `AWAY a – h HOME (STATE, time)`.
pub fn format_list_entry(game: &Game, config: &FormatterConfig) -> String {
    let teams = if game.state.has_started() || game.has_score() {
        format_score_line(game)
    } else {
        format!("{} @ {}", game.away_team, game.home_team)
    };
    format!(
        "{teams} ({}, {})",
        game.state,
        format_time(game.start, config)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::GameState;
    use chrono::TimeZone;

    fn numeric() -> FormatterConfig {
        FormatterConfig {
            locale: DisplayLocale::Numeric,
            ..FormatterConfig::default()
        }
    }

    fn game(state: GameState, home: Option<u32>, away: Option<u32>) -> Game {
        Game {
            id: 7,
            home_team: "CAR".to_string(),
            away_team: "ANA".to_string(),
            home_score: home,
            away_score: away,
            state,
            // Friday
            start: Utc.with_ymd_and_hms(2026, 10, 16, 19, 5, 0).unwrap(),
        }
    }

    #[test]
    fn test_timezone_setting_parsing() {
        assert_eq!("local".parse::<TimeZoneSetting>(), Ok(TimeZoneSetting::Local));
        assert_eq!(
            "+02:00".parse::<TimeZoneSetting>(),
            Ok(TimeZoneSetting::Fixed(FixedOffset::east_opt(7200).unwrap()))
        );
        assert_eq!(
            "-05".parse::<TimeZoneSetting>(),
            Ok(TimeZoneSetting::Fixed(FixedOffset::west_opt(5 * 3600).unwrap()))
        );
        assert_eq!(
            "UTC".parse::<TimeZoneSetting>(),
            Ok(TimeZoneSetting::Fixed(FixedOffset::east_opt(0).unwrap()))
        );
        assert_eq!(
            "Europe/Helsinki".parse::<TimeZoneSetting>(),
            Ok(TimeZoneSetting::Named(chrono_tz::Europe::Helsinki))
        );
        assert!("+25:00".parse::<TimeZoneSetting>().is_err());
        assert!("Mars/Olympus".parse::<TimeZoneSetting>().is_err());
    }

    #[test]
    fn test_timezone_setting_display_round_trip() {
        for raw in ["local", "+02:00", "-05:30", "Europe/Helsinki"] {
            let setting: TimeZoneSetting = raw.parse().unwrap();
            assert_eq!(setting.to_string().parse::<TimeZoneSetting>(), Ok(setting));
        }
    }

    #[test]
    fn test_display_locale_parsing() {
        assert_eq!("fi".parse::<DisplayLocale>(), Ok(DisplayLocale::Finnish));
        assert_eq!("fi_FI".parse::<DisplayLocale>(), Ok(DisplayLocale::Finnish));
        assert_eq!("EN".parse::<DisplayLocale>(), Ok(DisplayLocale::English));
        assert_eq!("none".parse::<DisplayLocale>(), Ok(DisplayLocale::Numeric));
        assert!("sv".parse::<DisplayLocale>().is_err());
        assert_eq!(DisplayLocale::default(), DisplayLocale::Finnish);
    }

    #[test]
    fn test_format_time_fixed_offset_numeric() {
        let instant = Utc.with_ymd_and_hms(2026, 10, 16, 23, 30, 0).unwrap();
        assert_eq!(format_time(instant, &numeric()), "17.10.2026 klo 01:30");
    }

    #[test]
    fn test_format_time_with_finnish_weekday() {
        let instant = Utc.with_ymd_and_hms(2026, 10, 16, 19, 5, 0).unwrap();
        let formatted = format_time(instant, &FormatterConfig::default());
        assert!(formatted.starts_with("perjantai"), "got: {formatted}");
        assert!(formatted.ends_with("16.10.2026 klo 21:05"), "got: {formatted}");
    }

    #[test]
    fn test_format_time_with_english_weekday() {
        let config = FormatterConfig {
            locale: DisplayLocale::English,
            ..FormatterConfig::default()
        };
        let instant = Utc.with_ymd_and_hms(2026, 10, 16, 19, 5, 0).unwrap();
        assert_eq!(format_time(instant, &config), "Friday 16.10.2026 at 21:05");
    }

    #[test]
    fn test_format_time_named_zone_follows_dst() {
        let config = FormatterConfig {
            timezone: TimeZoneSetting::Named(chrono_tz::Europe::Helsinki),
            ..numeric()
        };
        let summer = Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0).unwrap();
        let winter = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(format_time(summer, &config), "01.07.2026 klo 15:00");
        assert_eq!(format_time(winter, &config), "15.01.2026 klo 14:00");
    }

    #[test]
    fn test_format_date_and_timestamp() {
        let instant = Utc.with_ymd_and_hms(2026, 10, 16, 19, 5, 9).unwrap();
        assert_eq!(format_date(instant, &numeric()), "16.10.2026");
        assert_eq!(format_timestamp(instant, &numeric()), "16.10.2026 21:05:09");
    }

    #[test]
    fn test_score_line_round_trip() {
        let final_game = game(GameState::Final, Some(2), Some(3));
        let line = format_score_line(&final_game);
        assert_eq!(line, "ANA 3 – 2 CAR");

        let parsed = parse_score_line(&line).unwrap();
        assert_eq!(parsed.away_team, "ANA");
        assert_eq!(parsed.away_score, 3);
        assert_eq!(parsed.home_score, 2);
        assert_eq!(parsed.home_team, "CAR");
        assert_eq!(parsed, ScoreLine::from_game(&final_game));
    }

    #[test]
    fn test_parse_score_line_rejects_garbage() {
        assert!(parse_score_line("ANA @ CAR").is_none());
        assert!(parse_score_line("ANA x – 2 CAR").is_none());
        assert!(parse_score_line("ANA 3 : 2 CAR").is_none());
        assert_eq!(
            parse_score_line("ANA 3 - 2 CAR").map(|s| s.home_score),
            Some(2)
        );
    }

    #[test]
    fn test_format_game_line_live_marker() {
        let live = game(GameState::Live, Some(1), Some(1));
        assert_eq!(
            format_game_line(&live, &numeric()),
            "ANA 1 – 1 CAR (kesken), 16.10.2026 klo 21:05"
        );

        let quiet = FormatterConfig {
            show_live_marker: false,
            ..numeric()
        };
        assert_eq!(
            format_game_line(&live, &quiet),
            "ANA 1 – 1 CAR, 16.10.2026 klo 21:05"
        );

        let critical = game(GameState::Critical, Some(2), Some(2));
        assert!(format_game_line(&critical, &numeric()).contains("(kesken)"));

        let finished = game(GameState::Official, Some(4), Some(2));
        assert!(!format_game_line(&finished, &numeric()).contains("(kesken)"));
    }

    #[test]
    fn test_format_upcoming() {
        let future = game(GameState::Scheduled, None, None);
        assert_eq!(
            format_upcoming(&future, &numeric()),
            "ANA @ CAR — 16.10.2026 klo 21:05"
        );
    }

    #[test]
    fn test_format_optional_game() {
        assert_eq!(format_optional_game(None, &numeric()), "Ei tietoja");

        let future = game(GameState::Scheduled, None, None);
        assert!(format_optional_game(Some(&future), &numeric()).contains(" @ "));

        let finished = game(GameState::Final, Some(2), Some(3));
        assert!(format_optional_game(Some(&finished), &numeric()).starts_with("ANA 3 – 2 CAR"));
    }

    #[test]
    fn test_format_list_entry() {
        let finished = game(GameState::Official, Some(2), Some(3));
        assert_eq!(
            format_list_entry(&finished, &numeric()),
            "ANA 3 – 2 CAR (OFF, 16.10.2026 klo 21:05)"
        );
        let future = game(GameState::Scheduled, None, None);
        assert_eq!(
            format_list_entry(&future, &numeric()),
            "ANA @ CAR (FUT, 16.10.2026 klo 21:05)"
        );
    }
}
