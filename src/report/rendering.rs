//! HTML page assembly
//!
//! The page is one self-contained document with embedded CSS: a header, one
//! section per tracked team, an optional flat game list and the standings table.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::texts;
use crate::data_fetcher::models::{Game, StandingEntry, TeamSnapshot};
use crate::data_fetcher::processors::{division_order, split_by_state};

use super::formatting::{
    DisplayLocale, FormatterConfig, format_date, format_list_entry, format_optional_game, format_timestamp,
};
use super::styles::inline_css;

/// How the standings table is grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandingsLayout {
    /// One table ordered by league rank
    #[default]
    League,
    /// One table per division, divisions in the order the API lists them
    Division,
}

impl FromStr for StandingsLayout {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "league" => Ok(StandingsLayout::League),
            "division" => Ok(StandingsLayout::Division),
            other => Err(format!(
                "unknown standings layout '{other}', expected league or division"
            )),
        }
    }
}

impl fmt::Display for StandingsLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StandingsLayout::League => f.write_str("league"),
            StandingsLayout::Division => f.write_str("division"),
        }
    }
}

/// Presentation switches for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportSettings {
    pub formatter: FormatterConfig,
    pub show_game_list: bool,
    pub split_by_state: bool,
    pub standings_layout: StandingsLayout,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            formatter: FormatterConfig::default(),
            show_game_list: true,
            split_by_state: false,
            standings_layout: StandingsLayout::League,
        }
    }
}

/// A rendered page.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub html: String,
    pub generated_at: DateTime<Utc>,
}

/// Escapes text for use in element content and attribute values.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders the full page.
///
/// `games` feeds the optional game list and should already be limited to the
/// tracked teams. `standings` of `None` means the standings could not be fetched;
/// the page then carries a notice in place of the table. Rendering never fails.
pub fn render(
    snapshots: &[TeamSnapshot],
    games: &[Game],
    standings: Option<&[StandingEntry]>,
    generated_at: DateTime<Utc>,
    settings: &ReportSettings,
) -> Report {
    let formatter = &settings.formatter;
    let tracked: Vec<&str> = snapshots.iter().map(|s| s.team.as_str()).collect();

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <h1>{heading}</h1>
    <h2>{date}</h2>
{teams}
{game_list}
    <hr>
    <h2>{standings_heading}</h2>
{standings}
{footer}
</body>
</html>
"#,
        lang = match formatter.locale {
            DisplayLocale::English => "en",
            DisplayLocale::Finnish | DisplayLocale::Numeric => "fi",
        },
        title = texts::PAGE_TITLE,
        css = inline_css(),
        heading = texts::PAGE_HEADING,
        date = escape_html(&format_date(generated_at, formatter)),
        teams = render_team_sections(snapshots, formatter),
        game_list = if settings.show_game_list {
            render_game_list(games, settings)
        } else {
            String::new()
        },
        standings_heading = texts::STANDINGS_HEADING,
        standings = render_standings(standings, &tracked, settings.standings_layout),
        footer = render_footer(generated_at, formatter),
    );

    Report { html, generated_at }
}

fn render_game_paragraph(class: &str, label: &str, game: Option<&Game>, formatter: &FormatterConfig) -> String {
    let text = escape_html(&format_optional_game(game, formatter));
    let text = match game {
        None => format!(r#"<span class="placeholder">{text}</span>"#),
        Some(g) if g.state.is_in_progress() => format!(r#"<span class="live">{text}</span>"#),
        Some(_) => text,
    };
    format!(r#"        <p class="{class}"><span class="label">{label}:</span> {text}</p>"#)
}

fn render_team_sections(snapshots: &[TeamSnapshot], formatter: &FormatterConfig) -> String {
    let sections: Vec<String> = snapshots
        .iter()
        .map(|snapshot| {
            format!(
                "    <section class=\"team\" id=\"team-{id}\">\n        <h3>{team}</h3>\n{last}\n{next}\n    </section>",
                id = escape_html(&snapshot.team.to_ascii_lowercase()),
                team = escape_html(&snapshot.team),
                last = render_game_paragraph(
                    "last",
                    texts::LAST_GAME_LABEL,
                    snapshot.last_game.as_ref(),
                    formatter
                ),
                next = render_game_paragraph(
                    "next",
                    texts::NEXT_GAME_LABEL,
                    snapshot.next_game.as_ref(),
                    formatter
                ),
            )
        })
        .collect();

    format!("    <div class=\"teams\">\n{}\n    </div>", sections.join("\n"))
}

fn render_game_items(games: &[&Game], formatter: &FormatterConfig) -> String {
    if games.is_empty() {
        return format!(r#"        <li class="placeholder">{}</li>"#, texts::NO_GAMES);
    }
    games
        .iter()
        .map(|game| format!("        <li>{}</li>", escape_html(&format_list_entry(game, formatter))))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_game_list(games: &[Game], settings: &ReportSettings) -> String {
    let formatter = &settings.formatter;
    let mut ordered = games.to_vec();
    ordered.sort_by_key(|g| (g.start, g.id));

    if !settings.split_by_state {
        let all: Vec<&Game> = ordered.iter().collect();
        return format!(
            "    <h2>{}</h2>\n    <ul class=\"games\">\n{}\n    </ul>",
            texts::GAMES_HEADING,
            render_game_items(&all, formatter)
        );
    }

    let (started, upcoming) = split_by_state(&ordered);
    format!(
        "    <h2>{games}</h2>\n    <h3>{finished}</h3>\n    <ul class=\"games finished\">\n{started}\n    </ul>\n    <h3>{upcoming_heading}</h3>\n    <ul class=\"games upcoming\">\n{upcoming}\n    </ul>",
        games = texts::GAMES_HEADING,
        finished = texts::FINISHED_HEADING,
        started = render_game_items(&started, formatter),
        upcoming_heading = texts::UPCOMING_HEADING,
        upcoming = render_game_items(&upcoming, formatter),
    )
}

fn render_standings_table(entries: &[&StandingEntry], tracked: &[&str]) -> String {
    let rows: Vec<String> = entries
        .iter()
        .map(|entry| {
            let class = if tracked.contains(&entry.team.as_str()) {
                r#" class="tracked""#
            } else {
                ""
            };
            let rank = if entry.league_rank == 0 {
                "-".to_string()
            } else {
                entry.league_rank.to_string()
            };
            format!(
                r#"            <tr{class}><td>{rank}</td><td class="team-name">{team}</td><td>{gp}</td><td>{w}</td><td>{l}</td><td>{otl}</td><td>{pts}</td></tr>"#,
                team = escape_html(&entry.team),
                gp = entry.games_played,
                w = entry.wins,
                l = entry.losses,
                otl = entry.ot_losses,
                pts = entry.points,
            )
        })
        .collect();

    format!(
        "    <table class=\"standings\">\n        <thead>\n            <tr><th>#</th><th>Joukkue</th><th>O</th><th>V</th><th>T</th><th>JT</th><th>P</th></tr>\n        </thead>\n        <tbody>\n{}\n        </tbody>\n    </table>",
        rows.join("\n")
    )
}

fn render_standings(
    standings: Option<&[StandingEntry]>,
    tracked: &[&str],
    layout: StandingsLayout,
) -> String {
    let entries = match standings {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            return format!(
                r#"    <p class="unavailable">{}</p>"#,
                texts::STANDINGS_UNAVAILABLE
            );
        }
    };

    match layout {
        StandingsLayout::League => {
            let all: Vec<&StandingEntry> = entries.iter().collect();
            render_standings_table(&all, tracked)
        }
        StandingsLayout::Division => {
            let mut blocks: Vec<String> = division_order(entries)
                .iter()
                .map(|division| {
                    let members: Vec<&StandingEntry> = entries
                        .iter()
                        .filter(|e| e.division.as_deref() == Some(division.as_str()))
                        .collect();
                    format!(
                        "    <h3>{}</h3>\n{}",
                        escape_html(division),
                        render_standings_table(&members, tracked)
                    )
                })
                .collect();

            let unassigned: Vec<&StandingEntry> =
                entries.iter().filter(|e| e.division.is_none()).collect();
            if !unassigned.is_empty() {
                blocks.push(render_standings_table(&unassigned, tracked));
            }
            blocks.join("\n")
        }
    }
}

fn render_footer(generated_at: DateTime<Utc>, formatter: &FormatterConfig) -> String {
    format!(
        "    <footer>\n        <p>{}: {}</p>\n    </footer>",
        texts::UPDATED_LABEL,
        escape_html(&format_timestamp(generated_at, formatter))
    )
}
