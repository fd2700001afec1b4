use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::config::{Config, parse_team_list};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// NHL results and standings page generator
///
/// Fetches the current NHL schedule and standings, picks the previous and next
/// game of each tracked team and writes a single static HTML page.
///
/// Running without arguments uses the config file (or built-in defaults) and
/// writes `index.html` in the current directory.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Path of the HTML file to write. Overrides `output_path` from the config.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<String>,

    /// Comma separated team codes to track, e.g. ANA,CAR,DAL,MTL.
    /// Overrides `teams` from the config.
    #[arg(short = 't', long = "teams", value_name = "CODES", value_delimiter = ',')]
    pub teams: Option<Vec<String>>,

    /// Read configuration from this file instead of the default location.
    #[arg(long = "config", value_name = "PATH", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Also write logs to this file (rotated daily).
    #[arg(long = "log-file", value_name = "PATH", help_heading = "Configuration")]
    pub log_file: Option<String>,

    /// List current configuration settings and exit.
    #[arg(short = 'l', long = "list-config", help_heading = "Configuration")]
    pub list_config: bool,

    /// Only log warnings and errors to the console.
    #[arg(short = 'q', long = "quiet", help_heading = "Debug Options")]
    pub quiet: bool,
}

impl Args {
    /// Applies command line overrides on top of a loaded config.
    /// Call [`Config::normalize`] and [`Config::validate`] afterwards.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(teams) = &self.teams {
            config.teams = parse_team_list(&teams.join(","));
        }
        if let Some(log_file) = &self.log_file {
            config.log_file_path = Some(log_file.clone());
        }
    }
}
