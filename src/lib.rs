//! NHL results and standings page generator
//!
//! This library fetches the current NHL schedule and standings, works out the
//! previous and next game of each tracked team and renders a static HTML page.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nhl_report::config::Config;
//! use nhl_report::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load(None).await?;
//!     let written = nhl_report::app::run(&config).await?;
//!     println!("index.html luotu: {}", written.display());
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod report;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use app::{build_report, run};
pub use config::Config;
pub use data_fetcher::api::{ReportData, fetch_report_data};
pub use data_fetcher::models::{Game, GameState, StandingEntry, TeamSnapshot};
pub use error::AppError;
pub use report::{FormatterConfig, Report, ReportSettings, render, write_report};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
