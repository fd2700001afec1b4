// src/main.rs
use clap::Parser;
use nhl_report::cli::Args;
use nhl_report::config::Config;
use nhl_report::error::AppError;
use nhl_report::logging::setup_logging;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).await?;
    args.apply_to(&mut config);
    config.normalize();
    config.validate()?;

    if args.list_config {
        let config_path = args
            .config
            .clone()
            .unwrap_or_else(Config::get_config_path);
        config.display(&config_path);
        return Ok(());
    }

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    if let Some(path) = &log_file_path {
        info!("Logging to daily files: {path}");
    }
    info!(
        "{} {} tracking {}",
        nhl_report::NAME,
        nhl_report::VERSION,
        config.teams.join(", ")
    );

    match nhl_report::app::run(&config).await {
        Ok(written) => {
            let file_name = written
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| config.output_path.clone());
            println!("{file_name} luotu: {}", written.display());
            Ok(())
        }
        Err(e) => {
            error!("Report generation failed: {e}");
            Err(e)
        }
    }
}
