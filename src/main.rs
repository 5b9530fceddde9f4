// src/main.rs
use clap::Parser;
use effective_points::cli::Args;
use effective_points::commands::{
    handle_list_config_command, handle_points_command, handle_set_api_domain_command,
};
use effective_points::config::Config;
use effective_points::error::AppError;
use effective_points::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Configuration operations run before logging is set up
    if args.is_config_command() {
        if let Some(domain) = &args.set_api_domain {
            handle_set_api_domain_command(domain).await?;
        }
        if args.list_config {
            handle_list_config_command().await?;
        }
        return Ok(());
    }

    let config = Config::load().await?;

    // The guard must stay alive until main returns so logs are flushed
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    handle_points_command(&args, &config).await
}
