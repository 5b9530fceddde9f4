use crate::cli::Args;
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::error::AppError;
use std::io::stderr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn default_filter() -> Result<EnvFilter, AppError> {
    let directive = format!("{APP_NAME}=info")
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Resolves the log directory and file name from the CLI flag, the config
/// file, or the default location, in that order.
pub fn resolve_log_location(args: &Args, config: &Config) -> (String, String) {
    let default_file_name = format!("{APP_NAME}.log");
    match args.log_file.as_ref().or(config.log_file_path.as_ref()) {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .unwrap_or(default_file_name);
            (parent.to_string_lossy().to_string(), file_name)
        }
        None => (Config::get_log_dir_path(), default_file_name),
    }
}

/// Sets up logging for the application.
///
/// Logs always go to a daily rolling file. With `--verbose` they are also
/// written to stderr so progress is visible while the run proceeds; stdout
/// carries only the report.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args, config: &Config) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = resolve_log_location(args, config);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call so buffered lines get flushed
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(default_filter()?);

    let progress_layer = if args.verbose {
        Some(
            fmt::Layer::new()
                .with_writer(stderr)
                .with_ansi(true)
                .with_target(false)
                .with_filter(default_filter()?),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(progress_layer)
        .try_init()
        .map_err(|e| AppError::log_setup_error(e.to_string()))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_log_file_wins_over_config() {
        let args = Args::parse_from(["effective_points", "2015", "--log-file", "/tmp/ep/run.log"]);
        let config = Config {
            log_file_path: Some("/var/log/other.log".to_string()),
            ..Config::default()
        };
        assert_eq!(
            resolve_log_location(&args, &config),
            ("/tmp/ep".to_string(), "run.log".to_string())
        );
    }

    #[test]
    fn test_config_log_file_used_when_no_flag() {
        let args = Args::parse_from(["effective_points", "2015"]);
        let config = Config {
            log_file_path: Some("/var/log/other.log".to_string()),
            ..Config::default()
        };
        assert_eq!(
            resolve_log_location(&args, &config),
            ("/var/log".to_string(), "other.log".to_string())
        );
    }

    #[test]
    fn test_bare_file_name_logs_to_current_dir() {
        let args = Args::parse_from(["effective_points", "2015", "--log-file", "run.log"]);
        let (dir, file) = resolve_log_location(&args, &Config::default());
        assert_eq!(dir, ".");
        assert_eq!(file, "run.log");
    }

    #[test]
    fn test_default_location() {
        let args = Args::parse_from(["effective_points", "2015"]);
        let (dir, file) = resolve_log_location(&args, &Config::default());
        assert_eq!(dir, Config::get_log_dir_path());
        assert_eq!(file, "effective_points.log");
    }
}
