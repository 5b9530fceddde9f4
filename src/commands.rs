use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::{NhlClient, PlayerNames};
use crate::error::AppError;
use crate::points::Aggregator;
use crate::report::{print_partial, print_report};
use crate::runner::{GameSource, RunSummary, run};
use crate::schedule::{Season, seasons_from};
use tracing::{error, info};

/// Handles `--set-api-domain`.
///
/// Loads the stored configuration (or defaults), replaces the API domain and
/// saves it back.
pub async fn handle_set_api_domain_command(domain: &str) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    config.api_domain = domain.trim().to_string();
    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles `--list-config`.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Runs the computation against any game source and prints the result.
///
/// On failure the totals gathered so far are written to stderr before the
/// error is returned.
pub async fn compute_and_report<S: GameSource>(
    source: &S,
    seasons: &[Season],
    as_json: bool,
) -> Result<RunSummary, AppError> {
    let mut aggregator = Aggregator::new();
    let mut names = PlayerNames::new();

    match run(source, seasons, &mut aggregator, &mut names).await {
        Ok(summary) => {
            info!(
                "Run complete: {} seasons, {} games counted, {} skipped, {} players",
                summary.seasons,
                summary.games_counted,
                summary.games_skipped,
                aggregator.points().len()
            );
            print_report(aggregator.points(), &names, as_json)?;
            Ok(summary)
        }
        Err(e) => {
            error!(
                "Run aborted after {} counted games: {}",
                aggregator.games_processed(),
                e
            );
            if e.is_data_inconsistency() {
                error!("Play-by-play and final score disagree; totals would be wrong if the run continued");
            }
            if !aggregator.points().is_empty() {
                print_partial(aggregator.points(), &names);
            }
            Err(e)
        }
    }
}

/// Handles the main computation: every season from the requested one
/// through the current season, fetched from the configured API.
pub async fn handle_points_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let start = args
        .season
        .ok_or_else(|| AppError::config_error("A starting season is required"))?;
    let seasons = seasons_from(start)?;
    info!(
        "Calculating effective points for seasons {} through {}",
        start,
        seasons.last().map_or(start, |s| s.start_year)
    );

    let client = NhlClient::new(config)?;
    compute_and_report(&client, &seasons, args.json).await?;
    Ok(())
}
