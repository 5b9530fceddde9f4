//! Drives the season/game range through a game source into the aggregator.

use crate::data_fetcher::player_names::PlayerNames;
use crate::error::AppError;
use crate::points::{Aggregator, GameOutcome, GameRecord};
use crate::schedule::Season;
use tracing::{debug, error, info};

/// A game record together with the player names its feed carried.
#[derive(Debug, Clone)]
pub struct FetchedGame {
    pub record: GameRecord,
    pub names: PlayerNames,
}

impl From<GameRecord> for FetchedGame {
    fn from(record: GameRecord) -> Self {
        Self {
            record,
            names: PlayerNames::new(),
        }
    }
}

/// Anything that can produce the record of one regular-season game.
#[allow(async_fn_in_trait)]
pub trait GameSource {
    async fn fetch_game(&self, season: i32, game_number: u32) -> Result<FetchedGame, AppError>;
}

/// Counters reported once a run completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub seasons: u32,
    pub games_fetched: u32,
    pub games_counted: u32,
    pub games_skipped: u32,
}

/// Processes every game of every season, strictly one after another.
///
/// The first fetch failure or data inconsistency aborts the run. Totals for
/// games already processed stay in `aggregator` so they can be surfaced.
pub async fn run<S: GameSource>(
    source: &S,
    seasons: &[Season],
    aggregator: &mut Aggregator,
    names: &mut PlayerNames,
) -> Result<RunSummary, AppError> {
    let mut summary = RunSummary::default();

    for season in seasons {
        info!(
            "Processing season {}-{} ({} games)",
            season.start_year,
            season.start_year + 1,
            season.max_games
        );

        for game_number in season.game_numbers() {
            let fetched = source
                .fetch_game(season.start_year, game_number)
                .await
                .map_err(|e| {
                    error!(
                        "Aborting: season {} game {} could not be fetched: {}",
                        season.start_year, game_number, e
                    );
                    match e {
                        wrapped @ AppError::GameFetch { .. } => wrapped,
                        other => AppError::game_fetch(
                            season.start_year,
                            game_number,
                            season.game_id(game_number),
                            other,
                        ),
                    }
                })?;
            summary.games_fetched += 1;

            match aggregator.process(&fetched.record)? {
                GameOutcome::Skipped => {
                    debug!("Game {} is not final, skipped", fetched.record.game_id);
                    summary.games_skipped += 1;
                }
                GameOutcome::Counted(classification) => {
                    info!(
                        "Game {}: {} effective goals ({:?})",
                        fetched.record.game_id,
                        classification.goals.len(),
                        classification.decision
                    );
                    summary.games_counted += 1;
                    names.extend(fetched.names);
                }
            }
        }

        summary.seasons += 1;
        info!(
            "Season {} done: {} players with effective points so far",
            season.start_year,
            aggregator.points().len()
        );
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::GameStatus;
    use crate::testing_utils::GameBuilder;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves games from memory; anything not listed is an unplayed game.
    #[derive(Default)]
    struct MemorySource {
        games: HashMap<(i32, u32), GameRecord>,
        fail_at: Option<(i32, u32)>,
        requests: RefCell<Vec<(i32, u32)>>,
    }

    impl GameSource for MemorySource {
        async fn fetch_game(&self, season: i32, game_number: u32) -> Result<FetchedGame, AppError> {
            self.requests.borrow_mut().push((season, game_number));
            if self.fail_at == Some((season, game_number)) {
                return Err(AppError::api_server_error(500, "boom", "memory://"));
            }
            Ok(self
                .games
                .get(&(season, game_number))
                .cloned()
                .unwrap_or_else(|| {
                    GameBuilder::new(&crate::schedule::game_id(season, game_number))
                        .status(GameStatus::Scheduled)
                        .build()
                })
                .into())
        }
    }

    fn small_season(year: i32, games: u32) -> Season {
        Season {
            start_year: year,
            max_games: games,
        }
    }

    #[tokio::test]
    async fn test_run_processes_games_in_order() {
        let mut source = MemorySource::default();
        source.games.insert(
            (2019, 1),
            GameBuilder::new("2019020001").score(1, 0).home_goal(1, &[2]).build(),
        );
        source.games.insert(
            (2020, 2),
            GameBuilder::new("2020020002").score(0, 1).away_goal(1, &[]).build(),
        );

        let seasons = [small_season(2019, 2), small_season(2020, 2)];
        let mut aggregator = Aggregator::new();
        let mut names = PlayerNames::new();
        let summary = run(&source, &seasons, &mut aggregator, &mut names)
            .await
            .unwrap();

        assert_eq!(
            *source.requests.borrow(),
            vec![(2019, 1), (2019, 2), (2020, 1), (2020, 2)]
        );
        assert_eq!(summary.seasons, 2);
        assert_eq!(summary.games_fetched, 4);
        assert_eq!(summary.games_counted, 2);
        assert_eq!(summary.games_skipped, 2);
        assert_eq!(aggregator.points().get(1), 2);
        assert_eq!(aggregator.points().get(2), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_aborts_and_keeps_partial_totals() {
        let mut source = MemorySource::default();
        source.games.insert(
            (2019, 1),
            GameBuilder::new("2019020001").score(1, 0).home_goal(5, &[]).build(),
        );
        source.fail_at = Some((2019, 2));

        let seasons = [small_season(2019, 3)];
        let mut aggregator = Aggregator::new();
        let mut names = PlayerNames::new();
        let err = run(&source, &seasons, &mut aggregator, &mut names)
            .await
            .unwrap_err();

        match err {
            AppError::GameFetch {
                season,
                game_number,
                ref game_id,
                ..
            } => {
                assert_eq!(season, 2019);
                assert_eq!(game_number, 2);
                assert_eq!(game_id, "2019020002");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // game 3 was never requested
        assert_eq!(source.requests.borrow().len(), 2);
        assert_eq!(aggregator.points().get(5), 1);
    }

    #[tokio::test]
    async fn test_budget_violation_aborts_run() {
        let mut source = MemorySource::default();
        source.games.insert(
            (2019, 1),
            GameBuilder::new("2019020001").score(2, 0).away_goal(9, &[]).build(),
        );

        let seasons = [small_season(2019, 2)];
        let mut aggregator = Aggregator::new();
        let mut names = PlayerNames::new();
        let err = run(&source, &seasons, &mut aggregator, &mut names)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BudgetInvariant { .. }));
        assert_eq!(source.requests.borrow().len(), 1);
        assert!(aggregator.points().is_empty());
    }
}
