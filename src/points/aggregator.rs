use super::classifier::{Classification, classify};
use super::effective::EffectivePoints;
use super::models::GameRecord;
use crate::error::AppError;
use tracing::{debug, instrument};

/// What happened to a single game handed to the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// Not Final yet; nothing was recorded.
    Skipped,
    Counted(Classification),
}

/// Accumulates effective points across every game of a run.
///
/// Games are independent: each one is classified in full before any of its
/// points are credited, so the totals only ever contain whole games.
#[derive(Debug, Default)]
pub struct Aggregator {
    points: EffectivePoints,
    games_processed: u32,
    games_skipped: u32,
    effective_goals: u32,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(skip(self, game), fields(game_id = %game.game_id))]
    pub fn process(&mut self, game: &GameRecord) -> Result<GameOutcome, AppError> {
        if !game.is_final() {
            debug!("Skipping game {} with status {:?}", game.game_id, game.status);
            self.games_skipped += 1;
            return Ok(GameOutcome::Skipped);
        }

        let classification = classify(game)?;
        for player in classification.credited_players() {
            self.points.credit(player);
        }

        self.games_processed += 1;
        self.effective_goals += classification.goals.len() as u32;
        Ok(GameOutcome::Counted(classification))
    }

    pub fn points(&self) -> &EffectivePoints {
        &self.points
    }

    pub fn into_points(self) -> EffectivePoints {
        self.points
    }

    pub fn games_processed(&self) -> u32 {
        self.games_processed
    }

    pub fn games_skipped(&self) -> u32 {
        self.games_skipped
    }

    pub fn effective_goals(&self) -> u32 {
        self.effective_goals
    }
}
