//! Decides which goals of a finished game were effective.
//!
//! A game decided in regulation only needed as many winning-team goals as
//! the loser scored plus one, so the earliest `losing_goals + 1` goals by the
//! winning team are effective. A game that went to overtime or a shootout
//! counts every goal from both teams.

use super::models::{GameRecord, PlayerId, Side};
use crate::error::AppError;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Regulation { winner: Side },
    ExtraTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveGoal {
    pub play_index: usize,
    pub credited: Vec<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub decision: Decision,
    /// Effective goals the final score implies.
    pub budget: u32,
    pub goals: Vec<EffectiveGoal>,
}

impl Classification {
    pub fn credited_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.goals.iter().flat_map(|g| g.credited.iter().copied())
    }
}

/// Determines how the game was decided and how many effective goals the
/// score implies.
pub fn effective_goal_budget(game: &GameRecord) -> Result<(Decision, u32), AppError> {
    let implausible_score = || {
        AppError::invalid_game_data(
            &game.game_id,
            format!(
                "implausible score {}-{}",
                game.home_goals, game.away_goals
            ),
        )
    };

    if game.went_to_extra_time() {
        let total = game.total_goals().ok_or_else(implausible_score)?;
        return Ok((Decision::ExtraTime, total));
    }

    // A regulation tie cannot happen in valid data; treating it as an away
    // win makes it fail the budget check below.
    let winner = if game.home_goals > game.away_goals {
        Side::Home
    } else {
        Side::Away
    };
    let budget = game
        .goals(winner.opponent())
        .checked_add(1)
        .ok_or_else(implausible_score)?;
    Ok((Decision::Regulation { winner }, budget))
}

/// Classifies the effective goals of a Final game.
///
/// Fails with `AppError::BudgetInvariant` when the play-by-play contains
/// fewer qualifying goal events than the score implies, and with
/// `AppError::InvalidGameData` when a scoring play index does not resolve
/// or the score itself is out of range.
pub fn classify(game: &GameRecord) -> Result<Classification, AppError> {
    let (decision, budget) = effective_goal_budget(game)?;
    let winning_team = match decision {
        Decision::Regulation { winner } => Some(game.team_id(winner)),
        Decision::ExtraTime => None,
    };

    let mut remaining = budget;
    let mut goals = Vec::with_capacity(game.scoring_plays_order.len().min(budget as usize));

    for entry in game.scoring_plays() {
        if remaining == 0 {
            break;
        }
        let (play_index, play) = entry.map_err(|idx| {
            AppError::invalid_game_data(
                &game.game_id,
                format!("scoring play {idx} is missing from the play list"),
            )
        })?;

        if !play.is_goal() {
            continue;
        }
        if let Some(team) = winning_team
            && play.team_id != Some(team)
        {
            continue;
        }

        remaining -= 1;
        goals.push(EffectiveGoal {
            play_index,
            credited: play.credited_players().collect(),
        });
    }

    if remaining != 0 {
        warn!(
            "Game {}: {} of {} effective goals unaccounted for ({:?})",
            game.game_id, remaining, budget, decision
        );
        return Err(AppError::budget_invariant(
            &game.game_id,
            budget,
            budget - remaining,
        ));
    }

    debug!(
        "Game {}: {:?}, {} effective goals",
        game.game_id,
        decision,
        goals.len()
    );

    Ok(Classification {
        decision,
        budget,
        goals,
    })
}
