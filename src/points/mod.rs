//! Effective-points core: classifying the goals of finished games and
//! accumulating per-player totals.

pub mod aggregator;
pub mod classifier;
pub mod effective;
pub mod models;

pub use aggregator::{Aggregator, GameOutcome};
pub use classifier::{Classification, Decision, EffectiveGoal, classify, effective_goal_budget};
pub use effective::EffectivePoints;
pub use models::{GameRecord, GameStatus, Participant, Play, PlayerId, Role, Side, TeamId};
