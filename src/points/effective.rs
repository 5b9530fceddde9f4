use super::models::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Running effective-point totals keyed by player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectivePoints {
    totals: HashMap<PlayerId, u32>,
}

impl EffectivePoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one point to `player`, starting from zero if unseen.
    pub fn credit(&mut self, player: PlayerId) -> u32 {
        let total = self.totals.entry(player).or_insert(0);
        *total += 1;
        *total
    }

    pub fn get(&self, player: PlayerId) -> u32 {
        self.totals.get(&player).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum of every player's points.
    pub fn total(&self) -> u64 {
        self.totals.values().map(|&v| u64::from(v)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, u32)> + '_ {
        self.totals.iter().map(|(&id, &points)| (id, points))
    }

    /// Highest totals first, ties broken by player id.
    pub fn sorted(&self) -> Vec<(PlayerId, u32)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

impl FromIterator<PlayerId> for EffectivePoints {
    fn from_iter<I: IntoIterator<Item = PlayerId>>(iter: I) -> Self {
        let mut points = EffectivePoints::new();
        for player in iter {
            points.credit(player);
        }
        points
    }
}
