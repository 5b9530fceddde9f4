//! Player names collected from game feeds, used only for presentation.

use crate::points::PlayerId;
use std::collections::HashMap;

/// Creates a fallback player name when the feed did not carry one.
///
/// # Example
/// ```
/// use effective_points::data_fetcher::player_names::create_fallback_name;
///
/// assert_eq!(create_fallback_name(8471214), "Player 8471214");
/// ```
pub fn create_fallback_name(player_id: PlayerId) -> String {
    format!("Player {player_id}")
}

/// Maps player ids to the most recently seen full name.
#[derive(Debug, Clone, Default)]
pub struct PlayerNames {
    names: HashMap<PlayerId, String>,
}

impl PlayerNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a name, replacing any earlier one. Blank names are ignored.
    pub fn insert(&mut self, player_id: PlayerId, full_name: &str) {
        let trimmed = full_name.trim();
        if !trimmed.is_empty() {
            self.names.insert(player_id, trimmed.to_string());
        }
    }

    pub fn get(&self, player_id: PlayerId) -> Option<&str> {
        self.names.get(&player_id).map(String::as_str)
    }

    /// Name for display, falling back to a generic label.
    pub fn display_name(&self, player_id: PlayerId) -> String {
        self.get(player_id)
            .map(str::to_string)
            .unwrap_or_else(|| create_fallback_name(player_id))
    }

    pub fn extend(&mut self, other: PlayerNames) {
        self.names.extend(other.names);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
