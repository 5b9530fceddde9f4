//! URL building utilities for API endpoints

/// Builds the live feed URL for a single game.
///
/// # Example
/// ```
/// use effective_points::data_fetcher::api::build_game_feed_url;
///
/// let url = build_game_feed_url("https://statsapi.web.nhl.com", "2019020001");
/// assert_eq!(url, "https://statsapi.web.nhl.com/api/v1/game/2019020001/feed/live");
/// ```
pub fn build_game_feed_url(api_domain: &str, game_id: &str) -> String {
    format!("{api_domain}/api/v1/game/{game_id}/feed/live")
}
