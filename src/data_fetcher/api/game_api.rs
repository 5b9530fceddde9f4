//! Game feed retrieval from the NHL stats API

use reqwest::Client;
use tracing::{debug, instrument};

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::build_game_feed_url;
use crate::config::Config;
use crate::data_fetcher::models::LiveFeedResponse;
use crate::data_fetcher::processors::process_live_feed;
use crate::error::AppError;
use crate::runner::{FetchedGame, GameSource};
use crate::schedule::game_id;

/// Fetches regular-season game feeds over HTTP.
#[derive(Debug, Clone)]
pub struct NhlClient {
    client: Client,
    api_domain: String,
}

impl NhlClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            api_domain: config.api_base(),
        }
    }

    /// Fetches the raw live feed for a game identifier.
    pub async fn fetch_live_feed(&self, game_id: &str) -> Result<LiveFeedResponse, AppError> {
        let url = build_game_feed_url(&self.api_domain, game_id);
        fetch::<LiveFeedResponse>(&self.client, &url).await
    }
}

impl GameSource for NhlClient {
    #[instrument(skip(self))]
    async fn fetch_game(&self, season: i32, game_number: u32) -> Result<FetchedGame, AppError> {
        let id = game_id(season, game_number);
        let feed = self
            .fetch_live_feed(&id)
            .await
            .map_err(|e| AppError::game_fetch(season, game_number, &id, e))?;
        let (record, names) = process_live_feed(&id, &feed);
        debug!("Fetched game {} with status {:?}", id, record.status);
        Ok(FetchedGame { record, names })
    }
}
