mod fetch_utils;
pub mod game_api;
pub mod http_client;
pub mod urls;

pub use game_api::NhlClient;
pub use http_client::create_http_client_with_timeout;
pub use urls::build_game_feed_url;
