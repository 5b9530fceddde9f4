pub mod api;
pub mod models;
pub mod player_names;
pub mod processors;

pub use api::NhlClient;
pub use models::LiveFeedResponse;
pub use player_names::PlayerNames;
pub use processors::process_live_feed;
