//! Application-wide constants and configuration values

/// Default API domain for the NHL stats API
pub const DEFAULT_API_DOMAIN: &str = "https://statsapi.web.nhl.com";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Name used for the config directory and default log file
pub const APP_NAME: &str = "effective_points";

/// NHL regular season structure
pub mod schedule {
    /// Game-type code for regular season games in a game identifier
    pub const REGULAR_SEASON_GAME_TYPE: &str = "02";

    /// First season played with 31 teams
    pub const EXPANDED_LEAGUE_FIRST_SEASON: i32 = 2017;

    /// Regular season games with 30 teams
    pub const GAMES_BEFORE_EXPANSION: u32 = 1230;

    /// Regular season games with 31 teams
    pub const GAMES_SINCE_EXPANSION: u32 = 1271;

    /// Month a new season starts in
    pub const SEASON_START_MONTH: u32 = 9;
}

/// Environment variable names
pub mod env_vars {
    /// Override API domain
    pub const API_DOMAIN: &str = "EFFECTIVE_POINTS_API_DOMAIN";

    /// Override log file path
    pub const LOG_FILE: &str = "EFFECTIVE_POINTS_LOG_FILE";

    /// Override HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "EFFECTIVE_POINTS_HTTP_TIMEOUT";
}
