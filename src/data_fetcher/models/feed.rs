//! Subset of the NHL `feed/live` response the effective points run reads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveFeedResponse {
    #[serde(rename = "gameData")]
    pub game_data: FeedGameData,
    #[serde(rename = "liveData")]
    pub live_data: FeedLiveData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedGameData {
    pub status: FeedStatus,
    pub teams: FeedTeams<FeedTeam>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedStatus {
    #[serde(rename = "abstractGameState")]
    pub abstract_game_state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedTeams<T> {
    pub home: T,
    pub away: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedTeam {
    pub id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedLiveData {
    pub plays: FeedPlays,
    pub linescore: FeedLinescore,
    pub boxscore: FeedBoxscore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPlays {
    #[serde(rename = "allPlays", default)]
    pub all_plays: Vec<FeedPlay>,
    #[serde(rename = "scoringPlays", default)]
    pub scoring_plays: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPlay {
    pub result: FeedPlayResult,
    #[serde(default)]
    pub team: Option<FeedTeam>,
    #[serde(default)]
    pub players: Vec<FeedPlayPlayer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPlayResult {
    pub event: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPlayPlayer {
    pub player: FeedPlayerRef,
    #[serde(rename = "playerType")]
    pub player_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPlayerRef {
    pub id: u64,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedLinescore {
    #[serde(default)]
    pub periods: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedBoxscore {
    pub teams: FeedTeams<FeedBoxscoreTeam>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedBoxscoreTeam {
    // Absent on games that have not started
    #[serde(rename = "teamStats", default)]
    pub team_stats: FeedTeamStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedTeamStats {
    #[serde(rename = "teamSkaterStats", default)]
    pub team_skater_stats: FeedSkaterStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedSkaterStats {
    #[serde(default)]
    pub goals: u32,
}
