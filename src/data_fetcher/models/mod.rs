pub mod feed;

pub use feed::{
    FeedBoxscore, FeedBoxscoreTeam, FeedGameData, FeedLinescore, FeedLiveData, FeedPlay,
    FeedPlayPlayer, FeedPlayResult, FeedPlayerRef, FeedPlays, FeedSkaterStats, FeedStatus,
    FeedTeam, FeedTeamStats, FeedTeams, LiveFeedResponse,
};
