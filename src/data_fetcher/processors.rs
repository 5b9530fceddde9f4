//! Turns raw live-feed responses into the records the points core consumes.

use crate::data_fetcher::models::{FeedPlay, LiveFeedResponse};
use crate::data_fetcher::player_names::PlayerNames;
use crate::points::{GameRecord, GameStatus, Participant, Play, Role};
use tracing::debug;

/// Maps the feed's `abstractGameState` to a game status.
pub fn determine_game_status(abstract_game_state: &str) -> GameStatus {
    match abstract_game_state {
        "Final" => GameStatus::Final,
        "Live" => GameStatus::InProgress,
        "Preview" => GameStatus::Scheduled,
        _ => GameStatus::Unknown,
    }
}

/// Maps a feed `playerType` to a participant role.
pub fn determine_role(player_type: &str) -> Role {
    match player_type {
        "Scorer" => Role::Scorer,
        "Assist" => Role::Assist,
        "Goalie" => Role::Goalie,
        _ => Role::Other,
    }
}

fn convert_play(play: &FeedPlay, names: &mut PlayerNames) -> Play {
    let participants = play
        .players
        .iter()
        .map(|p| {
            if let Some(name) = &p.player.full_name {
                names.insert(p.player.id, name);
            }
            Participant::new(p.player.id, determine_role(&p.player_type))
        })
        .collect();

    Play {
        event_type: play.result.event.clone(),
        team_id: play.team.as_ref().map(|t| t.id),
        participants,
    }
}

/// Builds a `GameRecord` from a feed, along with the names of every player
/// appearing in a scoring play.
///
/// Only plays referenced from `scoringPlays` are carried over; the rest of
/// the play-by-play never influences effective points.
pub fn process_live_feed(game_id: &str, feed: &LiveFeedResponse) -> (GameRecord, PlayerNames) {
    let live = &feed.live_data;
    let mut names = PlayerNames::new();

    let all_plays = live
        .plays
        .scoring_plays
        .iter()
        .filter_map(|&idx| {
            live.plays
                .all_plays
                .get(idx)
                .map(|play| (idx, convert_play(play, &mut names)))
        })
        .collect();

    let record = GameRecord {
        game_id: game_id.to_string(),
        status: determine_game_status(&feed.game_data.status.abstract_game_state),
        period_count: live.linescore.periods.len() as u32,
        home_goals: live.boxscore.teams.home.team_stats.team_skater_stats.goals,
        away_goals: live.boxscore.teams.away.team_stats.team_skater_stats.goals,
        home_team_id: feed.game_data.teams.home.id,
        away_team_id: feed.game_data.teams.away.id,
        scoring_plays_order: live.plays.scoring_plays.clone(),
        all_plays,
    };

    debug!(
        "Game {}: status={:?}, periods={}, score {}-{}, {} scoring plays",
        record.game_id,
        record.status,
        record.period_count,
        record.home_goals,
        record.away_goals,
        record.scoring_plays_order.len()
    );

    (record, names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_feed() -> LiveFeedResponse {
        serde_json::from_value(json!({
            "gameData": {
                "status": { "abstractGameState": "Final", "detailedState": "Final" },
                "teams": {
                    "home": { "id": 22, "name": "Edmonton Oilers" },
                    "away": { "id": 20, "name": "Calgary Flames" }
                }
            },
            "liveData": {
                "plays": {
                    "allPlays": [
                        { "result": { "event": "Faceoff" }, "players": [] },
                        {
                            "result": { "event": "Goal" },
                            "team": { "id": 22 },
                            "players": [
                                { "player": { "id": 8478402, "fullName": "Connor McDavid" }, "playerType": "Scorer" },
                                { "player": { "id": 8477934, "fullName": "Leon Draisaitl" }, "playerType": "Assist" },
                                { "player": { "id": 8474593, "fullName": "Jacob Markstrom" }, "playerType": "Goalie" }
                            ]
                        },
                        { "result": { "event": "Shot" }, "team": { "id": 20 }, "players": [] },
                        {
                            "result": { "event": "Goal" },
                            "team": { "id": 20 },
                            "players": [
                                { "player": { "id": 8476456, "fullName": "Jonathan Huberdeau" }, "playerType": "Scorer" }
                            ]
                        }
                    ],
                    "scoringPlays": [1, 3]
                },
                "linescore": { "periods": [{}, {}, {}, {}] },
                "boxscore": {
                    "teams": {
                        "home": { "teamStats": { "teamSkaterStats": { "goals": 1 } } },
                        "away": { "teamStats": { "teamSkaterStats": { "goals": 1 } } }
                    }
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(determine_game_status("Final"), GameStatus::Final);
        assert_eq!(determine_game_status("Live"), GameStatus::InProgress);
        assert_eq!(determine_game_status("Preview"), GameStatus::Scheduled);
        assert_eq!(determine_game_status("Postponed"), GameStatus::Unknown);
    }

    #[test]
    fn test_role_mapping() {
        assert_eq!(determine_role("Scorer"), Role::Scorer);
        assert_eq!(determine_role("Assist"), Role::Assist);
        assert_eq!(determine_role("Goalie"), Role::Goalie);
        assert_eq!(determine_role("Hitter"), Role::Other);
    }

    #[test]
    fn test_process_live_feed() {
        let (record, names) = process_live_feed("2022020001", &sample_feed());

        assert_eq!(record.game_id, "2022020001");
        assert_eq!(record.status, GameStatus::Final);
        assert_eq!(record.period_count, 4);
        assert_eq!((record.home_goals, record.away_goals), (1, 1));
        assert_eq!((record.home_team_id, record.away_team_id), (22, 20));
        assert_eq!(record.scoring_plays_order, vec![1, 3]);
        assert_eq!(record.all_plays.len(), 2);

        let first = &record.all_plays[&1];
        assert!(first.is_goal());
        assert_eq!(first.team_id, Some(22));
        assert_eq!(first.credited_players().collect::<Vec<_>>(), vec![8478402, 8477934]);

        assert_eq!(names.get(8478402), Some("Connor McDavid"));
        assert_eq!(names.get(8474593), Some("Jacob Markstrom"));
    }

    #[test]
    fn test_dangling_scoring_index_is_kept_in_order() {
        let mut feed = sample_feed();
        feed.live_data.plays.scoring_plays.push(99);
        let (record, _) = process_live_feed("2022020001", &feed);
        assert_eq!(record.scoring_plays_order, vec![1, 3, 99]);
        assert!(!record.all_plays.contains_key(&99));
    }

    #[test]
    fn test_preview_game_without_stats() {
        let feed: LiveFeedResponse = serde_json::from_value(json!({
            "gameData": {
                "status": { "abstractGameState": "Preview" },
                "teams": { "home": { "id": 1 }, "away": { "id": 2 } }
            },
            "liveData": {
                "plays": { "allPlays": [], "scoringPlays": [] },
                "linescore": { "periods": [] },
                "boxscore": { "teams": { "home": {}, "away": {} } }
            }
        }))
        .unwrap();
        let (record, names) = process_live_feed("2022021271", &feed);
        assert_eq!(record.status, GameStatus::Scheduled);
        assert_eq!(record.total_goals(), Some(0));
        assert!(names.is_empty());
    }
}
