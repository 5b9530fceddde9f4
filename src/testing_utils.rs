//! Builders for game records and live-feed payloads used in tests.

use crate::points::{GameRecord, GameStatus, Participant, Play, PlayerId, Role, TeamId};
use serde_json::{Value, json};
use std::collections::HashMap;

pub const HOME_TEAM: TeamId = 22;
pub const AWAY_TEAM: TeamId = 20;

/// Fluent builder for `GameRecord`s. Goals are added in chronological
/// order and receive increasing play indices.
#[derive(Debug, Clone)]
pub struct GameBuilder {
    record: GameRecord,
    next_index: usize,
}

impl GameBuilder {
    pub fn new(game_id: &str) -> Self {
        Self {
            record: GameRecord {
                game_id: game_id.to_string(),
                status: GameStatus::Final,
                period_count: 3,
                home_goals: 0,
                away_goals: 0,
                home_team_id: HOME_TEAM,
                away_team_id: AWAY_TEAM,
                scoring_plays_order: Vec::new(),
                all_plays: HashMap::new(),
            },
            next_index: 0,
        }
    }

    pub fn status(mut self, status: GameStatus) -> Self {
        self.record.status = status;
        self
    }

    pub fn periods(mut self, period_count: u32) -> Self {
        self.record.period_count = period_count;
        self
    }

    pub fn score(mut self, home: u32, away: u32) -> Self {
        self.record.home_goals = home;
        self.record.away_goals = away;
        self
    }

    /// Adds a goal by `team` scored by `scorer` with the given assists.
    pub fn goal(self, team: TeamId, scorer: PlayerId, assists: &[PlayerId]) -> Self {
        let mut participants = vec![Participant::new(scorer, Role::Scorer)];
        participants.extend(assists.iter().map(|&a| Participant::new(a, Role::Assist)));
        self.play(Play {
            event_type: Play::GOAL_EVENT.to_string(),
            team_id: Some(team),
            participants,
        })
    }

    pub fn home_goal(self, scorer: PlayerId, assists: &[PlayerId]) -> Self {
        self.goal(HOME_TEAM, scorer, assists)
    }

    pub fn away_goal(self, scorer: PlayerId, assists: &[PlayerId]) -> Self {
        self.goal(AWAY_TEAM, scorer, assists)
    }

    /// Adds an arbitrary play to the scoring sequence.
    pub fn play(mut self, play: Play) -> Self {
        // Leave gaps so indices differ from positions
        let idx = self.next_index * 7 + 2;
        self.next_index += 1;
        self.record.all_plays.insert(idx, play);
        self.record.scoring_plays_order.push(idx);
        self
    }

    pub fn build(self) -> GameRecord {
        self.record
    }
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Final => "Final",
        GameStatus::InProgress => "Live",
        GameStatus::Scheduled => "Preview",
        GameStatus::Unknown => "Postponed",
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Scorer => "Scorer",
        Role::Assist => "Assist",
        Role::Goalie => "Goalie",
        Role::Other => "Hitter",
    }
}

/// Renders a `GameRecord` as a `feed/live` JSON payload, padding the play
/// list with faceoffs so scoring play indices resolve as in the record.
pub fn feed_json(record: &GameRecord) -> Value {
    let len = record.all_plays.keys().max().map_or(0, |&max| max + 1);
    let all_plays: Vec<Value> = (0..len)
        .map(|idx| match record.all_plays.get(&idx) {
            Some(play) => json!({
                "result": { "event": play.event_type },
                "team": play.team_id.map(|id| json!({ "id": id })),
                "players": play.participants.iter().map(|p| json!({
                    "player": { "id": p.player_id, "fullName": format!("Skater {}", p.player_id) },
                    "playerType": role_label(p.role),
                })).collect::<Vec<_>>(),
            }),
            None => json!({ "result": { "event": "Faceoff" }, "players": [] }),
        })
        .collect();
    let periods: Vec<Value> = (1..=record.period_count)
        .map(|n| json!({ "num": n }))
        .collect();

    json!({
        "gameData": {
            "status": { "abstractGameState": status_label(record.status) },
            "teams": {
                "home": { "id": record.home_team_id },
                "away": { "id": record.away_team_id }
            }
        },
        "liveData": {
            "plays": {
                "allPlays": all_plays,
                "scoringPlays": record.scoring_plays_order,
            },
            "linescore": { "periods": periods },
            "boxscore": {
                "teams": {
                    "home": { "teamStats": { "teamSkaterStats": { "goals": record.home_goals } } },
                    "away": { "teamStats": { "teamSkaterStats": { "goals": record.away_goals } } }
                }
            }
        }
    })
}
