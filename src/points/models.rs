use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type PlayerId = u64;
pub type TeamId = u64;

/// Periods in a game decided in regulation time.
pub const REGULATION_PERIODS: u32 = 3;

/// Where a game stands. Only `Final` games carry authoritative scoring data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Final,
    InProgress,
    Scheduled,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// A participant's part in a play. Only `Scorer` and `Assist` earn credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Scorer,
    Assist,
    Goalie,
    #[serde(other)]
    Other,
}

impl Role {
    pub fn earns_credit(self) -> bool {
        matches!(self, Role::Scorer | Role::Assist)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub player_id: PlayerId,
    pub role: Role,
}

impl Participant {
    pub fn new(player_id: PlayerId, role: Role) -> Self {
        Self { player_id, role }
    }

    pub fn earns_credit(&self) -> bool {
        self.role.earns_credit()
    }
}

/// A single play-by-play event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub event_type: String,
    pub team_id: Option<TeamId>,
    pub participants: Vec<Participant>,
}

impl Play {
    pub const GOAL_EVENT: &'static str = "Goal";

    pub fn is_goal(&self) -> bool {
        self.event_type == Self::GOAL_EVENT
    }

    /// Players credited if this play is an effective goal, in participant order.
    pub fn credited_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.participants
            .iter()
            .filter(|p| p.earns_credit())
            .map(|p| p.player_id)
    }
}

/// Everything the effectiveness classifier needs to know about one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: String,
    pub status: GameStatus,
    pub period_count: u32,
    pub home_goals: u32,
    pub away_goals: u32,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    /// Indices into `all_plays`, in the order the goals happened.
    pub scoring_plays_order: Vec<usize>,
    pub all_plays: HashMap<usize, Play>,
}

impl GameRecord {
    pub fn is_final(&self) -> bool {
        self.status == GameStatus::Final
    }

    /// Overtime or shootout.
    pub fn went_to_extra_time(&self) -> bool {
        self.period_count > REGULATION_PERIODS
    }

    pub fn goals(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_goals,
            Side::Away => self.away_goals,
        }
    }

    pub fn team_id(&self, side: Side) -> TeamId {
        match side {
            Side::Home => self.home_team_id,
            Side::Away => self.away_team_id,
        }
    }

    /// `None` when the reported goal counts overflow.
    pub fn total_goals(&self) -> Option<u32> {
        self.home_goals.checked_add(self.away_goals)
    }

    /// Scoring plays in chronological order. Yields `Err(index)` for an
    /// index with no matching entry in `all_plays`.
    pub fn scoring_plays(&self) -> impl Iterator<Item = Result<(usize, &Play), usize>> + '_ {
        self.scoring_plays_order
            .iter()
            .map(|&idx| self.all_plays.get(&idx).map(|play| (idx, play)).ok_or(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(team_id: TeamId, participants: Vec<Participant>) -> Play {
        Play {
            event_type: "Goal".to_string(),
            team_id: Some(team_id),
            participants,
        }
    }

    #[test]
    fn test_role_credit() {
        assert!(Role::Scorer.earns_credit());
        assert!(Role::Assist.earns_credit());
        assert!(!Role::Goalie.earns_credit());
        assert!(!Role::Other.earns_credit());
    }

    #[test]
    fn test_role_deserializes_unknown_as_other() {
        let role: Role = serde_json::from_str("\"Shooter\"").unwrap();
        assert_eq!(role, Role::Other);
        let role: Role = serde_json::from_str("\"Assist\"").unwrap();
        assert_eq!(role, Role::Assist);
    }

    #[test]
    fn test_credited_players_skips_goalie() {
        let play = goal(
            10,
            vec![
                Participant::new(1, Role::Scorer),
                Participant::new(2, Role::Assist),
                Participant::new(3, Role::Goalie),
            ],
        );
        assert_eq!(play.credited_players().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_extra_time_detection() {
        let mut game = GameRecord {
            game_id: "2019020001".to_string(),
            status: GameStatus::Final,
            period_count: 3,
            home_goals: 2,
            away_goals: 1,
            home_team_id: 10,
            away_team_id: 20,
            scoring_plays_order: vec![],
            all_plays: HashMap::new(),
        };
        assert!(!game.went_to_extra_time());
        game.period_count = 4;
        assert!(game.went_to_extra_time());
        game.period_count = 5;
        assert!(game.went_to_extra_time());
    }

    #[test]
    fn test_scoring_plays_reports_dangling_index() {
        let mut all_plays = HashMap::new();
        all_plays.insert(4, goal(10, vec![]));
        let game = GameRecord {
            game_id: "2019020001".to_string(),
            status: GameStatus::Final,
            period_count: 3,
            home_goals: 1,
            away_goals: 0,
            home_team_id: 10,
            away_team_id: 20,
            scoring_plays_order: vec![4, 9],
            all_plays,
        };
        let plays: Vec<_> = game.scoring_plays().collect();
        assert!(matches!(plays[0], Ok((4, _))));
        assert_eq!(plays[1], Err(9));
    }

    #[test]
    fn test_side_accessors() {
        assert_eq!(Side::Home.opponent(), Side::Away);
        assert_eq!(Side::Away.opponent(), Side::Home);
    }
}
