//! Football: two players push one ball across a nine-node pitch by hitting the
//! numbers painted on neighbouring nodes.
//!
//! ```text
//!               posTL           posTR
//!             /       \       /       \
//! goalL = posL         posC            posR = goalR
//!             \       /       \       /
//!               posBL           posBR
//! ```
//!
//! `=` marks the two shots on goal: weight-2 edges that need a double/triple or
//! two single hits in a row. Seat 0 attacks `goalR`, seat 1 attacks `goalL`.

use crate::logic::engine::ScoreEngine;
use crate::logic::ranking::tiered_rankings;
use crate::logic::turn::TurnCursor;
use crate::models::{GameError, GameKind, GameStatus, Player, Ranking, Seat, Throw};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MAX_ROUNDS: u32 = 7;

/// A position on the pitch.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    GoalL,
    PosL,
    PosTl,
    PosBl,
    PosC,
    PosTr,
    PosBr,
    PosR,
    GoalR,
}

impl Node {
    pub const ALL: [Node; 9] = [
        Node::GoalL,
        Node::PosL,
        Node::PosTl,
        Node::PosBl,
        Node::PosC,
        Node::PosTr,
        Node::PosBr,
        Node::PosR,
        Node::GoalR,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_goal(self) -> bool {
        matches!(self, Node::GoalL | Node::GoalR)
    }
}

/// Undirected edges with their weight (hits needed to cross).
pub const PITCH: [(Node, Node, u8); 10] = [
    (Node::GoalL, Node::PosL, 2),
    (Node::PosL, Node::PosTl, 1),
    (Node::PosL, Node::PosBl, 1),
    (Node::PosTl, Node::PosC, 1),
    (Node::PosBl, Node::PosC, 1),
    (Node::PosC, Node::PosTr, 1),
    (Node::PosC, Node::PosBr, 1),
    (Node::PosTr, Node::PosR, 1),
    (Node::PosBr, Node::PosR, 1),
    (Node::PosR, Node::GoalR, 2),
];

/// Nodes reachable from `node` in one move, with the edge weight.
pub fn edges_from(node: Node) -> impl Iterator<Item = (Node, u8)> {
    PITCH.iter().filter_map(move |&(a, b, weight)| {
        if a == node {
            Some((b, weight))
        } else if b == node {
            Some((a, weight))
        } else {
            None
        }
    })
}

/// The goal a seat shoots at.
pub fn attacking_goal(seat: usize) -> Node {
    if seat == 0 {
        Node::GoalR
    } else {
        Node::GoalL
    }
}

fn seat_attacking(goal: Node) -> usize {
    if goal == Node::GoalR {
        0
    } else {
        1
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    #[default]
    Regulation,
    /// Sudden-death penalties: one dart per turn at the goal you attack.
    Shootout,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct FootballSeat {
    pub goals: u32,
    pub penalty_goals: u32,
}

impl FootballSeat {
    pub fn total(&self) -> u32 {
        self.goals + self.penalty_goals
    }
}

/// The most recent goal, for the scoreboard animation. The ball is already back
/// on `posC` when this is set.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GoalEvent {
    /// Seat credited with the goal.
    pub scorer: usize,
    /// Seat whose dart put the ball in.
    pub thrower: usize,
    pub goal: Node,
    pub own_goal: bool,
    pub penalty: bool,
}

/// History records dart labels.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Football {
    pub players: Vec<Seat<FootballSeat, String>>,
    pub cursor: TurnCursor<String>,
    pub status: GameStatus,
    pub phase: MatchPhase,
    /// Board number painted on each node, indexed by [`Node::index`].
    pub node_numbers: [u8; 9],
    pub ball: Node,
    /// Target of a weight-2 edge that has taken one single hit this turn.
    pub pending: Option<Node>,
    pub last_goal: Option<GoalEvent>,
}

impl Football {
    /// Paint nine distinct random numbers from 1..=20 on the nodes.
    pub fn new<R: Rng + ?Sized>(players: &[Player], rng: &mut R) -> Result<Self, GameError> {
        let mut pool: Vec<u8> = (1..=20).collect();
        pool.shuffle(rng);
        let mut numbers = [0u8; 9];
        numbers.copy_from_slice(&pool[..9]);
        Self::with_numbers(players, numbers)
    }

    /// Paint known numbers. They must be distinct board numbers, otherwise a
    /// hit could not name a single node.
    pub fn with_numbers(players: &[Player], node_numbers: [u8; 9]) -> Result<Self, GameError> {
        GameKind::Football.check_player_count(players.len())?;
        let off_board = node_numbers.iter().any(|n| !(1..=20).contains(n));
        let repeated = node_numbers
            .iter()
            .enumerate()
            .any(|(i, n)| node_numbers[..i].contains(n));
        if off_board || repeated {
            return Err(GameError::InvalidBoardNumbers {
                numbers: node_numbers.to_vec(),
            });
        }
        Ok(Self {
            players: players.iter().map(Seat::new).collect(),
            cursor: TurnCursor::new(),
            status: GameStatus::Playing,
            phase: MatchPhase::Regulation,
            node_numbers,
            ball: Node::PosC,
            pending: None,
            last_goal: None,
        })
    }

    pub fn number_of(&self, node: Node) -> u8 {
        self.node_numbers[node.index()]
    }

    pub fn node_with_number(&self, number: u8) -> Option<Node> {
        Node::ALL.into_iter().find(|&n| self.number_of(n) == number)
    }

    fn kick(&mut self, throw: Throw, thrower: usize) {
        let edge = throw
            .number()
            .and_then(|n| self.node_with_number(n))
            .and_then(|target| edges_from(self.ball).find(|&(to, _)| to == target));

        let Some((to, weight)) = edge else {
            self.pending = None;
            return;
        };
        if weight == 1 || throw.multiplier > 1 || self.pending == Some(to) {
            self.move_ball(to, thrower);
        } else {
            self.pending = Some(to);
        }
    }

    fn move_ball(&mut self, to: Node, thrower: usize) {
        self.pending = None;
        if !to.is_goal() {
            self.ball = to;
            return;
        }
        let scorer = seat_attacking(to);
        self.players[scorer].state.goals += 1;
        self.ball = Node::PosC;
        self.last_goal = Some(GoalEvent {
            scorer,
            thrower,
            goal: to,
            own_goal: scorer != thrower,
            penalty: false,
        });
        log::info!(
            "Goal for {} ({})",
            self.players[scorer].name,
            if scorer != thrower { "own goal" } else { "open play" }
        );
    }

    fn penalty(&mut self, throw: Throw, shooter: usize) {
        let goal = attacking_goal(shooter);
        if throw.number() == Some(self.number_of(goal)) {
            self.players[shooter].state.penalty_goals += 1;
            self.last_goal = Some(GoalEvent {
                scorer: shooter,
                thrower: shooter,
                goal,
                own_goal: false,
                penalty: true,
            });
        }
    }

    fn goals_level(&self) -> bool {
        self.players[0].state.total() == self.players[1].state.total()
    }

    fn end_turn(&mut self) {
        self.cursor.close_turn(&mut self.players);
        self.pending = None;
        if !self.cursor.is_last_player(self.players.len()) {
            self.cursor.advance(self.players.len());
            return;
        }
        let phase = self.phase;
        let decided = match phase {
            MatchPhase::Regulation if self.cursor.round >= MAX_ROUNDS => {
                if self.goals_level() {
                    log::info!("Level after {} rounds, going to penalties", MAX_ROUNDS);
                    self.phase = MatchPhase::Shootout;
                    self.ball = Node::PosC;
                    false
                } else {
                    true
                }
            }
            MatchPhase::Regulation => false,
            MatchPhase::Shootout => !self.goals_level(),
        };
        if decided {
            self.status = GameStatus::Finished;
            log::info!("Football finished in round {}", self.cursor.round);
        } else {
            self.cursor.advance(self.players.len());
        }
    }
}

impl ScoreEngine for Football {
    fn handle_throw(&mut self, throw: Throw) -> Result<(), GameError> {
        if self.status == GameStatus::Finished {
            return Err(GameError::GameFinished);
        }
        self.last_goal = None;
        let idx = self.cursor.current_player;
        match self.phase {
            MatchPhase::Regulation => self.kick(throw, idx),
            MatchPhase::Shootout => self.penalty(throw, idx),
        }

        let full = self.cursor.record_dart(throw.label());
        if full || self.phase == MatchPhase::Shootout {
            self.end_turn();
        }
        Ok(())
    }

    /// Frees the last dart slot of the open turn. The ball stays where it is.
    fn undo(&mut self) -> Result<(), GameError> {
        if self.status == GameStatus::Finished {
            return Err(GameError::GameFinished);
        }
        self.cursor.pop_dart().map(|_| ()).ok_or(GameError::NoHistoryAvailable)
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn rankings(&self) -> Option<Vec<Ranking>> {
        if self.status != GameStatus::Finished {
            return None;
        }
        Some(tiered_rankings(
            self.players
                .iter()
                .map(|p| (p.player_id, p.name.as_str(), p.state.total())),
        ))
    }
}
