// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Two-player match controller.
//!
//! A [`MatchState`] holds both boards and whose turn it is. It is plain data, so it can
//! be saved and restored. A [`Match`] pairs a state with two [`Player`]s and drives turns
//! until one fleet is destroyed or a player withdraws.

use std::{convert::TryFrom, fmt};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::board::{Board, Dimensions, ShotError};

pub use self::{
    errors::{MatchError, StateError},
    player::{Player, TurnView, Withdrawal},
    random::RandomPlayer,
};

mod errors;
mod player;
mod random;

/// Message passed to a player who keeps the turn after landing a hit.
pub const HIT_MESSAGE: &str = "You hit the target!";

/// One of the two seats in a match. `P1` always moves first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Side {
    P1,
    P2,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::P1 => Side::P2,
            Side::P2 => Side::P1,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::P1 => 0,
            Side::P2 => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Side::P1 => "player 1",
            Side::P2 => "player 2",
        })
    }
}

/// Result of asking the active player for a single move.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TurnOutcome {
    /// The move was invalid. The same player is asked again.
    Rejected(ShotError),
    /// The move landed on a ship. The same player moves again.
    Hit,
    /// The move landed in open water. The turn passes to the opponent.
    Miss,
    /// The move destroyed the last ship of the opponent.
    Won(Side),
}

/// Serializable state of a match: both boards, the active side and the winner, if any.
///
/// Deserializing checks that the winner agrees with the boards: a match has a winner
/// exactly when one fleet is destroyed, and the winner is the owner of the other fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "UncheckedState")]
pub struct MatchState {
    boards: [Board; 2],
    current: Side,
    winner: Option<Side>,
}

/// Raw form of [`MatchState`] as read from a save, before validation.
#[derive(Deserialize)]
struct UncheckedState {
    boards: [Board; 2],
    current: Side,
    winner: Option<Side>,
}

impl TryFrom<UncheckedState> for MatchState {
    type Error = StateError;

    fn try_from(raw: UncheckedState) -> Result<Self, Self::Error> {
        let [p1, p2] = &raw.boards;
        let expected = match (p1.fully_destroyed(), p2.fully_destroyed()) {
            (true, true) => return Err(StateError::BothDestroyed),
            (true, false) => Some(Side::P2),
            (false, true) => Some(Side::P1),
            (false, false) => None,
        };
        if raw.winner != expected {
            return Err(StateError::WinnerMismatch {
                recorded: raw.winner,
                expected,
            });
        }
        Ok(Self {
            boards: raw.boards,
            current: raw.current,
            winner: raw.winner,
        })
    }
}

impl MatchState {
    /// Start a new match with a freshly generated board of the given size for each side.
    pub fn new<R: Rng + ?Sized>(dim: Dimensions, rng: &mut R) -> Self {
        let p1 = Board::generate(dim, rng);
        let p2 = Board::generate(dim, rng);
        Self::from_boards(p1, p2)
    }

    /// Start a new match from existing boards. `P1` moves first.
    pub fn from_boards(p1: Board, p2: Board) -> Self {
        Self {
            boards: [p1, p2],
            current: Side::P1,
            winner: None,
        }
    }

    /// Get the board belonging to `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Side whose turn it is.
    pub fn current(&self) -> Side {
        self.current
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Build what `side` is allowed to see of the match.
    pub fn view(&self, side: Side) -> TurnView<'_> {
        let own = self.board(side);
        TurnView {
            side,
            own_ships: own.owner_view(),
            own_shots_received: own.opponent_view(),
            opponent_shots_received: self.board(side.opponent()).opponent_view(),
        }
    }
}

/// A match in progress between two players.
pub struct Match<'p> {
    state: MatchState,
    players: [Box<dyn Player + 'p>; 2],
}

impl<'p> Match<'p> {
    /// Seat `p1` and `p2` at the given state. The state may be a fresh one or one restored
    /// from a save.
    pub fn new(state: MatchState, p1: Box<dyn Player + 'p>, p2: Box<dyn Player + 'p>) -> Self {
        Self {
            state,
            players: [p1, p2],
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Give up the players and keep only the state, e.g. to save it.
    pub fn into_state(self) -> MatchState {
        self.state
    }

    pub fn current(&self) -> Side {
        self.state.current
    }

    pub fn winner(&self) -> Option<Side> {
        self.state.winner
    }

    /// Get the player seated at `side`.
    pub fn player(&self, side: Side) -> &dyn Player {
        &*self.players[side.index()]
    }

    /// Ask the active player for one move and apply it to the opponent's board.
    ///
    /// `message` is handed to the player unchanged. A withdrawal leaves the state exactly
    /// as it was.
    pub fn step(&mut self, message: Option<&str>) -> Result<TurnOutcome, MatchError> {
        if let Some(winner) = self.state.winner {
            return Err(MatchError::AlreadyConcluded { winner });
        }
        let side = self.state.current;
        let view = self.state.view(side);
        let player = &mut self.players[side.index()];
        trace!(%side, player = player.name(), ?message, "Querying player");
        let target = player
            .choose_move(&view, message)
            .map_err(|withdrawal| MatchError::Withdrawn { side, withdrawal })?;

        let opponent = side.opponent();
        let board = &mut self.state.boards[opponent.index()];
        match board.apply_move(target.column, target.row) {
            Err(err) => {
                debug!(%side, %target, reason = %err.reason(), "Move rejected");
                Ok(TurnOutcome::Rejected(err))
            }
            Ok(true) if board.fully_destroyed() => {
                info!(winner = %side, "Match concluded");
                self.state.winner = Some(side);
                Ok(TurnOutcome::Won(side))
            }
            Ok(true) => {
                debug!(%side, %target, "Hit");
                Ok(TurnOutcome::Hit)
            }
            Ok(false) => {
                debug!(%side, %target, "Miss");
                self.state.current = opponent;
                Ok(TurnOutcome::Miss)
            }
        }
    }

    /// Play turns until one side wins, and return the winner.
    pub fn run_match(&mut self) -> Result<Side, MatchError> {
        if let Some(winner) = self.state.winner {
            return Err(MatchError::AlreadyConcluded { winner });
        }
        let mut message: Option<String> = None;
        loop {
            message = match self.step(message.as_deref())? {
                TurnOutcome::Rejected(err) => Some(format!("Move rejected: {}.", err.reason())),
                TurnOutcome::Hit => Some(HIT_MESSAGE.to_string()),
                TurnOutcome::Miss => None,
                TurnOutcome::Won(winner) => return Ok(winner),
            };
        }
    }
}

impl fmt::Debug for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Match")
            .field("state", &self.state)
            .field("p1", &self.players[0].name())
            .field("p2", &self.players[1].name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use quickcheck::quickcheck;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        board::{BoardSetup, CellState, Coordinate, Move},
        ships::{Line, Orientation},
    };

    /// What a scripted player saw when it was queried.
    #[derive(Debug, Clone, Eq, PartialEq)]
    struct Query {
        side: Side,
        message: Option<String>,
        shots_fired: usize,
    }

    /// Plays a fixed list of moves and records every query. Panics if asked for more
    /// moves than it was given.
    struct Scripted {
        moves: VecDeque<Result<Move, Withdrawal>>,
        queries: Vec<Query>,
    }

    impl Scripted {
        fn new(moves: &[(isize, isize)]) -> Self {
            Self {
                moves: moves
                    .iter()
                    .map(|&(column, row)| Ok(Move::new(column, row)))
                    .collect(),
                queries: Vec::new(),
            }
        }

        fn then_withdraw(mut self, withdrawal: Withdrawal) -> Self {
            self.moves.push_back(Err(withdrawal));
            self
        }

        fn messages(&self) -> Vec<Option<&str>> {
            self.queries.iter().map(|q| q.message.as_deref()).collect()
        }
    }

    impl Player for Scripted {
        fn choose_move(
            &mut self,
            view: &TurnView<'_>,
            message: Option<&str>,
        ) -> Result<Move, Withdrawal> {
            let dim = view.opponent_shots_received.dimensions().total_size();
            self.queries.push(Query {
                side: view.side,
                message: message.map(str::to_owned),
                shots_fired: dim - view.opponent_shots_received.unshot().count(),
            });
            self.moves.pop_front().expect("script ran out of moves")
        }
    }

    /// 5x5 board with a size 1 ship on each of `cells`.
    fn board_with(cells: &[(usize, usize)]) -> Board {
        let mut setup = BoardSetup::new(Dimensions::new(5, 5).unwrap());
        for &(column, row) in cells {
            setup
                .place(
                    Line::new(1),
                    Coordinate::new(column, row),
                    Orientation::Horizontal,
                )
                .unwrap();
        }
        setup.start()
    }

    fn shots_at(board: &Board) -> usize {
        board
            .opponent_view()
            .rows()
            .flatten()
            .filter(|&cell| cell != CellState::Unshot)
            .count()
    }

    #[test]
    fn first_shot_can_win_without_querying_opponent() {
        let mut p1 = Scripted::new(&[(0, 0)]);
        let mut p2 = Scripted::new(&[]);
        let state = MatchState::from_boards(board_with(&[(4, 4)]), board_with(&[(0, 0)]));
        let mut game = Match::new(state, Box::new(&mut p1), Box::new(&mut p2));
        assert_eq!(game.run_match(), Ok(Side::P1));
        assert_eq!(game.winner(), Some(Side::P1));
        assert!(game.state().board(Side::P2).fully_destroyed());
        drop(game);

        assert_eq!(p1.messages(), vec![None]);
        assert!(p2.queries.is_empty());
    }

    #[test]
    fn miss_passes_the_turn() {
        let mut p1 = Scripted::new(&[(1, 1)]);
        let mut p2 = Scripted::new(&[(0, 0)]);
        let state = MatchState::from_boards(board_with(&[(0, 0)]), board_with(&[(4, 4)]));
        let mut game = Match::new(state, Box::new(&mut p1), Box::new(&mut p2));

        assert_eq!(game.step(None), Ok(TurnOutcome::Miss));
        assert_eq!(game.current(), Side::P2);
        assert_eq!(game.step(None), Ok(TurnOutcome::Won(Side::P2)));
        assert_eq!(game.current(), Side::P2);
        drop(game);

        assert_eq!(
            p2.queries,
            vec![Query {
                side: Side::P2,
                message: None,
                shots_fired: 0,
            }]
        );
        assert_eq!(p1.queries[0].side, Side::P1);
    }

    #[test]
    fn hits_keep_the_turn() {
        let mut p1 = Scripted::new(&[(0, 0), (1, 0), (2, 0)]);
        let mut p2 = Scripted::new(&[]);
        let state = MatchState::from_boards(
            board_with(&[(4, 4)]),
            board_with(&[(0, 0), (1, 0), (2, 0)]),
        );
        let mut game = Match::new(state, Box::new(&mut p1), Box::new(&mut p2));
        assert_eq!(game.run_match(), Ok(Side::P1));
        drop(game);

        assert_eq!(
            p1.messages(),
            vec![None, Some(HIT_MESSAGE), Some(HIT_MESSAGE)]
        );
        assert_eq!(
            p1.queries.iter().map(|q| q.shots_fired).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert!(p2.queries.is_empty());
    }

    #[test]
    fn rejected_moves_are_retried_with_a_reason() {
        let mut p1 = Scripted::new(&[(5, 0), (-1, 2), (1, 1), (1, 1), (4, 4)]);
        let mut p2 = Scripted::new(&[(3, 3)]);
        let state = MatchState::from_boards(board_with(&[(0, 0)]), board_with(&[(4, 4)]));
        let mut game = Match::new(state, Box::new(&mut p1), Box::new(&mut p2));
        assert_eq!(game.run_match(), Ok(Side::P1));
        drop(game);

        let messages = p1.messages();
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0], None);
        assert!(messages[1].unwrap().contains("out of bounds"));
        assert!(messages[2].unwrap().contains("out of bounds"));
        assert_eq!(messages[3], None);
        assert!(messages[4].unwrap().contains("already been shot"));
        assert_eq!(p2.messages(), vec![None]);
    }

    #[test]
    fn rejected_step_leaves_board_alone() {
        let mut p1 = Scripted::new(&[(0, 7)]);
        let mut p2 = Scripted::new(&[]);
        let state = MatchState::from_boards(board_with(&[(0, 0)]), board_with(&[(4, 4)]));
        let mut game = Match::new(state, Box::new(&mut p1), Box::new(&mut p2));
        match game.step(None) {
            Ok(TurnOutcome::Rejected(err)) => assert_eq!(err.target(), Move::new(0, 7)),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(game.current(), Side::P1);
        assert_eq!(shots_at(game.state().board(Side::P2)), 0);
    }

    #[test]
    fn withdrawal_keeps_state_and_match_can_resume() {
        let mut p1 = Scripted::new(&[(1, 1)]);
        let mut p2 = Scripted::new(&[]).then_withdraw(Withdrawal::QuitAndSave);
        let state = MatchState::from_boards(board_with(&[(0, 0)]), board_with(&[(4, 4)]));
        let mut game = Match::new(state, Box::new(&mut p1), Box::new(&mut p2));
        assert_eq!(
            game.run_match(),
            Err(MatchError::Withdrawn {
                side: Side::P2,
                withdrawal: Withdrawal::QuitAndSave,
            })
        );
        let state = game.into_state();
        assert_eq!(state.current(), Side::P2);
        assert_eq!(state.winner(), None);
        assert_eq!(shots_at(state.board(Side::P1)), 0);
        assert_eq!(shots_at(state.board(Side::P2)), 1);

        let mut p1 = Scripted::new(&[]);
        let mut p2 = Scripted::new(&[(0, 0)]);
        let mut game = Match::new(state, Box::new(&mut p1), Box::new(&mut p2));
        assert_eq!(game.run_match(), Ok(Side::P2));
    }

    #[test]
    fn concluded_match_cannot_run_again() {
        let mut p1 = Scripted::new(&[(0, 0)]);
        let mut p2 = Scripted::new(&[]);
        let state = MatchState::from_boards(board_with(&[(4, 4)]), board_with(&[(0, 0)]));
        let mut game = Match::new(state, Box::new(&mut p1), Box::new(&mut p2));
        assert_eq!(game.run_match(), Ok(Side::P1));
        assert_eq!(
            game.run_match(),
            Err(MatchError::AlreadyConcluded { winner: Side::P1 })
        );
        assert_eq!(
            game.step(None),
            Err(MatchError::AlreadyConcluded { winner: Side::P1 })
        );
    }

    #[test]
    fn state_survives_json() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = Match::new(
            MatchState::new(Dimensions::new(6, 5).unwrap(), &mut rng),
            Box::new(RandomPlayer::new("a", StdRng::seed_from_u64(1))),
            Box::new(RandomPlayer::new("b", StdRng::seed_from_u64(2))),
        );
        for _ in 0..7 {
            if game.winner().is_some() {
                break;
            }
            game.step(None).unwrap();
        }
        let state = game.into_state();
        let json = serde_json::to_string(&state).unwrap();
        let restored: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.current(), state.current());
        assert_eq!(restored.winner(), state.winner());
        for &side in &[Side::P1, Side::P2] {
            assert_eq!(
                shots_at(restored.board(side)),
                shots_at(state.board(side))
            );
            assert_eq!(
                restored.board(side).hits_landed(),
                state.board(side).hits_landed()
            );
        }
    }

    #[test]
    fn restored_winner_must_agree_with_boards() {
        let mut sunk = board_with(&[(0, 0)]);
        sunk.apply_move(0, 0).unwrap();
        let afloat = board_with(&[(1, 1)]);
        let saved = |p1: &Board, p2: &Board, winner: Option<Side>| {
            let mut value =
                serde_json::to_value(MatchState::from_boards(p1.clone(), p2.clone())).unwrap();
            value["winner"] = serde_json::to_value(winner).unwrap();
            value
        };
        let rejection = |value| {
            serde_json::from_value::<MatchState>(value)
                .unwrap_err()
                .to_string()
        };

        assert!(rejection(saved(&afloat, &afloat, Some(Side::P1))).contains(
            &StateError::WinnerMismatch {
                recorded: Some(Side::P1),
                expected: None,
            }
            .to_string()
        ));
        assert!(rejection(saved(&sunk, &afloat, None)).contains(
            &StateError::WinnerMismatch {
                recorded: None,
                expected: Some(Side::P2),
            }
            .to_string()
        ));
        assert!(rejection(saved(&sunk, &afloat, Some(Side::P1))).contains(
            &StateError::WinnerMismatch {
                recorded: Some(Side::P1),
                expected: Some(Side::P2),
            }
            .to_string()
        ));
        assert!(rejection(saved(&sunk, &sunk, Some(Side::P1)))
            .contains(&StateError::BothDestroyed.to_string()));

        let mut empty = saved(&afloat, &afloat, None);
        empty["boards"][1]["rows"] = serde_json::json!([".....", ".....", ".....", ".....", "....."]);
        assert!(rejection(empty).contains("board has no ships"));

        let restored: MatchState =
            serde_json::from_value(saved(&sunk, &afloat, Some(Side::P2))).unwrap();
        assert_eq!(restored.winner(), Some(Side::P2));
        assert!(restored.board(Side::P1).fully_destroyed());
    }

    #[test]
    fn side_rotation() {
        assert_eq!(Side::P1.opponent(), Side::P2);
        assert_eq!(Side::P2.opponent(), Side::P1);
        assert_eq!(Side::P2.to_string(), "player 2");
    }

    quickcheck! {
        fn random_players_always_finish(seed: u64, height: u8, width: u8) -> bool {
            let dim = Dimensions::new(5 + height as usize % 6, 5 + width as usize % 6).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let state = MatchState::new(dim, &mut rng);
            let mut game = Match::new(
                state,
                Box::new(RandomPlayer::new("p1", StdRng::seed_from_u64(seed ^ 1))),
                Box::new(RandomPlayer::new("p2", StdRng::seed_from_u64(seed ^ 2))),
            );
            match game.run_match() {
                Ok(winner) => {
                    let state = game.state();
                    state.winner() == Some(winner)
                        && state.board(winner.opponent()).fully_destroyed()
                        && !state.board(winner).fully_destroyed()
                }
                Err(_) => false,
            }
        }
    }
}
