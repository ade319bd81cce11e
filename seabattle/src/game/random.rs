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
use rand::{seq::SliceRandom, Rng};
use tracing::warn;

use crate::{
    board::{Coordinate, Move},
    game::{Player, TurnView, Withdrawal},
};

/// Automated player that fires at a uniformly random cell it has not shot yet.
#[derive(Debug)]
pub struct RandomPlayer<R> {
    name: String,
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new<S: Into<String>>(name: S, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(
        &mut self,
        view: &TurnView<'_>,
        _message: Option<&str>,
    ) -> Result<Move, Withdrawal> {
        let choices: Vec<Coordinate> = view.opponent_shots_received.unshot().collect();
        match choices.choose(&mut self.rng) {
            Some(&coord) => Ok(Move::from(coord)),
            None => {
                // Only reachable if the opponent has been shot everywhere and still not
                // lost, which a valid board never allows.
                warn!(player = %self.name, "No cells left to shoot, giving up");
                Err(Withdrawal::Quit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        board::{Board, CellState, Dimensions},
        game::Side,
    };

    #[test]
    fn only_targets_unshot_cells() {
        let mut rng = StdRng::seed_from_u64(11);
        let own = Board::generate(Dimensions::new(5, 5).unwrap(), &mut rng);
        let mut opponent = Board::generate(Dimensions::new(5, 5).unwrap(), &mut rng);
        for row in 0..5 {
            for column in 0..5 {
                if (column, row) != (3, 4) {
                    opponent.apply_move(column, row).unwrap();
                }
            }
        }
        let view = TurnView {
            side: Side::P1,
            own_ships: own.owner_view(),
            own_shots_received: own.opponent_view(),
            opponent_shots_received: opponent.opponent_view(),
        };
        let mut player = RandomPlayer::new("bot", StdRng::seed_from_u64(5));
        for _ in 0..10 {
            assert_eq!(player.choose_move(&view, None), Ok(Move::new(3, 4)));
        }
        assert_eq!(
            opponent.opponent_view().get(Coordinate::new(3, 4)),
            Some(CellState::Unshot)
        );
    }

    #[test]
    fn withdraws_when_nothing_is_left() {
        let mut rng = StdRng::seed_from_u64(2);
        let own = Board::generate(Dimensions::new(5, 5).unwrap(), &mut rng);
        let mut opponent = Board::generate(Dimensions::new(5, 5).unwrap(), &mut rng);
        for row in 0..5 {
            for column in 0..5 {
                opponent.apply_move(column, row).unwrap();
            }
        }
        let view = TurnView {
            side: Side::P2,
            own_ships: own.owner_view(),
            own_shots_received: own.opponent_view(),
            opponent_shots_received: opponent.opponent_view(),
        };
        let mut player = RandomPlayer::new("bot", rng);
        assert_eq!(player.choose_move(&view, None), Err(Withdrawal::Quit));
        assert_eq!(player.name(), "bot");
    }
}
