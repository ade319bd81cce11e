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

//! Battleship on rectangular boards of any size from 5x5 up.
//!
//! Each board receives a fleet scaled to its area (see [`ships::Fleet`]), placed at random.
//! Two [`game::Player`]s then take turns firing at each other's board through a
//! [`game::Match`], which keeps the turn with a player for as long as their shots keep
//! landing.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use seabattle::{
//!     board::Dimensions,
//!     game::{Match, MatchState, RandomPlayer},
//! };
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let state = MatchState::new(Dimensions::new(8, 8).unwrap(), &mut rng);
//! let mut game = Match::new(
//!     state,
//!     Box::new(RandomPlayer::new("left", StdRng::seed_from_u64(1))),
//!     Box::new(RandomPlayer::new("right", StdRng::seed_from_u64(2))),
//! );
//! let winner = game.run_match().unwrap();
//! assert!(game.state().board(winner.opponent()).fully_destroyed());
//! ```

pub mod board;
pub mod game;
pub mod ships;
