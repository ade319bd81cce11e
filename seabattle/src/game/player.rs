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
use std::fmt;

use crate::{
    board::{Move, OwnerView, ShotView},
    game::Side,
};

/// Everything the active player is entitled to see when choosing a move.
#[derive(Debug, Copy, Clone)]
pub struct TurnView<'a> {
    /// Side of the player being asked.
    pub side: Side,
    /// Where the player's own ships are.
    pub own_ships: OwnerView<'a>,
    /// Shots the opponent has fired at the player.
    pub own_shots_received: ShotView<'a>,
    /// Shots the player has fired at the opponent.
    pub opponent_shots_received: ShotView<'a>,
}

/// Signal a player raises instead of choosing a move, to leave the match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Withdrawal {
    /// Leave the match and the program without saving.
    Quit,
    /// Save the match, then leave the program.
    QuitAndSave,
    /// Abandon the match and return to the main menu.
    BackToMenu,
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Withdrawal::Quit => "quit",
            Withdrawal::QuitAndSave => "quit and save",
            Withdrawal::BackToMenu => "back to main menu",
        })
    }
}

/// A participant in a match. Implemented by interactive and automated players.
pub trait Player {
    /// Name shown to the other participant.
    fn name(&self) -> &str {
        "Nameless"
    }

    /// Choose the next cell to fire at. `message` explains the outcome of the previous
    /// query when the turn did not pass, e.g. why a move was rejected.
    ///
    /// Blocks for as long as the player needs. Returning a [`Withdrawal`] ends the match
    /// without a winner.
    fn choose_move(
        &mut self,
        view: &TurnView<'_>,
        message: Option<&str>,
    ) -> Result<Move, Withdrawal>;
}

impl<P: Player + ?Sized> Player for &mut P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose_move(
        &mut self,
        view: &TurnView<'_>,
        message: Option<&str>,
    ) -> Result<Move, Withdrawal> {
        (**self).choose_move(view, message)
    }
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose_move(
        &mut self,
        view: &TurnView<'_>,
        message: Option<&str>,
    ) -> Result<Move, Withdrawal> {
        (**self).choose_move(view, message)
    }
}
