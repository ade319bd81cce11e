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

//! Errors used by the `Board` and `BoardSetup`.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Move, ships::Placement};

/// Error returned when board dimensions are not usable.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum DimensionsError {
    /// One of the sides is shorter than the minimum.
    #[error("the height and width of the board must be at least 5, got {height}x{width}")]
    TooSmall { height: usize, width: usize },
    /// The number of cells does not fit in memory.
    #[error("board of {height}x{width} cells is too large")]
    TooLarge { height: usize, width: usize },
}

/// Reason why a ship could not be placed with a given placement.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Part of the ship would lie outside of the board.
    #[error("the ship is out of bounds of the board")]
    OutOfBounds,
    /// One or more of the cells in the placement was already occupied.
    #[error("the requested position was already occupied")]
    AlreadyOccupied,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Error)]
#[error("could not place ship: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    placement: Placement,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason and placement.
    pub(super) fn new(reason: CannotPlaceReason, placement: Placement) -> Self {
        Self { reason, placement }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the placement that was attempted.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The target lies outside of the board.
    #[error("move coordinates are out of bounds")]
    OutOfRange,

    /// A shot has already been fired at that cell.
    #[error("this cell has already been shot")]
    AlreadyShot,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot {target}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The move that was rejected.
    target: Move,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified target.
    pub(super) fn new(reason: CannotShootReason, target: Move) -> Self {
        Self { reason, target }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the rejected move.
    pub fn target(&self) -> Move {
        self.target
    }
}

/// Error returned when a serialized board cannot be restored.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum SnapshotError {
    #[error(transparent)]
    Dimensions(#[from] DimensionsError),
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell symbol {symbol:?} at column {column}, row {row}")]
    UnknownSymbol {
        column: usize,
        row: usize,
        symbol: char,
    },
    /// No cell holds a ship, so the board would start out destroyed.
    #[error("board has no ships")]
    NoShips,
}
