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

//! Types that make up the game board.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ships::Fleet;

use self::grid::Grid;
pub use self::{
    coordinate::{Coordinate, Move},
    dimensions::{Dimensions, MIN_SIDE},
    errors::{
        CannotPlaceReason, CannotShootReason, DimensionsError, PlaceError, ShotError,
        SnapshotError,
    },
    setup::BoardSetup,
    snapshot::BoardSnapshot,
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;
pub mod setup;
mod snapshot;

/// What is publicly known about a single cell: whether it was shot, and if so whether
/// the shot landed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// No shot has been fired at this cell yet.
    Unshot,
    /// A shot landed on a ship segment.
    Hit,
    /// A shot landed in open water.
    Miss,
}

/// Read-only view of the shots fired at a board. Reveals nothing about ships that have
/// not been hit.
#[derive(Debug, Copy, Clone)]
pub struct ShotView<'a> {
    grid: &'a Grid,
}

impl<'a> ShotView<'a> {
    /// Get the [`Dimensions`] of the viewed board.
    pub fn dimensions(&self) -> &'a Dimensions {
        &self.grid.dim
    }

    /// Get the state of the cell at the given coordinate. Returns `None` if the coordinate
    /// is out of bounds.
    pub fn get(&self, coord: Coordinate) -> Option<CellState> {
        self.grid.get(coord).map(|cell| cell.shot)
    }

    /// Get an iterator over the rows of the board. The iterator's item is another iterator
    /// that iterates over a single row.
    pub fn rows(&self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellState>> {
        let grid = self.grid;
        grid.dim
            .iter_coordinates()
            .map(move |row| row.map(move |coord| grid[coord].shot))
    }

    /// Get an iterator over the coordinates that have not been shot yet.
    pub fn unshot(&self) -> impl 'a + Iterator<Item = Coordinate> {
        let grid = self.grid;
        grid.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.shot == CellState::Unshot)
            .map(move |(idx, _)| grid.dim.un_linearize(idx))
    }
}

/// Read-only view of where the ships on a board are. Only the owner of the board should
/// be given this view.
#[derive(Debug, Copy, Clone)]
pub struct OwnerView<'a> {
    grid: &'a Grid,
}

impl<'a> OwnerView<'a> {
    /// Get the [`Dimensions`] of the viewed board.
    pub fn dimensions(&self) -> &'a Dimensions {
        &self.grid.dim
    }

    /// Returns whether a ship occupies the given coordinate, or `None` if the coordinate
    /// is out of bounds.
    pub fn get(&self, coord: Coordinate) -> Option<bool> {
        self.grid.get(coord).map(|cell| cell.ship)
    }

    /// Get an iterator over the rows of the board. The iterator's item is another iterator
    /// that iterates over a single row.
    pub fn rows(&self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = bool>> {
        let grid = self.grid;
        grid.dim
            .iter_coordinates()
            .map(move |row| row.map(move |coord| grid[coord].ship))
    }
}

/// Represents a single player's board, including their ships and the shots fired at them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot", into = "BoardSnapshot")]
pub struct Board {
    /// Grid of cells occupied by ships.
    grid: Grid,

    /// Number of cells covered by ships.
    ship_area: usize,

    /// Number of shots that landed on a ship. Never exceeds `ship_area`.
    hits: usize,
}

impl Board {
    /// Construct a board of the given size with a randomly placed fleet, using the thread
    /// local rng.
    pub fn new(height: usize, width: usize) -> Result<Self, DimensionsError> {
        let dim = Dimensions::new(height, width)?;
        Ok(Self::generate(dim, &mut rand::thread_rng()))
    }

    /// Construct a board with the fleet for `dim` placed at random positions drawn from
    /// `rng`.
    pub fn generate<R: Rng + ?Sized>(dim: Dimensions, rng: &mut R) -> Self {
        let fleet = Fleet::for_dimensions(&dim);
        let mut setup = BoardSetup::new(dim);
        for ship in fleet.ships() {
            setup.place_randomly(ship, rng);
        }
        debug!(
            height = dim.height(),
            width = dim.width(),
            max_size = fleet.max_size(),
            ship_area = setup.ship_area(),
            "Generated board"
        );
        setup.start()
    }

    fn from_grid(grid: Grid, ship_area: usize) -> Self {
        let hits = grid
            .cells
            .iter()
            .filter(|cell| cell.ship && cell.shot == CellState::Hit)
            .count();
        Self {
            grid,
            ship_area,
            hits,
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Number of rows on this board.
    pub fn height(&self) -> usize {
        self.grid.dim.height()
    }

    /// Number of columns on this board.
    pub fn width(&self) -> usize {
        self.grid.dim.width()
    }

    /// Number of cells covered by ships.
    pub fn ship_area(&self) -> usize {
        self.ship_area
    }

    /// Number of shots that landed on a ship.
    pub fn hits_landed(&self) -> usize {
        self.hits
    }

    /// Returns true once every ship segment on this board has been hit.
    pub fn fully_destroyed(&self) -> bool {
        self.hits == self.ship_area
    }

    /// View of the shots fired at this board, safe to show to the opponent.
    pub fn opponent_view(&self) -> ShotView<'_> {
        ShotView { grid: &self.grid }
    }

    /// View of the ship positions on this board.
    pub fn owner_view(&self) -> OwnerView<'_> {
        OwnerView { grid: &self.grid }
    }

    /// Fire a shot at the cell at `column` and `row`. Returns whether the shot landed on a
    /// ship, or an error if the cell is off the board or was already shot. A rejected
    /// shot leaves the board unchanged.
    pub fn apply_move(&mut self, column: isize, row: isize) -> Result<bool, ShotError> {
        let target = Move::new(column, row);
        let cell = match target.coordinate().and_then(|coord| self.grid.get_mut(coord)) {
            None => return Err(ShotError::new(CannotShootReason::OutOfRange, target)),
            Some(cell) if cell.shot != CellState::Unshot => {
                return Err(ShotError::new(CannotShootReason::AlreadyShot, target))
            }
            Some(cell) => cell,
        };
        let hit = cell.ship;
        cell.shot = if hit { CellState::Hit } else { CellState::Miss };
        if hit {
            self.hits += 1;
        }
        Ok(hit)
    }
}
