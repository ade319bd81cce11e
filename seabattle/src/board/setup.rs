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

//! Implements the setup phase of the board.
use rand::Rng;
use tracing::trace;

use crate::{
    board::{Board, CannotPlaceReason, Coordinate, Dimensions, Grid, PlaceError},
    ships::{Line, Orientation, Placement},
};

/// Setup phase for a [`Board`]. Allows placing ships and does not allow shooting.
#[derive(Debug, Clone)]
pub struct BoardSetup {
    /// Grid for placement of ships.
    grid: Grid,

    /// Number of cells covered by the ships placed so far.
    ship_area: usize,
}

impl BoardSetup {
    /// Begin setup by constructing an empty board with the given [`Dimensions`].
    pub fn new(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            ship_area: 0,
        }
    }

    /// Get the [`Dimensions`] of this board.
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Number of cells covered by the ships placed so far.
    pub fn ship_area(&self) -> usize {
        self.ship_area
    }

    /// Returns true if a ship covers the given coordinate. Out of bounds coordinates are
    /// never occupied.
    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.grid.get(coord).map_or(false, |cell| cell.ship)
    }

    /// Check whether `placement` could be made without placing it.
    pub fn check_placement(&self, placement: &Placement) -> Result<(), CannotPlaceReason> {
        if !placement.fits(&self.grid.dim) {
            Err(CannotPlaceReason::OutOfBounds)
        } else if placement.cells().any(|coord| self.grid[coord].ship) {
            Err(CannotPlaceReason::AlreadyOccupied)
        } else {
            Ok(())
        }
    }

    /// Attempts to place the ship starting at `origin`. Ships may touch each other but
    /// may not overlap. On success, returns the cells that were filled.
    pub fn place(
        &mut self,
        ship: Line,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<Placement, PlaceError> {
        let placement = ship.place(origin, orientation);
        if let Err(reason) = self.check_placement(&placement) {
            return Err(PlaceError::new(reason, placement));
        }
        // Already ensured that every position is valid and not occupied.
        for coord in placement.cells() {
            self.grid[coord].ship = true;
        }
        self.ship_area += placement.len();
        Ok(placement)
    }

    /// Place the ship at a uniformly random origin and orientation, retrying until a
    /// placement succeeds. Never returns if the ship cannot fit anywhere.
    pub fn place_randomly<R: Rng + ?Sized>(&mut self, ship: Line, rng: &mut R) -> Placement {
        let width = self.grid.dim.width();
        let height = self.grid.dim.height();
        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let origin = Coordinate::new(rng.gen_range(0, width), rng.gen_range(0, height));
            let orientation = rng.gen();
            if let Ok(placement) = self.place(ship, origin, orientation) {
                trace!(len = ship.len(), attempts, ?placement, "Placed ship");
                return placement;
            }
        }
    }

    /// Finish setup and start the game on this board.
    pub fn start(self) -> Board {
        Board::from_grid(self.grid, self.ship_area)
    }
}
