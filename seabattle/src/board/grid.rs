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

//! Defines the types that make up the grid. These are shared between the board's setup
//! and playing versions.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::{CellState, Coordinate, Dimensions};

/// A single cell in the player's grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(super) struct GridCell {
    /// Whether a ship segment occupies this cell.
    pub(super) ship: bool,

    /// Outcome of the shot fired at this cell, if any.
    pub(super) shot: CellState,
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            ship: false,
            shot: CellState::Unshot,
        }
    }
}

/// Grid structure shared between [`BoardSetup`][super::BoardSetup] and
/// [`Board`][super::Board].
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// Cells that make up this board, in row-major order.
    pub(super) cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| Default::default()).collect();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&GridCell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut GridCell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = GridCell;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
