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
use std::{convert::TryFrom, fmt};

/// The coordinates of a cell in the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub column: usize,
    /// Vertical position of the cell.
    pub row: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `column` and `row`.
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(column, row)` pair.
    fn from((column, row): (usize, usize)) -> Self {
        Self::new(column, row)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(column, row)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.column, coord.row)
    }
}

/// A shot target chosen by a player. Unlike [`Coordinate`] it is not guaranteed to lie
/// on the board, or even to be non-negative; the board validates it when the move is
/// applied.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    pub column: isize,
    pub row: isize,
}

impl Move {
    /// Construct a [`Move`] targeting `column` and `row`.
    pub fn new(column: isize, row: isize) -> Self {
        Self { column, row }
    }

    /// Get the board coordinate of this move if both components are non-negative.
    /// Upper bounds are not checked.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let column = usize::try_from(self.column).ok()?;
        let row = usize::try_from(self.row).ok()?;
        Some(Coordinate { column, row })
    }
}

impl From<(isize, isize)> for Move {
    fn from((column, row): (isize, isize)) -> Self {
        Self::new(column, row)
    }
}

impl From<Coordinate> for Move {
    /// Target the given cell. Coordinates larger than `isize::max_value()` saturate, which
    /// is out of range for any board that fits in memory.
    fn from(coord: Coordinate) -> Self {
        let clamp = |v: usize| isize::try_from(v).unwrap_or(isize::max_value());
        Self::new(clamp(coord.column), clamp(coord.row))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}
