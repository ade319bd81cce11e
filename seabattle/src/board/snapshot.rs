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

//! Serializable form of a [`Board`].
//!
//! Each row of the board is stored as a string with one symbol per cell:
//!
//! | symbol | ship | shot   |
//! |--------|------|--------|
//! | `.`    | no   | unshot |
//! | `#`    | yes  | unshot |
//! | `*`    | no   | miss   |
//! | `X`    | yes  | hit    |
use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

use crate::board::{
    grid::{Grid, GridCell},
    Board, CellState, Dimensions, SnapshotError,
};

/// Plain representation of a board, as written to save files.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub height: usize,
    pub width: usize,
    pub rows: Vec<String>,
}

fn symbol(cell: &GridCell) -> char {
    match (cell.ship, cell.shot) {
        (false, CellState::Unshot) => '.',
        (true, CellState::Unshot) => '#',
        (_, CellState::Miss) => '*',
        (_, CellState::Hit) => 'X',
    }
}

fn parse_symbol(symbol: char) -> Option<GridCell> {
    let (ship, shot) = match symbol {
        '.' => (false, CellState::Unshot),
        '#' => (true, CellState::Unshot),
        '*' => (false, CellState::Miss),
        'X' => (true, CellState::Hit),
        _ => return None,
    };
    Some(GridCell { ship, shot })
}

impl From<Board> for BoardSnapshot {
    fn from(board: Board) -> Self {
        let dim = board.grid.dim;
        let rows = board
            .grid
            .cells
            .chunks(dim.width())
            .map(|row| row.iter().map(symbol).collect())
            .collect();
        Self {
            height: dim.height(),
            width: dim.width(),
            rows,
        }
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = SnapshotError;

    /// Rebuild a board, recounting the ship area and hits from the cells.
    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        let dim = Dimensions::new(snapshot.height, snapshot.width)?;
        if snapshot.rows.len() != dim.height() {
            return Err(SnapshotError::RowCount {
                expected: dim.height(),
                found: snapshot.rows.len(),
            });
        }
        let mut grid = Grid::new(dim);
        for (row, (line, cells)) in snapshot
            .rows
            .iter()
            .zip(grid.cells.chunks_mut(dim.width()))
            .enumerate()
        {
            let found = line.chars().count();
            if found != dim.width() {
                return Err(SnapshotError::RowLength {
                    row,
                    expected: dim.width(),
                    found,
                });
            }
            for (column, (symbol, cell)) in line.chars().zip(cells.iter_mut()).enumerate() {
                *cell = parse_symbol(symbol).ok_or(SnapshotError::UnknownSymbol {
                    column,
                    row,
                    symbol,
                })?;
            }
        }
        let ship_area = grid.cells.iter().filter(|cell| cell.ship).count();
        if ship_area == 0 {
            return Err(SnapshotError::NoShips);
        }
        Ok(Board::from_grid(grid, ship_area))
    }
}
