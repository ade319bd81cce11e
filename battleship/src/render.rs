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

use seabattle::{board::CellState, game::TurnView};

/// Display helper for a cell of the player's own board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum OwnCell {
    Water,
    Ship,
    Hit,
    Miss,
}

impl OwnCell {
    fn new(ship: bool, shot: CellState) -> Self {
        match (ship, shot) {
            (_, CellState::Hit) => OwnCell::Hit,
            (_, CellState::Miss) => OwnCell::Miss,
            (true, CellState::Unshot) => OwnCell::Ship,
            (false, CellState::Unshot) => OwnCell::Water,
        }
    }
}

impl fmt::Display for OwnCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            OwnCell::Water => ".",
            OwnCell::Ship => "O",
            OwnCell::Hit => "X",
            OwnCell::Miss => "*",
        })
    }
}

/// Display helper for a cell of the enemy board, where only shots are known.
struct TargetCell(CellState);

impl fmt::Display for TargetCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self.0 {
            CellState::Unshot => ".",
            CellState::Hit => "X",
            CellState::Miss => "*",
        })
    }
}

/// Number of characters needed to print `n` in decimal.
fn digits(n: usize) -> usize {
    n.to_string().len()
}

/// Layout of one board: width of the row labels and of each cell.
#[derive(Copy, Clone)]
struct Layout {
    columns: usize,
    label_width: usize,
    cell_width: usize,
}

impl Layout {
    fn new(height: usize, columns: usize) -> Self {
        Self {
            columns,
            label_width: digits(height),
            cell_width: digits(columns),
        }
    }

    /// Total printed width of a board with this layout.
    fn width(&self) -> usize {
        self.label_width + 1 + self.columns * (self.cell_width + 1)
    }

    fn write_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:>w$} ", "", w = self.label_width)?;
        for column in 1..=self.columns {
            write!(f, " {:^w$}", column, w = self.cell_width)?;
        }
        Ok(())
    }

    fn write_row(
        &self,
        f: &mut fmt::Formatter,
        row: usize,
        cells: impl Iterator<Item = impl fmt::Display>,
    ) -> fmt::Result {
        write!(f, "{:>w$}|", row, w = self.label_width)?;
        for cell in cells {
            write!(f, " {:^w$}", cell, w = self.cell_width)?;
        }
        Ok(())
    }
}

/// Shows the player's own board ("You") next to what they know of the enemy board
/// ("Enemy"). Rows and columns are numbered from 1.
pub struct TurnDisplay<'a>(pub &'a TurnView<'a>);

impl fmt::Display for TurnDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let view = self.0;
        let own_dim = view.own_ships.dimensions();
        let enemy_dim = view.opponent_shots_received.dimensions();
        let own = Layout::new(own_dim.height(), own_dim.width());
        let enemy = Layout::new(enemy_dim.height(), enemy_dim.width());

        writeln!(
            f,
            "{:^ow$} | {:^ew$}",
            "You",
            "Enemy",
            ow = own.width(),
            ew = enemy.width()
        )?;
        own.write_header(f)?;
        write!(f, " | ")?;
        enemy.write_header(f)?;
        writeln!(f)?;

        let own_rows = view.own_ships.rows().zip(view.own_shots_received.rows());
        for (idx, ((ships, shots), targets)) in own_rows
            .zip(view.opponent_shots_received.rows())
            .enumerate()
        {
            let row = idx + 1;
            own.write_row(
                f,
                row,
                ships.zip(shots).map(|(ship, shot)| OwnCell::new(ship, shot)),
            )?;
            write!(f, " | ")?;
            enemy.write_row(f, row, targets.map(TargetCell))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use seabattle::{
        board::{Board, BoardSetup, Coordinate, Dimensions},
        game::{MatchState, Side},
        ships::{Line, Orientation},
    };

    use super::*;

    fn board_with(height: usize, width: usize, cells: &[(usize, usize)]) -> Board {
        let mut setup = BoardSetup::new(Dimensions::new(height, width).unwrap());
        for &(column, row) in cells {
            setup
                .place(
                    Line::new(1),
                    Coordinate::new(column, row),
                    Orientation::Vertical,
                )
                .unwrap();
        }
        setup.start()
    }

    #[test]
    fn shows_both_boards_side_by_side() {
        let mut mine = board_with(5, 5, &[(0, 0), (1, 0)]);
        let mut theirs = board_with(5, 5, &[(4, 4), (0, 4)]);
        mine.apply_move(0, 0).unwrap();
        mine.apply_move(2, 0).unwrap();
        theirs.apply_move(4, 4).unwrap();
        theirs.apply_move(3, 3).unwrap();
        let state = MatchState::from_boards(mine, theirs);
        let view = state.view(Side::P1);

        let text = TurnDisplay(&view).to_string();
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "    You      |    Enemy");
        assert_eq!(lines[1], "   1 2 3 4 5 |    1 2 3 4 5");
        assert_eq!(lines[2], "1| X O * . . | 1| . . . . .");
        assert_eq!(lines[3], "2| . . . . . | 2| . . . . .");
        assert_eq!(lines[5], "4| . . . . . | 4| . . . * .");
        assert_eq!(lines[6], "5| . . . . . | 5| . . . . X");
    }

    #[test]
    fn wide_boards_pad_cells() {
        let state = MatchState::from_boards(
            board_with(10, 12, &[(11, 9)]),
            board_with(10, 12, &[(0, 0)]),
        );
        let view = state.view(Side::P1);
        let text = TurnDisplay(&view).to_string();
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        assert_eq!(lines.len(), 12);
        assert!(lines[1].starts_with("    1  2  3"));
        assert!(lines[1].contains("10 11 12 |"));
        assert!(lines[2].starts_with(" 1| .  .  ."));
        assert!(lines[11].starts_with("10| .  .  .  .  .  .  .  .  .  .  .  O  |"));
    }
}
