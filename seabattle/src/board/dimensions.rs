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
use std::borrow::Borrow;

use crate::board::{Coordinate, DimensionsError};

/// Smallest allowed height or width of a board.
pub const MIN_SIDE: usize = 5;

/// Dimensions of a rectangular board. Both sides are at least [`MIN_SIDE`] and the total
/// number of cells fits in a `usize`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dimensions {
    /// Number of rows. This cooresponds to the `row` of a [`Coordinate`].
    height: usize,
    /// Number of columns. This cooresponds to the `column` of a [`Coordinate`].
    width: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified height and width.
    /// Returns an error if either side is less than [`MIN_SIDE`] or if `height * width`
    /// exceeds `usize::max_value()`.
    pub fn new(height: usize, width: usize) -> Result<Self, DimensionsError> {
        if height < MIN_SIDE || width < MIN_SIDE {
            Err(DimensionsError::TooSmall { height, width })
        } else if height.checked_mul(width).is_none() {
            Err(DimensionsError::TooLarge { height, width })
        } else {
            Ok(Self { height, width })
        }
    }

    /// Get the height of these [`Dimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the width of these [`Dimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells.
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Check if the given [`Coordinate`] is in bounds for these [`Dimensions`]. If so,
    /// return it, otherwise return `None`.
    #[inline]
    pub fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        let c = coord.borrow();
        if c.column < self.width && c.row < self.height {
            Some(coord)
        } else {
            None
        }
    }

    /// Convert a coordinate to a row-major index.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.row * self.width + coord.column)
    }

    /// Convert a row-major index back into a [`Coordinate`].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate {
            column: idx % self.width,
            row: idx / self.width,
        }
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let width = self.width;
        (0..self.height).map(move |row| (0..width).map(move |column| Coordinate { column, row }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_small_sides() {
        assert_eq!(
            Dimensions::new(4, 5),
            Err(DimensionsError::TooSmall {
                height: 4,
                width: 5
            })
        );
        assert_eq!(
            Dimensions::new(5, 0),
            Err(DimensionsError::TooSmall {
                height: 5,
                width: 0
            })
        );
        assert!(Dimensions::new(5, 5).is_ok());
    }

    #[test]
    fn rejects_overflowing_area() {
        let huge = usize::max_value() / 2;
        assert_eq!(
            Dimensions::new(huge, 5),
            Err(DimensionsError::TooLarge {
                height: huge,
                width: 5
            })
        );
    }

    #[test]
    fn linearize_is_row_major() {
        let dim = Dimensions::new(5, 7).unwrap();
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 0)), Some(0));
        assert_eq!(dim.try_linearize(&Coordinate::new(6, 0)), Some(6));
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 1)), Some(7));
        assert_eq!(dim.try_linearize(&Coordinate::new(7, 0)), None);
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 5)), None);
        assert_eq!(dim.un_linearize(15), Coordinate::new(1, 2));
    }

    #[test]
    fn iter_coordinates_covers_grid() {
        let dim = Dimensions::new(6, 5).unwrap();
        let rows: Vec<Vec<Coordinate>> = dim
            .iter_coordinates()
            .map(|row| row.collect())
            .collect();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|row| row.len() == 5));
        assert_eq!(rows[2][4], Coordinate::new(4, 2));
    }
}
