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
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::{Coordinate, Dimensions};

/// A linear ship shape, with a given length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line(usize);

impl Line {
    /// Construct a linear ship with the specified length. Panics if len is 0.
    pub fn new(len: usize) -> Self {
        assert!(len > 0);
        Line(len)
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.0
    }

    /// Project this ship onto the board starting from `origin`. Does not check bounds or
    /// occupancy.
    pub fn place(self, origin: Coordinate, orientation: Orientation) -> Placement {
        Placement {
            origin,
            len: self.0,
            orientation,
        }
    }
}

/// Axis a ship extends along from its origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    /// The ship covers increasing columns of a single row.
    Horizontal,
    /// The ship covers increasing rows of a single column.
    Vertical,
}

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }
}

/// Cells a [`Line`] would cover when started at a particular origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placement {
    origin: Coordinate,
    len: usize,
    orientation: Orientation,
}

impl Placement {
    /// Get the coordinate where this placement starts.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Get the axis this placement extends along.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns true if every cell of the placement lies within `dim`.
    pub fn fits(&self, dim: &Dimensions) -> bool {
        let (start, limit) = match self.orientation {
            Orientation::Horizontal => (self.origin.column, dim.width()),
            Orientation::Vertical => (self.origin.row, dim.height()),
        };
        let cross_ok = match self.orientation {
            Orientation::Horizontal => self.origin.row < dim.height(),
            Orientation::Vertical => self.origin.column < dim.width(),
        };
        cross_ok
            && start
                .checked_add(self.len - 1)
                .map_or(false, |end| end < limit)
    }

    /// Iterate the cells covered by this placement, starting at the origin. Only
    /// meaningful for placements that [`fit`][Placement::fits].
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let Placement {
            origin,
            len,
            orientation,
        } = *self;
        (0..len).map(move |shift| match orientation {
            Orientation::Horizontal => Coordinate::new(origin.column + shift, origin.row),
            Orientation::Vertical => Coordinate::new(origin.column, origin.row + shift),
        })
    }
}
