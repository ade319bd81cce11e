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

//! Types used for defining ships and the fleet each board receives.
use crate::board::Dimensions;

pub use self::linear::{Line, Orientation, Placement};

mod linear;

/// Fraction of the board that ships may cover, as a divisor of the board area.
const AREA_DIVISOR: usize = 5;

/// The ships placed on a board, derived from the area available to them.
///
/// The largest ship size is found with the recurrence
/// `area <- 2 * area + max_size; max_size <- max_size + 1`, run while the next area still
/// fits, and followed by a final `max_size - 1`. The fleet then holds one ship of
/// `max_size`, two ships of `max_size - 1`, and so on down to `max_size` ships of size 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Fleet {
    /// Length of the largest ship.
    max_size: usize,
    /// Final area reached by the sizing recurrence.
    budget: usize,
}

impl Fleet {
    /// Compute the fleet for a board with the given [`Dimensions`].
    pub fn for_dimensions(dim: &Dimensions) -> Self {
        Self::for_area(dim.total_size() / AREA_DIVISOR)
    }

    /// Compute the fleet that fits into `available_area` cells.
    pub fn for_area(available_area: usize) -> Self {
        let mut max_size = 0;
        let mut area = 0;
        while area + area + max_size <= available_area {
            area += area + max_size;
            max_size += 1;
        }
        // The loop always runs at least once, so max_size is at least 1 here.
        max_size -= 1;
        Self {
            max_size,
            budget: area,
        }
    }

    /// Length of the largest ship in the fleet.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Area reached by the sizing recurrence. Never exceeds the available area and is
    /// never less than [`total_area`][Fleet::total_area].
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Number of ships of the given size.
    pub fn count_of(&self, size: usize) -> usize {
        if size == 0 || size > self.max_size {
            0
        } else {
            self.max_size + 1 - size
        }
    }

    /// Get an iterator over the ships in placement order, largest first.
    pub fn ships(&self) -> impl Iterator<Item = Line> {
        let max_size = self.max_size;
        (1..=max_size)
            .rev()
            .flat_map(move |size| (size..=max_size).map(move |_| Line::new(size)))
    }

    /// Number of cells covered by the whole fleet.
    pub fn total_area(&self) -> usize {
        (1..=self.max_size)
            .map(|size| size * self.count_of(size))
            .sum()
    }
}
