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
use thiserror::Error;

use crate::game::{Side, Withdrawal};

/// Reasons a match stopped without producing a (new) winner.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum MatchError {
    /// The match was already over before it was run.
    #[error("this match is already over, {winner} is the winner")]
    AlreadyConcluded { winner: Side },

    /// The active player left the match instead of choosing a move. Both boards are
    /// exactly as they were before the player was asked.
    #[error("{side} withdrew from the match ({withdrawal})")]
    Withdrawn { side: Side, withdrawal: Withdrawal },
}

/// Reasons a restored [`MatchState`][crate::game::MatchState] is rejected.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum StateError {
    /// Both fleets are destroyed, which no match can reach.
    #[error("both fleets are destroyed")]
    BothDestroyed,

    /// The recorded winner does not agree with which fleet is destroyed.
    #[error("recorded winner {recorded:?} does not match the boards, expected {expected:?}")]
    WinnerMismatch {
        recorded: Option<Side>,
        expected: Option<Side>,
    },
}
