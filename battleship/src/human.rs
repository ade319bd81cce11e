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
use std::io::BufRead;

use once_cell::sync::Lazy;
use regex::Regex;
use seabattle::{
    board::Move,
    game::{Player, TurnView, Withdrawal},
};
use tracing::warn;

use crate::{input::InputReader, render::TurnDisplay};

const HELP: &str = "Available Commands:
    <column> <row>      fire at the given cell, e.g. \"3 4\" or \"3,4\". Numbering starts at 1.
    s, save             save the game and quit.
    q, quit             quit without saving.
    m, menu             go back to the main menu without saving.
    ?, help             show this help.";

/// Something the human typed during their turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    Fire(Move),
    Withdraw(Withdrawal),
    Help,
}

/// Parse a trimmed, lowercased line of input. Coordinates are 1-based on input and
/// converted to the 0-based [`Move`] the board expects.
fn parse_command(line: &str) -> Option<Command> {
    /// Matcher for a pair of coordinates.
    static FIRE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?P<column>[0-9]+)(?:\s*,\s*|\s+)(?P<row>[0-9]+)$").unwrap()
    });

    match line {
        "?" | "help" | "h" => Some(Command::Help),
        "q" | "quit" | "exit" => Some(Command::Withdraw(Withdrawal::Quit)),
        "s" | "save" => Some(Command::Withdraw(Withdrawal::QuitAndSave)),
        "m" | "menu" => Some(Command::Withdraw(Withdrawal::BackToMenu)),
        other => {
            let captures = FIRE.captures(other)?;
            let column: isize = captures["column"].parse().ok()?;
            let row: isize = captures["row"].parse().ok()?;
            Some(Command::Fire(Move::new(column - 1, row - 1)))
        }
    }
}

/// Player controlled from the terminal.
pub struct HumanPlayer<'r, B> {
    input: &'r mut InputReader<B>,
}

impl<'r, B: BufRead> HumanPlayer<'r, B> {
    pub fn new(input: &'r mut InputReader<B>) -> Self {
        Self { input }
    }
}

impl<B: BufRead> Player for HumanPlayer<'_, B> {
    fn name(&self) -> &str {
        "You"
    }

    fn choose_move(
        &mut self,
        view: &TurnView<'_>,
        message: Option<&str>,
    ) -> Result<Move, Withdrawal> {
        println!();
        print!("{}", TurnDisplay(view));
        println!();
        if let Some(message) = message {
            println!("{}", message);
        }
        println!("Type s to save and quit, q to quit, m for the main menu, ? for help.");
        loop {
            let cmd = self
                .input
                .read_input_lower("Fire at (column row):", |line| {
                    let cmd = parse_command(line);
                    if cmd.is_none() {
                        println!("Invalid command \"{}\". Use '?' for help", line);
                    }
                    cmd
                });
            match cmd {
                Ok(Some(Command::Fire(target))) => return Ok(target),
                Ok(Some(Command::Withdraw(withdrawal))) => return Err(withdrawal),
                Ok(Some(Command::Help)) => println!("{}", HELP),
                Ok(None) => return Err(Withdrawal::Quit),
                Err(err) => {
                    warn!(%err, "Could not read from the terminal");
                    return Err(Withdrawal::Quit);
                }
            }
        }
    }
}
