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
use std::{
    io::{self, BufRead},
    path::PathBuf,
};

use anyhow::Context;
use clap::{value_t, App, Arg, ArgMatches};
use rand::{rngs::StdRng, Rng, SeedableRng};
use seabattle::{
    board::Dimensions,
    game::{Match, MatchError, MatchState, Player, RandomPlayer, Side, Withdrawal},
};
use tracing::{info, warn};
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::{human::HumanPlayer, input::InputReader, render::TurnDisplay, save::SaveFile};

mod human;
mod input;
mod render;
mod save;

fn main() -> anyhow::Result<()> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line battleship against the computer, on boards of any size.")
        .arg(
            Arg::with_name("rows")
                .short("n")
                .long("rows")
                .value_name("N")
                .help("number of rows per board, 5 or higher")
                .takes_value(true)
                .default_value("5"),
        )
        .arg(
            Arg::with_name("columns")
                .short("m")
                .long("columns")
                .value_name("M")
                .help("number of columns per board, 5 or higher")
                .takes_value(true)
                .default_value("5"),
        )
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first_player")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for board generation and the computer player")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("save_file")
                .short("s")
                .long("save-file")
                .value_name("PATH")
                .help("where to save and load games")
                .takes_value(true)
                .default_value("battleship-save.json"),
        )
        .arg(
            Arg::with_name("log_level")
                .short("l")
                .long("log-level")
                .value_name("LEVEL")
                .help("log level, written to stderr")
                .takes_value(true)
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                .case_insensitive(true)
                .default_value("warn"),
        )
        .get_matches();

    let log_level = value_t!(matches, "log_level", LevelFilter).unwrap_or_else(|e| e.exit());
    initialize_logging(log_level);

    let config = Config::from_matches(&matches)?;
    info!(
        height = config.dim.height(),
        width = config.dim.width(),
        seed = config.seed,
        "Starting"
    );
    let mut rng = StdRng::seed_from_u64(config.seed);

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    run_menu(&config, &mut input, &mut rng)
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .event_format(format),
        )
        .with(filter)
        .init();
}

/// Which side the human takes, as given on the command line.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum FirstPlayer {
    Human,
    Computer,
    Random,
}

/// Settings gathered from the command line.
#[derive(Debug)]
struct Config {
    dim: Dimensions,
    first_player: Option<FirstPlayer>,
    seed: u64,
    save_file: PathBuf,
}

impl Config {
    fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let rows = value_t!(matches, "rows", usize).unwrap_or_else(|e| e.exit());
        let columns = value_t!(matches, "columns", usize).unwrap_or_else(|e| e.exit());
        let dim = Dimensions::new(rows, columns).context("Invalid board size")?;

        let first_player = matches
            .value_of("first_player")
            .map(|choice| match choice.to_ascii_lowercase().as_str() {
                "human" | "me" => FirstPlayer::Human,
                "computer" | "bot" => FirstPlayer::Computer,
                _ => FirstPlayer::Random,
            });

        let seed = if matches.is_present("seed") {
            value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit())
        } else {
            rand::random()
        };

        let save_file = PathBuf::from(matches.value_of("save_file").unwrap_or("battleship-save.json"));

        Ok(Self {
            dim,
            first_player,
            seed,
            save_file,
        })
    }
}

/// Entries of the main menu.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum MenuChoice {
    NewGame,
    LoadGame,
    Quit,
}

/// What to do once a match stops.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Flow {
    Menu,
    Exit,
}

/// Show the main menu until the player quits.
fn run_menu<B: BufRead>(
    config: &Config,
    input: &mut InputReader<B>,
    rng: &mut StdRng,
) -> anyhow::Result<()> {
    loop {
        let flow = match main_menu(input)? {
            MenuChoice::NewGame => match choose_side(config.first_player, input, rng)? {
                Some(human) => {
                    let state = MatchState::new(config.dim, rng);
                    play(config, input, rng, human, state)?
                }
                None => Flow::Exit,
            },
            MenuChoice::LoadGame => match SaveFile::load(&config.save_file) {
                Ok(save) => play(config, input, rng, save.human, save.state)?,
                Err(err) => {
                    println!("Could not load the saved game: {:#}", err);
                    Flow::Menu
                }
            },
            MenuChoice::Quit => Flow::Exit,
        };
        if flow == Flow::Exit {
            return Ok(());
        }
    }
}

fn main_menu<B: BufRead>(input: &mut InputReader<B>) -> io::Result<MenuChoice> {
    println!();
    println!("Main menu:");
    println!("  1. New game");
    println!("  2. Load saved game");
    println!("  3. Quit");
    let choice = input.read_input_lower(">", |line| match line {
        "1" | "new" => Some(MenuChoice::NewGame),
        "2" | "load" => Some(MenuChoice::LoadGame),
        "3" | "q" | "quit" => Some(MenuChoice::Quit),
        other => {
            println!("Invalid selection \"{}\".", other);
            None
        }
    })?;
    Ok(choice.unwrap_or(MenuChoice::Quit))
}

/// Choose which [`Side`] the human plays based on either args or cli input. Returns
/// `None` if the input ended before a choice was made.
fn choose_side<B: BufRead>(
    first_player: Option<FirstPlayer>,
    input: &mut InputReader<B>,
    rng: &mut StdRng,
) -> io::Result<Option<Side>> {
    Ok(match first_player {
        Some(FirstPlayer::Human) => Some(Side::P1),
        Some(FirstPlayer::Computer) => Some(Side::P2),
        Some(FirstPlayer::Random) => Some(if rng.gen() { Side::P1 } else { Side::P2 }),
        None => input.read_input_lower("Do you want to go first? (Y/n)", |input| match input {
            "yes" | "y" | "first" | "1" | "1st" | "" => Some(Side::P1),
            "no" | "n" | "second" | "2" | "2nd" => Some(Side::P2),
            _ => {
                println!("Invalid selection.");
                None
            }
        })?,
    })
}

/// Play a match between the human at `human` and the computer.
fn play<B: BufRead>(
    config: &Config,
    input: &mut InputReader<B>,
    rng: &mut StdRng,
    human: Side,
    state: MatchState,
) -> anyhow::Result<Flow> {
    let computer = RandomPlayer::new("Computer", StdRng::seed_from_u64(rng.gen()));
    let you = HumanPlayer::new(input);
    let (p1, p2): (Box<dyn Player + '_>, Box<dyn Player + '_>) = match human {
        Side::P1 => (Box::new(you), Box::new(computer)),
        Side::P2 => (Box::new(computer), Box::new(you)),
    };
    let mut game = Match::new(state, p1, p2);
    info!(%human, current = %game.current(), "Playing match");

    match game.run_match() {
        Ok(winner) => {
            let state = game.into_state();
            println!();
            print!("{}", TurnDisplay(&state.view(human)));
            println!();
            if winner == human {
                println!("You won!");
            } else {
                println!("The computer sank your fleet. Better luck next time!");
            }
            Ok(Flow::Menu)
        }
        Err(err @ MatchError::AlreadyConcluded { .. }) => {
            println!("Cannot continue: {}.", err);
            Ok(Flow::Menu)
        }
        Err(MatchError::Withdrawn { side, withdrawal }) => {
            if side != human {
                warn!(%side, %withdrawal, "Computer left the match");
            }
            match withdrawal {
                Withdrawal::Quit => Ok(Flow::Exit),
                Withdrawal::BackToMenu => Ok(Flow::Menu),
                Withdrawal::QuitAndSave => {
                    let save = SaveFile {
                        human,
                        state: game.into_state(),
                    };
                    save.store(&config.save_file)?;
                    println!("Game saved to {}.", config.save_file.display());
                    Ok(Flow::Exit)
                }
            }
        }
    }
}
