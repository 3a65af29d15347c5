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
    error::Error,
    fmt,
    io::{self, BufRead, Write},
    num::ParseIntError,
    path::{Path, PathBuf},
    process,
};

use clap::{App, Arg, ArgMatches};
use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use solobattleship::{
    score::DEFAULT_SCORE_FILE, Board, Coordinate, Descriptor, Game, PlacementOptions, ScoreLog,
    ShotError, ShotOutcome,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let matches = app().get_matches();

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    let name = choose_name(&matches, &mut input)?;
    let (path, descriptor_id) = descriptor_path(&matches);
    let descriptor = Descriptor::load(&path)?;
    debug!(path = %path.display(), %descriptor_id, "playing");

    let mut rng = match matches.value_of("seed") {
        Some(seed) => StdRng::seed_from_u64(seed.parse()?),
        None => StdRng::from_entropy(),
    };
    let board = Board::build(&descriptor, &mut rng, &placement_options(&matches)?)?;
    let mut game = Game::new(name, descriptor_id, board);

    describe_game(&game);
    play(&mut game, &mut input, matches.is_present("show_board"))?;

    let log = ScoreLog::new(matches.value_of("scores").unwrap_or(DEFAULT_SCORE_FILE));
    if let Some(record) = game.score_record() {
        log.append(&record)
            .map_err(|err| format!("could not save score to {}: {}", log.path().display(), err))?;
    }
    println!("Well done {}!", game.player());
    println!("Finished in {} shots.", game.shot_count());
    Ok(())
}

/// Command line definition.
fn app() -> App<'static, 'static> {
    App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Single-player command line battleship: sink the hidden fleet in as few shots as you can.")
        .arg(
            Arg::with_name("name")
                .short("n")
                .long("name")
                .value_name("NAME")
                .help("name recorded in the score file; asked for if not given")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("game")
                .short("g")
                .long("game")
                .value_name("VERSION")
                .help("game version to play, read from jeu<VERSION>.txt")
                .takes_value(true)
                .default_value("1"),
        )
        .arg(
            Arg::with_name("dir")
                .short("d")
                .long("dir")
                .value_name("DIR")
                .help("directory holding the game descriptors")
                .takes_value(true)
                .default_value("."),
        )
        .arg(
            Arg::with_name("descriptor")
                .short("f")
                .long("descriptor")
                .value_name("FILE")
                .help("play the descriptor in FILE instead of a numbered game")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("scores")
                .short("s")
                .long("scores")
                .value_name("FILE")
                .help("score file to append the result to")
                .takes_value(true)
                .default_value(DEFAULT_SCORE_FILE),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for ship placement, for a reproducible board")
                .takes_value(true)
                .validator(|v| is_number::<u64>(&v)),
        )
        .arg(
            Arg::with_name("max_attempts")
                .long("max-attempts")
                .value_name("N")
                .help("random positions tried per ship before giving up, 0 for no limit")
                .takes_value(true)
                .validator(|v| is_number::<usize>(&v)),
        )
        .arg(
            Arg::with_name("show_board")
                .long("show-board")
                .help("print the board after every shot"),
        )
}

/// Placement retry budget from `--max-attempts`, where 0 means no limit.
fn placement_options(matches: &ArgMatches) -> Result<PlacementOptions, ParseIntError> {
    Ok(match matches.value_of("max_attempts") {
        Some(n) => match n.parse::<usize>()? {
            0 => PlacementOptions { max_attempts: None },
            n => PlacementOptions {
                max_attempts: Some(n),
            },
        },
        None => PlacementOptions::default(),
    })
}

/// Validator for numeric arguments.
fn is_number<T: std::str::FromStr>(value: &str) -> Result<(), String> {
    value
        .parse::<T>()
        .map(|_| ())
        .map_err(|_| format!("{:?} is not a valid number", value))
}

/// Take the player's name from the args, or ask until a non-empty one is given.
fn choose_name<B: BufRead>(
    matches: &ArgMatches,
    input: &mut InputReader<B>,
) -> io::Result<String> {
    match matches.value_of("name").map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_owned()),
        _ => input.read_input("Name:", |input| {
            if input.is_empty() {
                println!("Please give a name.");
                None
            } else {
                Some(input.to_owned())
            }
        }),
    }
}

/// Work out which descriptor file to load and the id to record in the score file. An
/// explicit file is identified by its stem, a numbered game by its version.
fn descriptor_path(matches: &ArgMatches) -> (PathBuf, String) {
    match matches.value_of("descriptor") {
        Some(file) => {
            let path = PathBuf::from(file);
            let id = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.to_owned());
            (path, id)
        }
        None => {
            let version = matches.value_of("game").unwrap_or("1");
            let dir = Path::new(matches.value_of("dir").unwrap_or("."));
            (dir.join(Descriptor::file_name(version)), version.to_owned())
        }
    }
}

/// Print the board size and the fleet to find.
fn describe_game(game: &Game) {
    let board = game.board();
    println!("Game {}", game.descriptor_id());
    println!("Board dimensions:");
    println!("- width: {}", board.dimensions().width());
    println!("- height: {}", board.dimensions().height());
    println!("Ships:");
    for ship in board.iter_ships() {
        println!("- {}: {} cell(s)", ship.name(), ship.ship().len());
    }
    println!(
        "Your turn: answer the ?- prompt with a column and a row separated by a comma, \
        for example 3,5."
    );
}

/// Shot loop. Runs until every ship is sunk.
fn play<B: BufRead>(game: &mut Game, input: &mut InputReader<B>, show: bool) -> io::Result<()> {
    while !game.is_won() {
        let coord = input.read_input("?-", |input| match input.parse::<Coordinate>() {
            Ok(coord) => Some(coord),
            Err(err) => {
                println!("{}", err);
                None
            }
        })?;
        match game.fire(coord) {
            Ok(ShotOutcome::Miss) => println!("miss."),
            Ok(ShotOutcome::Hit(ship)) => println!("{} hit.", ship),
            Ok(ShotOutcome::Sunk(ship)) => println!("{} sunk.", ship),
            Err(ShotError::Duplicate(err)) => {
                println!("You already fired at {}, that shot does not count.", err.coord());
                continue;
            }
            Err(ShotError::GameOver) => break,
        }
        if show {
            show_board(game);
        }
    }
    Ok(())
}

/// Print the board as the player sees it: only the cells that were shot are revealed.
fn show_board(game: &Game) {
    enum HiddenCell {
        NotShot,
        Miss,
        Hit,
        Sunk,
    }
    impl fmt::Display for HiddenCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                HiddenCell::NotShot => f.pad("~"),
                HiddenCell::Miss => f.pad("o"),
                HiddenCell::Hit => f.pad("x"),
                HiddenCell::Sunk => f.pad("#"),
            }
        }
    }

    let board = game.board();
    print!("    ");
    for col in 1..=board.dimensions().width() {
        print!("{:^4}", col);
    }
    println!();
    for (i, row) in board.iter_board().enumerate() {
        print!("{:>3} ", i + 1);
        for cell in row {
            let shown = match cell.ship() {
                _ if !cell.shot() => HiddenCell::NotShot,
                None => HiddenCell::Miss,
                Some(ship) if ship.sunk() => HiddenCell::Sunk,
                Some(_) => HiddenCell::Hit,
            };
            print!("{:^4}", shown);
        }
        println!();
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            process::exit(0);
        }
        Ok(())
    }
}
