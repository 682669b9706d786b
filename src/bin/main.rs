use std::error::Error;
use std::io;

use clap::{Arg, Command};
use log::{info, LevelFilter};

use gobang::ai::minimax::{Algorithm, SearchBot, DEFAULT_DEPTH};
use gobang::ai::simple::RandomBot;
use gobang::ai::{Bot, SelectError};
use gobang::board::Player;
use gobang::games::gomoku::{GameConfig, GomokuBoard, Square};
use gobang::heuristic::gomoku::GomokuHeuristic;
use gobang::util::bot_game;
use gobang::util::tiny::seeded_rng;

fn main() -> Result<(), Box<dyn Error>> {
    let matches = Command::new("gobang")
        .about("Play k-in-a-row games between bots")
        .arg(
            Arg::new("height")
                .long("height")
                .env("GOBANG_HEIGHT")
                .help("Number of rows on the board")
                .num_args(1)
                .default_value("16")
                .value_parser(clap::value_parser!(u8)),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .env("GOBANG_WIDTH")
                .help("Number of columns on the board")
                .num_args(1)
                .default_value("16")
                .value_parser(clap::value_parser!(u8)),
        )
        .arg(
            Arg::new("k")
                .short('k')
                .long("k")
                .env("GOBANG_K")
                .help("Number of stones in a row needed to win")
                .num_args(1)
                .default_value("5")
                .value_parser(clap::value_parser!(u8)),
        )
        .arg(
            Arg::new("depth")
                .long("depth")
                .env("GOBANG_DEPTH")
                .help("Depth limit of the search bots, defaults to 2")
                .num_args(1)
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("playerX")
                .long("player-x")
                .env("GOBANG_PLAYER_X")
                .help("Bot playing x, which moves first")
                .num_args(1)
                .value_parser(["alphabeta", "minimax", "random"])
                .default_value("alphabeta"),
        )
        .arg(
            Arg::new("playerO")
                .long("player-o")
                .env("GOBANG_PLAYER_O")
                .help("Bot playing o")
                .num_args(1)
                .value_parser(["alphabeta", "minimax", "random"])
                .default_value("alphabeta"),
        )
        .arg(
            Arg::new("games")
                .long("games")
                .env("GOBANG_GAMES")
                .help("Number of games to play")
                .num_args(1)
                .default_value("1")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .env("GOBANG_SEED")
                .help("Seed for the random bots")
                .num_args(1)
                .default_value("0")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("logLevel")
                .long("log-level")
                .env("GOBANG_LOG_LEVEL")
                .help("Level of messages written to stderr")
                .num_args(1)
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .default_value("info"),
        )
        .arg(
            Arg::new("logfile")
                .long("log-file")
                .env("GOBANG_LOG_FILE")
                .help("Also write debug messages to this file")
                .num_args(1),
        )
        .get_matches();

    let level = match matches.get_one::<String>("logLevel").map(String::as_str) {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    setup_logging(level, matches.get_one::<String>("logfile"))?;

    let height = *matches.get_one::<u8>("height").unwrap();
    let width = *matches.get_one::<u8>("width").unwrap();
    let k = *matches.get_one::<u8>("k").unwrap();
    let depth = matches.get_one::<u32>("depth").copied().unwrap_or(DEFAULT_DEPTH);
    let games = *matches.get_one::<u32>("games").unwrap();
    let seed = *matches.get_one::<u64>("seed").unwrap();
    let player_x = matches.get_one::<String>("playerX").unwrap().clone();
    let player_o = matches.get_one::<String>("playerO").unwrap().clone();

    let config = GameConfig::new(height, width, k)?;
    info!("Playing {} game(s) on {:?}: x = {}, o = {}", games, config, player_x, player_o);

    let result = bot_game::run(
        || GomokuBoard::new(config),
        || bot_from_name(&player_x, depth, seed),
        || bot_from_name(&player_o, depth, seed.wrapping_add(1)),
        games,
    )?;

    for replay in &result.replays {
        let end = replay.end();
        println!("{}", end);
        println!("Game over: utility {} for X", end.utility_for(Player::A));
    }
    println!("{:?}", result);

    Ok(())
}

/// A bot picked by name on the command line.
#[derive(Debug)]
struct NamedBot(Box<dyn Bot<GomokuBoard>>);

impl Bot<GomokuBoard> for NamedBot {
    fn select_move(&mut self, board: &GomokuBoard) -> Result<Square, SelectError> {
        self.0.select_move(board)
    }
}

fn bot_from_name(name: &str, depth: u32, seed: u64) -> NamedBot {
    let bot: Box<dyn Bot<GomokuBoard>> = match name {
        "minimax" => Box::new(SearchBot::new(Algorithm::Minimax, depth, GomokuHeuristic)),
        "random" => Box::new(RandomBot::new(seeded_rng(seed))),
        _ => Box::new(SearchBot::new(Algorithm::AlphaBeta, depth, GomokuHeuristic)),
    };
    NamedBot(bot)
}

fn setup_logging(level: LevelFilter, log_file: Option<&String>) -> Result<(), Box<dyn Error>> {
    let log_dispatcher = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}[{}][{}] {}",
            chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
            record.target(),
            record.level(),
            message
        ))
    });

    if let Some(log_file) = log_file {
        log_dispatcher
            .chain(
                fern::Dispatch::new()
                    .level(LevelFilter::Debug)
                    .chain(fern::log_file(log_file)?),
            )
            .chain(fern::Dispatch::new().level(level).chain(io::stderr()))
            .apply()?;
    } else {
        log_dispatcher.level(level).chain(io::stderr()).apply()?;
    }

    Ok(())
}
