//! Utilities to run bots against each other and report the results.
use std::fmt::Write;
use std::fmt::{Debug, Formatter};
use std::time::Instant;

use log::{debug, info};

use crate::ai::{Bot, SelectError};
use crate::board::{Board, Outcome, Player};

/// Run `games` games between `bot_a` and `bot_b`, one after the other, all starting from `start`.
/// The bot created by `bot_a` always plays [Player::A].
pub fn run<B: Board, L: Bot<B>, R: Bot<B>>(
    start: impl Fn() -> B,
    bot_a: impl Fn() -> L,
    bot_b: impl Fn() -> R,
    games: u32,
) -> Result<BotGameResult<B>, SelectError> {
    let mut replays = vec![];

    for game_i in 0..games {
        let replay = play_game(&start(), &mut bot_a(), &mut bot_b())?;
        info!("Game {}/{}: {:?} after {} moves", game_i + 1, games, replay.outcome, replay.moves.len());
        replays.push(replay);
    }

    let count = |outcome: Outcome| replays.iter().filter(|r| r.outcome == outcome).count() as u32;

    Ok(BotGameResult {
        game_count: games,
        wins_a: count(Outcome::WonBy(Player::A)),
        wins_b: count(Outcome::WonBy(Player::B)),
        draws: count(Outcome::Draw),
        average_game_length: replays.iter().map(|r| r.moves.len() as f32).sum::<f32>() / games.max(1) as f32,
        replays,
    })
}

/// Play a single game from `start` until it is done, alternating between the bots.
pub fn play_game<B: Board>(start: &B, bot_a: &mut impl Bot<B>, bot_b: &mut impl Bot<B>) -> Result<Replay<B>, SelectError> {
    let mut board = start.clone();

    let mut total_time_a = 0.0;
    let mut total_time_b = 0.0;
    let mut moves = vec![];

    loop {
        if let Some(outcome) = board.outcome() {
            info!("Game over: {:?}", outcome);
            return Ok(Replay {
                start: start.clone(),
                moves,
                outcome,
                total_time_a,
                total_time_b,
                debug_a: debug_to_string(bot_a),
                debug_b: debug_to_string(bot_b),
            });
        }

        let player = board.next_player();
        let start_time = Instant::now();
        let mv = match player {
            Player::A => bot_a.select_move(&board)?,
            Player::B => bot_b.select_move(&board)?,
        };
        let elapsed = start_time.elapsed().as_secs_f32();
        match player {
            Player::A => total_time_a += elapsed,
            Player::B => total_time_b += elapsed,
        }

        info!("Player {} : {}", player, mv);
        board.play(mv)?;
        debug!("\n{}", board);
        moves.push(mv);
    }
}

#[derive(Debug, Clone)]
pub struct Replay<B: Board> {
    pub start: B,
    pub moves: Vec<B::Move>,
    pub outcome: Outcome,

    pub total_time_a: f32,
    pub total_time_b: f32,

    pub debug_a: String,
    pub debug_b: String,
}

impl<B: Board> Replay<B> {
    /// The board at the end of the game.
    pub fn end(&self) -> B {
        let mut board = self.start.clone();
        for &mv in &self.moves {
            board.play(mv).expect("replay moves were all played successfully before");
        }
        board
    }
}

/// Structure returned by the function [`run`].
pub struct BotGameResult<B: Board> {
    pub game_count: u32,
    pub replays: Vec<Replay<B>>,

    pub wins_a: u32,
    pub wins_b: u32,
    pub draws: u32,
    pub average_game_length: f32,
}

impl<B: Board> Debug for BotGameResult<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BotGameResult {{")?;
        writeln!(
            f,
            "  {} games, average length {}",
            self.game_count, self.average_game_length
        )?;
        writeln!(f, "  wins A: {}, wins B: {}, draws: {}", self.wins_a, self.wins_b, self.draws)?;
        if let Some(replay) = self.replays.first() {
            writeln!(f, "  A: {}", replay.debug_a)?;
            writeln!(f, "  B: {}", replay.debug_b)?;
        }
        writeln!(f, "}}")?;

        Ok(())
    }
}

fn debug_to_string(d: &impl Debug) -> String {
    let mut s = String::new();
    write!(&mut s, "{:?}", d).unwrap();
    s
}
