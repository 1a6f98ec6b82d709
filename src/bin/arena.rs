use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use connect_four::ai::{Difficulty, Strategy};
use connect_four::config::{AiConfig, AppConfig};
use connect_four::game::{Board, GameSession, MoveInput, Player, SessionEvent, SessionResult};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Level {
    Easy,
    Medium,
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
        }
    }
}

/// Pit two computer opponents against each other.
#[derive(Debug, Parser)]
#[command(name = "arena", about = "Connect Four computer-vs-computer match runner")]
struct Args {
    /// Opponent that plays Red (moves first) in the first game
    #[arg(long, value_enum, default_value_t = Level::Hard)]
    first: Level,

    /// Opponent that plays Yellow in the first game
    #[arg(long, value_enum, default_value_t = Level::Medium)]
    second: Level,

    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: u32,

    /// Alternate which opponent moves first every game
    #[arg(long)]
    swap_seats: bool,

    /// Override the Hard search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Seed for the random opponents (the second side uses seed + 1)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

/// Feeds both seats of a two-player session from computer strategies.
struct Seats<'a> {
    red: &'a mut dyn Strategy,
    yellow: &'a mut dyn Strategy,
}

impl MoveInput for Seats<'_> {
    fn choose_column(&mut self, board: &Board, player: Player) -> usize {
        let strategy = match player {
            Player::One => &mut *self.red,
            Player::Two => &mut *self.yellow,
        };
        let mut scratch = *board;
        strategy.choose_move(&mut scratch, player).column
    }
}

#[derive(Debug, Default, serde::Serialize)]
struct Summary {
    first: String,
    second: String,
    games: u32,
    first_wins: u32,
    second_wins: u32,
    draws: u32,
    red_wins: u32,
    average_plies: f64,
}

fn build(level: Level, config: &AiConfig, seed_offset: u64) -> Box<dyn Strategy> {
    let config = AiConfig {
        seed: config.seed.map(|s| s.wrapping_add(seed_offset)),
        ..config.clone()
    };
    Difficulty::from(level).build(&config)
}

/// Play one game to the end and return its event with the final board.
fn play_game<'a>(
    red: &'a mut dyn Strategy,
    yellow: &'a mut dyn Strategy,
) -> Result<(SessionEvent, Board)> {
    let mut seats = Seats { red, yellow };
    let mut session = GameSession::player_vs_player();
    let event = session.run(&mut seats)?;
    Ok((event, *session.board()))
}

/// Play `games` games between two strategies that keep their state (and
/// RNG streams) across games.
fn play_match(
    first: &mut dyn Strategy,
    second: &mut dyn Strategy,
    games: u32,
    swap_seats: bool,
) -> Result<Summary> {
    let mut summary = Summary {
        first: first.name().to_string(),
        second: second.name().to_string(),
        ..Summary::default()
    };
    let mut total_plies = 0u64;

    for game in 0..games {
        let first_is_red = !(swap_seats && game % 2 == 1);
        let played = if first_is_red {
            play_game(&mut *first, &mut *second)
        } else {
            play_game(&mut *second, &mut *first)
        };
        let (event, _) = played.with_context(|| format!("game {} stopped early", game + 1))?;

        summary.games += 1;
        total_plies += event.plies as u64;
        let winner = match event.result {
            SessionResult::PlayerWin(player) => Some(player),
            SessionResult::Draw => None,
            SessionResult::ComputerWin => unreachable!("both seats are driven as players"),
        };
        match winner {
            Some(player) => {
                if player == Player::One {
                    summary.red_wins += 1;
                }
                if (player == Player::One) == first_is_red {
                    summary.first_wins += 1;
                } else {
                    summary.second_wins += 1;
                }
            }
            None => summary.draws += 1,
        }
        debug!(game = game + 1, plies = event.plies, ?winner, first_is_red, "game finished");
    }

    if summary.games > 0 {
        summary.average_plies = total_plies as f64 / summary.games as f64;
    }
    Ok(summary)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = AppConfig::load_or_default(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;
    if let Some(depth) = args.depth {
        config.ai.hard_depth = depth;
    }
    if args.seed.is_some() {
        config.ai.seed = args.seed;
    }
    config.validate().context("invalid arena settings")?;

    let mut first = build(args.first, &config.ai, 0);
    let mut second = build(args.second, &config.ai, 1);
    let summary = play_match(first.as_mut(), second.as_mut(), args.games, args.swap_seats)?;
    info!(games = summary.games, "arena finished");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{} vs {} over {} games", summary.first, summary.second, summary.games);
        println!("  {:<8} wins: {}", summary.first, summary.first_wins);
        println!("  {:<8} wins: {}", summary.second, summary.second_wins);
        println!("  draws:         {}", summary.draws);
        println!("  red wins:      {}", summary.red_wins);
        println!("  average plies: {:.1}", summary.average_plies);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(level: Level, seed: u64) -> Box<dyn Strategy> {
        let config = AiConfig {
            seed: Some(seed),
            hard_depth: 2,
            ..AiConfig::default()
        };
        build(level, &config, 0)
    }

    #[test]
    fn test_seeded_games_differ() {
        let mut red = seeded(Level::Easy, 7);
        let mut yellow = seeded(Level::Medium, 8);
        let boards: Vec<Board> = (0..8)
            .map(|_| play_game(red.as_mut(), yellow.as_mut()).unwrap().1)
            .collect();
        assert!(
            boards.iter().any(|b| *b != boards[0]),
            "every seeded game ended on the same board"
        );
    }

    #[test]
    fn test_same_seed_reproduces_the_match() {
        let play = || {
            let mut first = seeded(Level::Easy, 3);
            let mut second = seeded(Level::Easy, 4);
            play_match(first.as_mut(), second.as_mut(), 6, true).unwrap()
        };
        let (a, b) = (play(), play());
        assert_eq!(
            (a.first_wins, a.second_wins, a.draws, a.red_wins),
            (b.first_wins, b.second_wins, b.draws, b.red_wins)
        );
        assert_eq!(a.average_plies, b.average_plies);
    }

    #[test]
    fn test_match_summary_adds_up() {
        let mut first = seeded(Level::Hard, 1);
        let mut second = seeded(Level::Easy, 2);
        let summary = play_match(first.as_mut(), second.as_mut(), 4, true).unwrap();
        assert_eq!((summary.first.as_str(), summary.second.as_str()), ("Hard", "Easy"));
        assert_eq!(summary.games, 4);
        assert_eq!(summary.first_wins + summary.second_wins + summary.draws, 4);
        assert!(summary.red_wins <= summary.first_wins + summary.second_wins);
        assert!(summary.average_plies >= 7.0);
    }
}
