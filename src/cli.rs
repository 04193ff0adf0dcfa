//! Command-line front end for the `war` binary.
//!
//! Argument parsing and the match run live here so the binary only has to
//! print what [`run`] returns and exit with its status.
//!
//! ```
//! use clap::Parser;
//! use rust_war::cli::{run, Args};
//!
//! let args = Args::try_parse_from(["war", "-p", "1"]).unwrap();
//! let output = run(&args);
//!
//! assert_eq!(output.status, 2);
//! assert!(output.stdout.is_empty());
//! ```

use clap::Parser;

use crate::core::config::{
    DEFAULT_PLAYERS, DEFAULT_RANKS, DEFAULT_SUITS, MAX_PLAYERS, MAX_RANKS, MAX_SUITS, MIN_PLAYERS,
    MIN_RANKS, MIN_SUITS,
};
use crate::core::{MatchConfig, WarError};
use crate::game::WarGame;

/// Exit status for rejected arguments.
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Exit status when a validated match still fails to run.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Parser, Debug)]
#[command(name = "war", author, version, about = "Simulate a game of War", long_about = None)]
pub struct Args {
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SUITS,
        help = format!("Number of suits to use for the deck of cards. Minimum value is {MIN_SUITS}, max value is {MAX_SUITS}")
    )]
    pub suits: u16,

    #[arg(
        short,
        long,
        default_value_t = DEFAULT_RANKS,
        help = format!("Number of ranks to use for the deck of cards. Minimum value is {MIN_RANKS}, max value is {MAX_RANKS}")
    )]
    pub ranks: u16,

    #[arg(
        short,
        long,
        default_value_t = DEFAULT_PLAYERS,
        help = format!("Number of players to use for the game. Minimum value is {MIN_PLAYERS}, max is {MAX_PLAYERS}")
    )]
    pub players: usize,

    /// Shuffle seed, for a reproducible match.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the match report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    #[must_use]
    pub fn config(&self) -> MatchConfig {
        MatchConfig {
            suits: self.suits,
            ranks: self.ranks,
            players: self.players,
            seed: self.seed,
        }
    }

    #[must_use]
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// What a run printed and how it ended.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOutput {
    /// Process exit status; 0 on success.
    pub status: u8,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    fn failed(status: u8, stderr: String) -> Self {
        Self {
            status,
            stdout: String::new(),
            stderr,
        }
    }
}

/// Validate the arguments, play one match and render the result.
///
/// Out-of-bounds or inconsistent parameters produce no standard output
/// and exit with [`EXIT_INVALID_INPUT`].
#[must_use]
pub fn run(args: &Args) -> RunOutput {
    let config = args.config();
    if let Err(e) = config.validate() {
        let message = match e {
            WarError::OutOfBounds { .. } => e.to_string(),
            _ => format!("Invalid input detected: {}", e),
        };
        return RunOutput::failed(EXIT_INVALID_INPUT, format!("\n{}\n\n", message));
    }

    let header = format!(
        "{} players playing war with {} suits and {} ranks",
        config.players, config.suits, config.ranks
    );

    let mut game = WarGame::new(config);
    let standings = match game.play() {
        Ok(standings) => standings,
        Err(e) => {
            return RunOutput::failed(EXIT_FAILURE, format!("Invalid input detected: {}\n", e))
        }
    };

    let stdout = if args.json {
        match serde_json::to_string_pretty(&game.report()) {
            Ok(json) => json + "\n",
            Err(e) => {
                return RunOutput::failed(
                    EXIT_FAILURE,
                    format!("failed to serialize report: {}\n", e),
                )
            }
        }
    } else {
        format!("\n{}\n\n{}", header, standings)
    };

    RunOutput {
        status: 0,
        stdout,
        stderr: String::new(),
    }
}
