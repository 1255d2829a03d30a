//! Command-line interface for tictactoe.

use crate::theme::ThemeMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use tictactoe_core::Position;

/// Tic-tac-toe with move history, time travel and score tracking
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: PathBuf,

    /// Initial theme, overriding the configuration file
    #[arg(long, value_enum, global = true)]
    pub theme: Option<ThemeMode>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a move list headlessly and print the resulting position
    Replay {
        /// Cells as indices 0-8 or labels such as `top-left`, separated by
        /// commas or spaces
        #[arg(required = true)]
        moves: Vec<MoveList>,

        /// History index to jump to after the moves
        #[arg(long)]
        jump: Option<usize>,

        /// Print the engine snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Cells named by one command-line argument, e.g. `0,4` or `"center 8"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveList(pub Vec<Position>);

impl MoveList {
    /// Concatenates the cells of every argument in order.
    pub fn flatten(lists: &[MoveList]) -> Vec<Position> {
        lists.iter().flat_map(|list| list.0.iter().copied()).collect()
    }
}

impl FromStr for MoveList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                Position::parse(token).ok_or_else(|| {
                    format!("'{}' is not a cell (use 0-8 or a label like top-left)", token)
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(MoveList)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert_eq!(cli.theme, None);
    }

    #[test]
    fn test_replay_accepts_commas_and_spaces() {
        let cli =
            Cli::try_parse_from(["tictactoe", "replay", "0,4", "1", "--jump", "2", "--json"])
                .unwrap();
        let Some(Command::Replay { moves, jump, json }) = cli.command else {
            panic!("expected replay command");
        };
        assert_eq!(
            MoveList::flatten(&moves),
            [Position::TopLeft, Position::Center, Position::TopCenter]
        );
        assert_eq!(jump, Some(2));
        assert!(json);
    }

    #[test]
    fn test_replay_splits_quoted_lists_and_labels() {
        for arg in ["0 4 1", "0, 4,1", "top-left center Top-center"] {
            let cli = Cli::try_parse_from(["tictactoe", "replay", arg]).unwrap();
            let Some(Command::Replay { moves, .. }) = cli.command else {
                panic!("expected replay command");
            };
            assert_eq!(
                MoveList::flatten(&moves),
                [Position::TopLeft, Position::Center, Position::TopCenter],
                "{}",
                arg
            );
        }
    }

    #[test]
    fn test_replay_rejects_unknown_cells() {
        assert!(Cli::try_parse_from(["tictactoe", "replay", "0,9"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "replay", "middle"]).is_err());
    }

    #[test]
    fn test_theme_override() {
        let cli = Cli::try_parse_from(["tictactoe", "--theme", "light", "play"]).unwrap();
        assert_eq!(cli.theme, Some(ThemeMode::Light));
        assert_eq!(cli.command, Some(Command::Play));
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tictactoe", "replay"]).is_err());
    }
}
