//! tictactoe - terminal tic-tac-toe with history and scores.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{App, AppConfig, Cli, Command, MoveList, logging, replay, terminal};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(theme) = cli.theme {
        config = config.with_theme(theme);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init_file_tracing(&config)?;
            let mut app = App::new(*config.theme());
            terminal::run(&mut app)
        }
        Command::Replay { moves, jump, json } => {
            logging::init_stderr_tracing();
            replay::run(&MoveList::flatten(&moves), jump, json, &mut std::io::stdout().lock())
        }
    }
}
