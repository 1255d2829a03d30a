//! Headless replay of a move list.

use anyhow::{Context, Result};
use std::io::Write;
use tictactoe_core::{GameEngine, Position};
use tracing::{info, instrument};

/// Applies `moves` to a fresh engine, optionally jumps in history, and
/// writes the result to `out`.
///
/// Stops at the first rejected move.
#[instrument(skip(out))]
pub fn run(moves: &[Position], jump: Option<usize>, json: bool, out: &mut impl Write) -> Result<()> {
    let engine = replay(moves, jump)?;
    info!(current_move = engine.current_move(), "Replay finished");

    if json {
        serde_json::to_writer_pretty(&mut *out, &engine.snapshot())?;
        writeln!(out)?;
    } else {
        write_summary(&engine, out)?;
    }
    Ok(())
}

/// Builds the engine state produced by `moves` and an optional jump.
pub fn replay(moves: &[Position], jump: Option<usize>) -> Result<GameEngine> {
    let mut engine = GameEngine::new();
    for (ply, &pos) in moves.iter().enumerate() {
        engine
            .apply_move(pos.to_index())
            .with_context(|| format!("Move {} (cell {}) rejected", ply + 1, pos.to_index()))?;
    }
    if let Some(index) = jump {
        engine
            .jump_to(index)
            .with_context(|| format!("Cannot jump to move #{}", index))?;
    }
    Ok(engine)
}

fn write_summary(engine: &GameEngine, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", engine.current_board().display())?;
    writeln!(out)?;
    writeln!(out, "{}", engine.status())?;
    if let Some(line) = engine.winning_line() {
        let [a, b, c] = line.indices();
        writeln!(out, "Winning line: {}, {}, {}", a, b, c)?;
    }
    writeln!(
        out,
        "Move {} of {}",
        engine.current_move(),
        engine.history().len() - 1
    )?;
    let scores = engine.scores();
    writeln!(
        out,
        "Scores: X {} | O {} | Ties {}",
        scores.x_wins(),
        scores.o_wins(),
        scores.ties()
    )?;
    Ok(())
}
