//! UI rendering using ratatui.
//!
//! Rendering is stateless: every frame is drawn from the engine snapshot
//! and the presentation state held by [`App`].

mod board;
mod panels;

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

pub use board::render_board;
pub use panels::{render_footer, render_header, render_history, render_scores};

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = app.theme().palette();
    let snapshot = app.engine().snapshot();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(frame, rows[0], *app.theme(), &palette);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    render_board(
        frame,
        columns[0],
        &snapshot,
        (*app.focus() == Focus::Board).then_some(*app.cursor()),
        &palette,
    );

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(columns[1]);

    render_scores(frame, side[0], &snapshot.scores, &palette);
    render_history(
        frame,
        side[1],
        &snapshot.history,
        (*app.focus() == Focus::History).then_some(*app.history_cursor()),
        &palette,
    );

    render_footer(frame, rows[2], app.notice().as_ref(), &palette);
}
