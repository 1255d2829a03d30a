//! Rendering tests against ratatui's in-memory backend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tictactoe_tui::{App, ThemeMode, ui};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(110, 32)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_fresh_game_shows_start_state() {
    let app = App::new(ThemeMode::Dark);
    let screen = render(&app);

    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Go to game start"));
    assert!(screen.contains("No moves yet. Start playing!"));
    assert!(screen.contains("Player X"));
    assert!(screen.contains("Game Statistics (0 played)"));
    assert!(screen.contains("[t] Light"));
}

#[test]
fn test_win_shows_winner_and_scores() {
    let mut app = App::new(ThemeMode::Light);
    for c in ['1', '5', '2', '6', '3'] {
        press(&mut app, KeyCode::Char(c));
    }
    let screen = render(&app);

    assert!(screen.contains("Winner: X"));
    assert!(screen.contains("Go to move #5"));
    assert!(screen.contains("Current"));
    assert!(screen.contains("Press n for a new game."));
    assert!(!screen.contains("No moves yet"));
    assert!(screen.contains("[t] Dark"));
    assert!(screen.contains("Game Statistics (1 played)"));
}

#[test]
fn test_rejected_move_reason_is_shown() {
    let mut app = App::new(ThemeMode::Dark);
    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Char('5'));
    let screen = render(&app);

    assert!(screen.contains("Center is already occupied"));
    assert!(screen.contains("Next player: O"));
}

#[test]
fn test_draw_is_shown() {
    let mut app = App::new(ThemeMode::Dark);
    for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        press(&mut app, KeyCode::Char(c));
    }
    let screen = render(&app);
    assert!(screen.contains("Game ended in a draw!"));
}

#[test]
fn test_new_game_keeps_scores_on_screen() {
    let mut app = App::new(ThemeMode::Dark);
    for c in ['1', '5', '2', '6', '3'] {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.engine().scores().x_wins(), 1);
    assert_eq!(app.engine().current_move(), 0);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.engine().scores().total_games(), 0);

    let screen = render(&app);
    assert!(screen.contains("Scores reset."));
}
