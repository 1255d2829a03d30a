//! Header, statistics, move history and footer panels.

use crate::app::Notice;
use crate::theme::{Palette, ThemeMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table},
};
use tictactoe_core::{HistoryEntry, Scores};

/// Title bar with the theme toggle hint.
pub fn render_header(frame: &mut Frame, area: Rect, theme: ThemeMode, palette: &Palette) {
    let line = Line::from(vec![
        Span::styled(
            "Tic Tac Toe",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   A classic game in your terminal   ", Style::default().fg(palette.subtext)),
        Span::styled(
            format!("[t] {}", theme.toggle_label()),
            Style::default().fg(palette.accent),
        ),
    ]);
    let header = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(header, area);
}

/// Win and tie counters.
pub fn render_scores(frame: &mut Frame, area: Rect, scores: &Scores, palette: &Palette) {
    let label = Style::default().fg(palette.subtext);
    let number = |value: u32, color: Color| {
        Cell::from(value.to_string()).style(Style::default().fg(color).add_modifier(Modifier::BOLD))
    };

    let header = Row::new(vec![
        Cell::from("Player X"),
        Cell::from("Player O"),
        Cell::from("Ties"),
    ])
    .style(label);
    let counts = Row::new(vec![
        number(scores.x_wins(), palette.x),
        number(scores.o_wins(), palette.o),
        number(scores.ties(), palette.tie),
    ]);
    let units = Row::new(vec![
        Cell::from("Wins"),
        Cell::from("Wins"),
        Cell::from("Games"),
    ])
    .style(label);

    let widths = [
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ];
    let table = Table::new(vec![counts, units], widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(Span::styled(
                format!(" Game Statistics ({} played) ", scores.total_games()),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(table, area);
}

/// Move list for time travel.
///
/// `selected` is `Some` while the list has focus.
pub fn render_history(
    frame: &mut Frame,
    area: Rect,
    entries: &[HistoryEntry],
    selected: Option<usize>,
    palette: &Palette,
) {
    let border = if selected.is_some() {
        palette.accent
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            " Move History ",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [list_area, hint_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| history_item(entry, palette))
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, list_area, &mut state);

    if entries.len() <= 1 {
        let hint = Paragraph::new("No moves yet. Start playing!")
            .style(Style::default().fg(palette.subtext))
            .alignment(Alignment::Center);
        frame.render_widget(hint, hint_area);
    }
}

fn history_item(entry: &HistoryEntry, palette: &Palette) -> ListItem<'static> {
    let mut spans = vec![Span::raw(entry.label.clone())];
    if let Some(placed) = entry.placed {
        spans.push(Span::styled(
            format!("  ({} {})", placed.player, placed.position),
            Style::default().fg(palette.subtext),
        ));
    }
    let style = if entry.is_current {
        spans.push(Span::styled(
            "  Current",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ));
        Style::default().fg(palette.text).bg(palette.active_bg)
    } else {
        Style::default().fg(palette.text)
    };
    ListItem::new(Line::from(spans)).style(style)
}

/// Last action feedback, or the key help when there is none.
pub fn render_footer(frame: &mut Frame, area: Rect, notice: Option<&Notice>, palette: &Palette) {
    let (text, color) = match notice {
        Some(Notice::Info(message)) => (message.as_str(), palette.text),
        Some(Notice::Rejected(message)) => (message.as_str(), palette.error),
        None => (
            "Arrows/1-9: Move | Enter: Place | Tab: History | n: New Game | r: Reset Scores | t: Theme | q: Quit",
            palette.subtext,
        ),
    };
    let footer = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(footer, area);
}
