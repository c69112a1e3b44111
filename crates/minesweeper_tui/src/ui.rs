//! Shared board rendering for the play and replay screens.

use std::collections::HashSet;

use minesweeper_core::BoardState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

/// How closed mine cells are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MineDisplay {
    /// Mines stay hidden (game in progress).
    Hidden,
    /// Mines drawn as exploded marks (game lost).
    Mine,
    /// Mines drawn as flags (game won).
    Flag,
}

/// Everything the renderer needs to draw one board.
pub struct BoardView<'a> {
    /// Opened-cell state to draw.
    pub board: &'a BoardState,
    /// Player-placed flags, if the screen tracks them.
    pub flags: Option<&'a HashSet<u32>>,
    /// Highlighted cell, if the screen has a cursor.
    pub cursor: Option<(u32, u32)>,
    /// How to draw cells that hold mines.
    pub mines: MineDisplay,
}

/// Renders the board centered in `area`, two columns per cell.
pub fn render_board(frame: &mut Frame, area: Rect, view: &BoardView) {
    let field = view.board.field();
    let width = (field.width() as u16) * 2 + 3;
    let height = (field.height() as u16) + 2;
    let board_area = center_rect(area, width, height);

    let mut lines = Vec::new();
    for y in 0..field.height() {
        let mut spans = Vec::new();
        for x in 0..field.width() {
            let (symbol, mut style) = cell_appearance(view, x, y);
            if view.cursor == Some((x, y)) {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(format!("{symbol} "), style));
        }
        lines.push(Line::from(spans));
    }

    let widget =
        Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, board_area);
}

fn cell_appearance(view: &BoardView, x: u32, y: u32) -> (String, Style) {
    let board = view.board;
    let field = board.field();
    let index = field.index_of(x, y);
    let flagged = view.flags.is_some_and(|f| f.contains(&index));

    if board.exploded() == Some(index) {
        return (
            "✕".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        );
    }
    if field.is_mine(x, y) {
        match view.mines {
            MineDisplay::Mine => {
                return ("✕".to_string(), Style::default().fg(Color::Red));
            }
            MineDisplay::Flag => {
                return ("⚑".to_string(), Style::default().fg(Color::Green));
            }
            MineDisplay::Hidden => {}
        }
    }
    if board.is_opened(x, y) {
        return match board.adjacency(x, y) {
            0 => (" ".to_string(), Style::default()),
            n => (n.to_string(), number_style(n)),
        };
    }
    if flagged {
        return ("⚑".to_string(), Style::default().fg(Color::Yellow));
    }
    ("·".to_string(), Style::default().fg(Color::DarkGray))
}

fn number_style(n: u8) -> Style {
    let color = match n {
        1 => Color::Blue,
        2 => Color::Green,
        3 => Color::Red,
        4 => Color::Magenta,
        5 => Color::LightRed,
        _ => Color::Cyan,
    };
    Style::default().fg(color)
}

/// Centers a `width`x`height` rectangle inside `area`.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
