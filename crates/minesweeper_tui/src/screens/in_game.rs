//! Live play screen: reveals cells locally and streams moves to the server.

use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent};
use minesweeper_core::{BoardState, MoveResult, Outcome, Reveal};
use minesweeper_server::StepBody;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{info, instrument};

use crate::screen::{Screen, ScreenTransition};
use crate::ui::{BoardView, MineDisplay, render_board};

/// Whether the session is still being played or has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayPhase {
    Playing,
    Over(Outcome),
}

/// State for one live play-through.
///
/// The board lives entirely on this side; each reveal is classified
/// (`ok`/`explode`/`win`) and queued for the controller to stream to
/// `/step/{id}` after the key is handled.
#[derive(Debug)]
pub struct InGameScreen {
    game_id: i32,
    player_name: String,
    board: BoardState,
    flags: HashSet<u32>,
    cursor: (u32, u32),
    move_number: i32,
    phase: PlayPhase,
    pending: Vec<StepBody>,
}

impl InGameScreen {
    /// Creates the play screen over a fresh board and its created session.
    pub fn new(game_id: i32, player_name: String, board: BoardState) -> Self {
        Self {
            game_id,
            player_name,
            board,
            flags: HashSet::new(),
            cursor: (0, 0),
            move_number: 0,
            phase: PlayPhase::Playing,
            pending: Vec::new(),
        }
    }

    /// Id of the session this screen records into.
    pub fn game_id(&self) -> i32 {
        self.game_id
    }

    /// Drains the moves queued since the last call, oldest first.
    pub fn take_pending(&mut self) -> Vec<StepBody> {
        std::mem::take(&mut self.pending)
    }

    fn move_cursor(&mut self, dx: i64, dy: i64) {
        let field = self.board.field();
        let x = (self.cursor.0 as i64 + dx).clamp(0, field.width() as i64 - 1);
        let y = (self.cursor.1 as i64 + dy).clamp(0, field.height() as i64 - 1);
        self.cursor = (x as u32, y as u32);
    }

    fn toggle_flag(&mut self) {
        let (x, y) = self.cursor;
        if self.board.is_opened(x, y) {
            return;
        }
        let index = self.board.field().index_of(x, y);
        if !self.flags.remove(&index) {
            self.flags.insert(index);
        }
    }

    /// Reveals the cursor cell, classifies the move, and queues it for
    /// recording. Flagged and opened cells are ignored.
    fn reveal_cursor(&mut self) {
        let (x, y) = self.cursor;
        let index = self.board.field().index_of(x, y);
        if self.flags.contains(&index) {
            return;
        }

        let result = match self.board.reveal(x, y) {
            Reveal::Exploded => MoveResult::Explode,
            Reveal::Opened { .. } if self.board.is_won() => MoveResult::Win,
            Reveal::Opened { .. } => MoveResult::Ok,
            Reveal::Ignored => return,
        };

        self.move_number += 1;
        self.pending.push(StepBody {
            move_number: self.move_number,
            x: x as i32,
            y: y as i32,
            result: result.as_str().to_string(),
        });

        if let Some(outcome) = Outcome::from_terminal(result) {
            info!(game_id = self.game_id, outcome = outcome.as_str(), "Game over");
            self.phase = PlayPhase::Over(outcome);
        }
    }

    fn status_line(&self) -> (String, Color) {
        match self.phase {
            PlayPhase::Playing => ("PLAYING".to_string(), Color::White),
            PlayPhase::Over(Outcome::Win) => ("WINNER".to_string(), Color::Green),
            PlayPhase::Over(_) => ("GAME OVER".to_string(), Color::Red),
        }
    }
}

impl Screen for InGameScreen {
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let (status, color) = self.status_line();
        let field = self.board.field();
        let header = Paragraph::new(format!(
            "{}   {}   {}x{}, {} mines   Move: {}",
            status,
            self.player_name,
            field.width(),
            field.height(),
            field.mines_count(),
            self.move_number
        ))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let mines = match self.phase {
            PlayPhase::Playing => MineDisplay::Hidden,
            PlayPhase::Over(Outcome::Win) => MineDisplay::Flag,
            PlayPhase::Over(_) => MineDisplay::Mine,
        };
        render_board(
            frame,
            chunks[1],
            &BoardView {
                board: &self.board,
                flags: Some(&self.flags),
                cursor: Some(self.cursor),
                mines,
            },
        );

        let help = Paragraph::new("↑↓←→: Move | Space/Enter: Reveal | f: Flag | Esc: Menu")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        if let PlayPhase::Over(_) = self.phase {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => ScreenTransition::GoToMenu,
                _ => ScreenTransition::Stay,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(0, 1),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1, 0),
            KeyCode::Char('f') => self.toggle_flag(),
            KeyCode::Char(' ') | KeyCode::Enter => self.reveal_cursor(),
            KeyCode::Esc => return ScreenTransition::GoToMenu,
            _ => {}
        }
        ScreenTransition::Stay
    }
}
