//! Recorded-games list screen.

use crossterm::event::{KeyCode, KeyEvent};
use minesweeper_server::GameBody;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{info, instrument};

use crate::screen::{Screen, ScreenTransition};

/// List of recorded sessions available for replay.
#[derive(Debug)]
pub struct GamesListScreen {
    games: Vec<GameBody>,
    list_state: ListState,
    error: Option<String>,
}

impl GamesListScreen {
    /// Creates the list over fetched sessions (most recent first, as the
    /// server returns them).
    pub fn new(games: Vec<GameBody>) -> Self {
        let mut state = ListState::default();
        if !games.is_empty() {
            state.select(Some(0));
        }
        Self {
            games,
            list_state: state,
            error: None,
        }
    }

    /// Creates an empty list showing a fetch failure.
    pub fn with_error(message: String) -> Self {
        Self {
            games: Vec::new(),
            list_state: ListState::default(),
            error: Some(message),
        }
    }

    fn select_previous(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => self.games.len() - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.games.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_game(&self) -> Option<&GameBody> {
        self.list_state.selected().and_then(|i| self.games.get(i))
    }

    fn row_label(game: &GameBody) -> String {
        let date = game.created_at.format("%Y-%m-%d %H:%M");
        let player = if game.player_name.is_empty() {
            "(anonymous)"
        } else {
            game.player_name.as_str()
        };
        format!(
            "{date}  {player:<16} {}x{:<3} {}",
            game.width,
            game.height,
            game.outcome.to_uppercase()
        )
    }
}

impl Screen for GamesListScreen {
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

        let title = Paragraph::new("Recorded Games")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        if let Some(message) = &self.error {
            let error = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(error, chunks[1]);
        } else if self.games.is_empty() {
            let empty = Paragraph::new("No recorded games yet")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(empty, chunks[1]);
        } else {
            let items: Vec<ListItem> = self
                .games
                .iter()
                .map(|game| ListItem::new(Self::row_label(game)))
                .collect();
            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title("Sessions"))
                .highlight_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");
            let mut list_state = self.list_state.clone();
            frame.render_stateful_widget(list, chunks[1], &mut list_state);
        }

        let help = Paragraph::new("↑↓: Navigate | Enter: Replay | r: Refresh | Esc: Back")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => match self.selected_game() {
                Some(game) => {
                    info!(game_id = game.id, "Replay selected");
                    ScreenTransition::StartReplay { game_id: game.id }
                }
                None => ScreenTransition::Stay,
            },
            KeyCode::Char('r') | KeyCode::Char('R') => ScreenTransition::GoToGamesList,
            KeyCode::Esc | KeyCode::Char('q') => ScreenTransition::GoToMenu,
            _ => ScreenTransition::Stay,
        }
    }
}
