//! New-game form screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{info, instrument};

use crate::screen::{GameConfig, Screen, ScreenTransition};

const FIELD_COUNT: usize = 3;

/// Form screen collecting the board configuration.
///
/// The `mines < size * size` bound is enforced here, before anything is
/// sent to the server — the generator cannot terminate past it and the
/// server does not re-check it.
#[derive(Debug)]
pub struct NewGameScreen {
    player_name: String,
    size: String,
    mines: String,
    focus: usize,
    error: Option<String>,
}

impl NewGameScreen {
    /// Creates the form with the defaults the original client used.
    pub fn new() -> Self {
        Self {
            player_name: "Anon".to_string(),
            size: "10".to_string(),
            mines: "10".to_string(),
            focus: 0,
            error: None,
        }
    }

    /// Shows a server/network failure on the form.
    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    fn focused_field(&mut self) -> &mut String {
        match self.focus {
            0 => &mut self.player_name,
            1 => &mut self.size,
            _ => &mut self.mines,
        }
    }

    fn validate(&self) -> Result<GameConfig, String> {
        let size: u32 = self
            .size
            .trim()
            .parse()
            .map_err(|_| "Board size must be a number".to_string())?;
        let mines: u32 = self
            .mines
            .trim()
            .parse()
            .map_err(|_| "Mine count must be a number".to_string())?;
        if size < 2 {
            return Err("Board size must be at least 2".to_string());
        }
        if mines == 0 {
            return Err("At least one mine is required".to_string());
        }
        if mines >= size * size {
            return Err("Too many mines for that board".to_string());
        }
        Ok(GameConfig {
            player_name: self.player_name.trim().to_string(),
            size,
            mines,
        })
    }

    fn render_field(&self, frame: &mut Frame, area: ratatui::layout::Rect, idx: usize) {
        let (label, value) = match idx {
            0 => ("Player name", &self.player_name),
            1 => ("Board size", &self.size),
            _ => ("Mines", &self.mines),
        };
        let style = if self.focus == idx {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let field = Paragraph::new(value.as_str())
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(label));
        frame.render_widget(field, area);
    }
}

impl Default for NewGameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for NewGameScreen {
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let title = Paragraph::new("New Game")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        for idx in 0..FIELD_COUNT {
            self.render_field(frame, chunks[idx + 1], idx);
        }

        let footer = match &self.error {
            Some(message) => Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            None => Paragraph::new("Tab: Next field | Enter: Start | Esc: Back")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
        };
        frame.render_widget(footer, chunks[4]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % FIELD_COUNT;
                ScreenTransition::Stay
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
                ScreenTransition::Stay
            }
            KeyCode::Char(c) => {
                self.focused_field().push(c);
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.focused_field().pop();
                ScreenTransition::Stay
            }
            KeyCode::Enter => match self.validate() {
                Ok(config) => {
                    info!(size = config.size, mines = config.mines, "Starting new game");
                    self.error = None;
                    ScreenTransition::StartGame(config)
                }
                Err(message) => {
                    self.error = Some(message);
                    ScreenTransition::Stay
                }
            },
            KeyCode::Esc => ScreenTransition::GoToMenu,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mine_count_filling_the_board() {
        let mut form = NewGameScreen::new();
        form.size = "4".to_string();
        form.mines = "16".to_string();
        assert!(form.validate().is_err());
        form.mines = "15".to_string();
        let config = form.validate().expect("15 mines fit a 4x4 board");
        assert_eq!(config.mines, 15);
    }

    #[test]
    fn rejects_non_numeric_input() {
        let mut form = NewGameScreen::new();
        form.size = "big".to_string();
        assert!(form.validate().is_err());
    }
}
