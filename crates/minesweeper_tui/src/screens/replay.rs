//! Timed playback of a recorded session.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use minesweeper_core::Replay;
use minesweeper_server::GameBody;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument};

use crate::screen::{Screen, ScreenTransition};
use crate::ui::{BoardView, MineDisplay, render_board};

/// Cadence between replayed moves.
pub const REPLAY_PERIOD: Duration = Duration::from_millis(500);

/// Fixed-interval cancellation handle driving the playback.
///
/// The controller must call [`cancel`](ReplayTimer::cancel) whenever the
/// replay screen is left, so no pending tick outlives the screen.
#[derive(Debug, Clone, Copy)]
pub struct ReplayTimer {
    period: Duration,
    next_fire: Option<Instant>,
}

impl ReplayTimer {
    /// Starts a timer that first fires one period from `now`.
    pub fn start(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_fire: Some(now + period),
        }
    }

    /// Returns true when the timer fires, rescheduling the next tick.
    /// A cancelled timer never fires again.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_fire {
            Some(at) if now >= at => {
                self.next_fire = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// Stops the timer permanently.
    pub fn cancel(&mut self) {
        self.next_fire = None;
    }
}

/// Playback screen for one recorded session.
#[derive(Debug)]
pub struct ReplayScreen {
    game: GameBody,
    replay: Replay,
    timer: ReplayTimer,
    current_move: i32,
}

impl ReplayScreen {
    /// Creates the playback over a fetched session. A session without
    /// moves finishes immediately.
    pub fn new(game: GameBody, replay: Replay, now: Instant) -> Self {
        let mut timer = ReplayTimer::start(REPLAY_PERIOD, now);
        if replay.is_finished() {
            timer.cancel();
        }
        Self {
            game,
            replay,
            timer,
            current_move: 0,
        }
    }

    /// Advances the playback if the cadence timer fired.
    #[instrument(skip(self, now))]
    pub fn tick(&mut self, now: Instant) {
        if !self.timer.poll(now) {
            return;
        }
        match self.replay.step() {
            Some(mv) => {
                self.current_move = mv.move_number;
                debug!(move_number = mv.move_number, "Replay advanced");
            }
            None => self.timer.cancel(),
        }
        if self.replay.is_finished() {
            self.timer.cancel();
        }
    }

    /// Cancels the playback timer. Called by the controller on every
    /// navigation away from this screen.
    pub fn stop(&mut self) {
        self.timer.cancel();
    }

    fn status_line(&self) -> (String, Color) {
        if self.replay.is_finished() {
            (
                format!("REPLAY FINISHED — {}", self.game.outcome.to_uppercase()),
                Color::Cyan,
            )
        } else {
            ("REPLAY".to_string(), Color::White)
        }
    }
}

impl Screen for ReplayScreen {
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
        let player = if self.game.player_name.is_empty() {
            "(anonymous)"
        } else {
            self.game.player_name.as_str()
        };
        let header = Paragraph::new(format!(
            "{}   {}   {}x{}   Move: {}/{}",
            status,
            player,
            self.game.width,
            self.game.height,
            self.current_move,
            self.replay.moves().len()
        ))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let mines = if self.replay.board().exploded().is_some() {
            MineDisplay::Mine
        } else {
            MineDisplay::Hidden
        };
        render_board(
            frame,
            chunks[1],
            &BoardView {
                board: self.replay.board(),
                flags: None,
                cursor: None,
                mines,
            },
        );

        let help = Paragraph::new("Esc: Back to list")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => ScreenTransition::GoToGamesList,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_fires_once_per_period() {
        let start = Instant::now();
        let mut timer = ReplayTimer::start(Duration::from_millis(500), start);
        assert!(!timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(499)));
        assert!(timer.poll(start + Duration::from_millis(500)));
        // Rescheduled relative to the fire time.
        assert!(!timer.poll(start + Duration::from_millis(600)));
        assert!(timer.poll(start + Duration::from_millis(1_001)));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut timer = ReplayTimer::start(Duration::from_millis(500), start);
        timer.cancel();
        assert!(!timer.poll(start + Duration::from_secs(10)));
        assert!(!timer.poll(start + Duration::from_secs(20)));
    }
}
