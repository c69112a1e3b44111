//! Screen trait and transition type for the client state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;

/// Board configuration collected by the new-game form.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Player display name; may be empty.
    pub player_name: String,
    /// Board side length (boards are square, NxN).
    pub size: u32,
    /// Mine count; the form guarantees `mines < size * size`.
    pub mines: u32,
}

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`GameController`](crate::controller::GameController) state machine.
#[derive(Debug, Clone)]
pub enum ScreenTransition {
    /// Stay on the current screen — no state change.
    Stay,
    /// Navigate to the main menu.
    GoToMenu,
    /// Navigate to the new-game form.
    GoToNewGame,
    /// Navigate to the recorded-games list (fetches it from the server).
    GoToGamesList,
    /// Generate a board, create a session, and start playing.
    StartGame(GameConfig),
    /// Fetch a recorded session and start its timed playback.
    StartReplay {
        /// Id of the session to replay.
        game_id: i32,
    },
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the client state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop; everything that
/// needs the network is expressed as a transition and performed by the
/// controller.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;
}
