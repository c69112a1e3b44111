//! Screens of the client state machine.

mod games_list;
mod in_game;
mod menu;
mod new_game;
mod replay;

pub use games_list::GamesListScreen;
pub use in_game::InGameScreen;
pub use menu::MenuScreen;
pub use new_game::NewGameScreen;
pub use replay::ReplayScreen;
