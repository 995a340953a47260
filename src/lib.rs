pub mod app_core;
pub mod config;
pub mod key_handler;
pub mod speech;
pub mod tui;
pub mod ui_state;

pub use config::Settings;
pub use speech::Speech;
pub use ui_state::UiState;

// ~30fps
pub const REFRESH_RATE: u64 = 33;

pub const SAMPLE_TEXT: &str = "Welcome to oratus. Open a text file by passing its path \
as the first argument. Press space to pause or resume, and use the skip keys to move \
through the document one boundary at a time. The teleprompter shows the full text \
while it is being read aloud.";
