mod playback_buttons;
mod ui_state;
mod widgets;

pub use playback_buttons::PlaybackButtons;
pub use ui_state::{Mode, UiState};
pub use widgets::{Button, ButtonAction, Menu, MenuItem, ProgressView, TimeLabel};
