use super::{Button, ProgressView, TimeLabel};
use std::sync::{Arc, Mutex, Weak};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Running,
    Quit,
}

/// Owns the widget state the renderer draws. The playback-buttons
/// controller only ever holds weak handles to these, handed out by the
/// downgrade accessors below.
pub struct UiState {
    pub progress_view: Arc<Mutex<ProgressView>>,
    pub play_pause_button: Arc<Mutex<Button>>,
    pub skip_forward_button: Arc<Mutex<Button>>,
    pub skip_backwards_button: Arc<Mutex<Button>>,
    pub teleprompter_button: Arc<Mutex<Button>>,
    pub remaining_time: Arc<Mutex<TimeLabel>>,

    pub teleprompter_open: bool,
    mode: Mode,
}

impl UiState {
    pub fn new() -> Self {
        UiState {
            progress_view: Arc::new(Mutex::new(ProgressView::new())),
            play_pause_button: Arc::new(Mutex::new(Button::new("▶"))),
            skip_forward_button: Arc::new(Mutex::new(Button::new("⏭"))),
            skip_backwards_button: Arc::new(Mutex::new(Button::new("⏮"))),
            teleprompter_button: Arc::new(Mutex::new(Button::new("☰"))),
            remaining_time: Arc::new(Mutex::new(TimeLabel::new())),
            teleprompter_open: false,
            mode: Mode::Running,
        }
    }

    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn toggle_teleprompter(&mut self) {
        self.teleprompter_open = !self.teleprompter_open;
    }

    pub fn step_animations(&mut self, dt: f64) {
        self.remaining_time.lock().unwrap().step_fade(dt);
    }

    pub fn weak_progress_view(&self) -> Weak<Mutex<ProgressView>> {
        Arc::downgrade(&self.progress_view)
    }

    pub fn weak_play_pause(&self) -> Weak<Mutex<Button>> {
        Arc::downgrade(&self.play_pause_button)
    }

    pub fn weak_skip_forward(&self) -> Weak<Mutex<Button>> {
        Arc::downgrade(&self.skip_forward_button)
    }

    pub fn weak_skip_backwards(&self) -> Weak<Mutex<Button>> {
        Arc::downgrade(&self.skip_backwards_button)
    }

    pub fn weak_teleprompter(&self) -> Weak<Mutex<Button>> {
        Arc::downgrade(&self.teleprompter_button)
    }

    pub fn weak_remaining_time(&self) -> Weak<Mutex<TimeLabel>> {
        Arc::downgrade(&self.remaining_time)
    }
}
