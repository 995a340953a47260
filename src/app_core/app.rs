use crate::{
    SAMPLE_TEXT, Settings, key_handler,
    key_handler::Action,
    speech::Speech,
    tui,
    ui_state::{Button, ButtonAction, Mode, PlaybackButtons, UiState},
};
use anyhow::{Context, Result};
use ratatui::crossterm::event::{Event, KeyEventKind};
use std::{
    sync::{Arc, Mutex},
    time::Instant,
};

pub struct Oratus {
    speech: Arc<Mutex<Speech>>,
    ui: UiState,
    buttons: PlaybackButtons,
}

impl Oratus {
    pub fn new() -> Result<Self> {
        let settings = Settings::load();
        let text = match std::env::args().nth(1) {
            Some(path) => std::fs::read_to_string(&path)
                .with_context(|| format!("Could not read \"{path}\""))?,
            None => SAMPLE_TEXT.to_string(),
        };

        Ok(Self::build(settings, text))
    }

    fn build(settings: Settings, text: String) -> Self {
        let speech = Arc::new(Mutex::new(Speech::new(settings.words_per_minute)));
        let ui = UiState::new();

        let mut buttons = PlaybackButtons::new(Arc::clone(&speech), settings.skip_boundary);
        buttons.progress_view = ui.weak_progress_view();
        buttons.play_pause_button = ui.weak_play_pause();
        buttons.skip_forward_button = ui.weak_skip_forward();
        buttons.skip_backwards_button = ui.weak_skip_backwards();
        buttons.teleprompter_button = ui.weak_teleprompter();
        buttons.remaining_time_view = ui.weak_remaining_time();

        let mut app = Oratus {
            speech,
            ui,
            buttons,
        };
        app.initialize_ui();
        app.speech.lock().unwrap().speak(text);
        app
    }

    fn initialize_ui(&mut self) {
        self.buttons.register_events();
        // The controller wires the playback buttons; the teleprompter
        // toggle belongs to the owning layer
        self.ui.teleprompter_button.lock().unwrap().action =
            Some(ButtonAction::OpenTeleprompter);
        self.buttons.update();
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let mut last_tick = Instant::now();

        // MAIN ROUTINE
        loop {
            match key_handler::next_event()? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = key_handler::handle_key_event(key) {
                        self.handle_action(action);
                    }
                }
                _ => (),
            }

            let dt = last_tick.elapsed().as_secs_f64();
            last_tick = Instant::now();

            self.speech.lock().unwrap().tick(dt);
            self.buttons.poll();
            self.ui.step_animations(dt);

            let text = self.speech.lock().unwrap().text().to_string();
            terminal.draw(|f| tui::render(f, &mut self.ui, &text))?;

            if self.ui.get_mode() == Mode::Quit {
                break;
            }
        }

        self.buttons.deregister_events();
        ratatui::restore();

        Ok(())
    }
}

impl Oratus {
    fn handle_action(&mut self, action: Action) {
        let widget = match action {
            Action::QUIT => {
                self.ui.set_mode(Mode::Quit);
                return;
            }
            Action::Restart => {
                self.activate_restart();
                return;
            }
            Action::PlayPause => Arc::clone(&self.ui.play_pause_button),
            Action::SkipAhead => Arc::clone(&self.ui.skip_forward_button),
            Action::SkipBackwards => Arc::clone(&self.ui.skip_backwards_button),
            Action::ToggleTeleprompter => Arc::clone(&self.ui.teleprompter_button),
        };
        self.click_button(&widget);
    }

    /// A key "click" only lands on an enabled button that carries an
    /// action.
    fn click_button(&mut self, widget: &Arc<Mutex<Button>>) {
        let action = {
            let button = widget.lock().unwrap();
            match button.enabled {
                true => button.action,
                false => None,
            }
        };
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    /// Activates the restart entry of the skip-backwards button's menu.
    /// An inert entry (no action assigned) does nothing.
    fn activate_restart(&mut self) {
        let action = {
            let button = self.ui.skip_backwards_button.lock().unwrap();
            button
                .menu
                .as_ref()
                .and_then(|menu| menu.items.first())
                .and_then(|item| item.action)
        };
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    fn dispatch(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::PlayPause => self.buttons.play_pause(),
            ButtonAction::SkipAhead => self.buttons.skip_ahead(),
            ButtonAction::SkipBackwards => self.buttons.skip_backwards(),
            ButtonAction::OpenTeleprompter => self.ui.toggle_teleprompter(),
            ButtonAction::Restart => self.buttons.restart(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(text: &str) -> Oratus {
        Oratus::build(Settings::default(), text.to_string())
    }

    #[test]
    fn space_toggles_playback_through_the_button() {
        let mut app = app("some words to read aloud");
        app.buttons.poll();
        assert!(app.speech.lock().unwrap().is_speaking());

        app.handle_action(Action::PlayPause);
        assert!(!app.speech.lock().unwrap().is_speaking());
    }

    #[test]
    fn disabled_button_swallows_the_click() {
        let mut app = app("");
        app.buttons.poll();
        assert!(!app.ui.play_pause_button.lock().unwrap().enabled);

        app.handle_action(Action::PlayPause);
        assert!(!app.speech.lock().unwrap().is_speaking());
    }

    #[test]
    fn restart_key_is_inert_once_finished() {
        let mut app = app("a few words");
        app.buttons.poll();
        app.speech.lock().unwrap().tick(1000.0);
        app.buttons.poll();

        app.handle_action(Action::Restart);
        assert!(app.speech.lock().unwrap().vocalization().unwrap().did_finish);
    }

    #[test]
    fn restart_key_restarts_mid_playback() {
        let mut app = app(&vec!["word"; 600].join(" "));
        app.buttons.poll();
        app.speech.lock().unwrap().tick(30.0);
        app.buttons.poll();

        app.handle_action(Action::Restart);
        assert_eq!(
            app.speech.lock().unwrap().estimated_progress_seconds(),
            Some(0.0)
        );
    }

    #[test]
    fn teleprompter_key_toggles_the_pane() {
        let mut app = app("visible text");
        app.buttons.poll();
        assert!(!app.ui.teleprompter_open);

        app.handle_action(Action::ToggleTeleprompter);
        assert!(app.ui.teleprompter_open);
        app.handle_action(Action::ToggleTeleprompter);
        assert!(!app.ui.teleprompter_open);
    }

    #[test]
    fn quit_sets_mode() {
        let mut app = app("text");
        app.handle_action(Action::QUIT);
        assert!(app.ui.get_mode() == Mode::Quit);
    }
}
