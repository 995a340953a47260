use super::{Button, ButtonAction, Menu, MenuItem, ProgressView, TimeLabel};
use crate::speech::{Channel, Controls, SkipUnit, Speech, SubscriberId};
use crossbeam_channel::{Receiver, unbounded};
use std::sync::{Arc, Mutex, Weak};

/// Binds the playback buttons and progress indicator to a speech engine.
///
/// The controller owns its engine handle but only holds weak handles to
/// the widgets; any widget may be gone at any moment, and every mutation
/// silently no-ops when its target is absent. `register_events` and
/// `deregister_events` bracket the active subscription period.
pub struct PlaybackButtons {
    speech: Arc<Mutex<Speech>>,
    skip_boundary: SkipUnit,

    pub progress_view: Weak<Mutex<ProgressView>>,
    pub play_pause_button: Weak<Mutex<Button>>,
    pub skip_forward_button: Weak<Mutex<Button>>,
    pub skip_backwards_button: Weak<Mutex<Button>>,
    pub teleprompter_button: Weak<Mutex<Button>>,
    pub remaining_time_view: Weak<Mutex<TimeLabel>>,

    subscriber: Option<SubscriberId>,
    notifications: Option<Receiver<Channel>>,
}

impl PlaybackButtons {
    pub fn new(speech: Arc<Mutex<Speech>>, skip_boundary: SkipUnit) -> Self {
        PlaybackButtons {
            speech,
            skip_boundary,
            progress_view: Weak::new(),
            play_pause_button: Weak::new(),
            skip_forward_button: Weak::new(),
            skip_backwards_button: Weak::new(),
            teleprompter_button: Weak::new(),
            remaining_time_view: Weak::new(),
            subscriber: None,
            notifications: None,
        }
    }

    /// Subscribes to the engine's notification channels and wires the
    /// three playback buttons' click actions. The teleprompter button is
    /// enabled-managed here but wired by the owning layer.
    pub fn register_events(&mut self) {
        let (tx, rx) = unbounded();
        {
            let mut speech = self.speech.lock().unwrap();
            let id = speech.issue_subscriber_id();
            for channel in [
                Channel::ProgressChanged,
                Channel::TotalDurationChanged,
                Channel::IsSpeakingChanged,
            ] {
                speech.subscribe(id, channel, tx.clone());
            }
            self.subscriber = Some(id);
        }
        self.notifications = Some(rx);

        if let Some(button) = self.play_pause_button.upgrade() {
            button.lock().unwrap().action = Some(ButtonAction::PlayPause);
        }
        if let Some(button) = self.skip_forward_button.upgrade() {
            button.lock().unwrap().action = Some(ButtonAction::SkipAhead);
        }
        if let Some(button) = self.skip_backwards_button.upgrade() {
            button.lock().unwrap().action = Some(ButtonAction::SkipBackwards);
        }
    }

    /// Removes every registration made by `register_events`. Safe to call
    /// when nothing was ever registered.
    pub fn deregister_events(&mut self) {
        if let Some(id) = self.subscriber.take() {
            self.speech.lock().unwrap().unsubscribe(id);
        }
        self.notifications = None;
    }

    /// Drains pending notifications, re-rendering once per delivery.
    pub fn poll(&self) {
        let Some(rx) = &self.notifications else {
            return;
        };
        let pending = rx.try_iter().count();
        for _ in 0..pending {
            self.update();
        }
    }

    /// The sole rendering routine: re-derives every widget's state from
    /// the engine snapshot.
    pub fn update(&self) {
        let (controls, percent, active, unfinished) = {
            let speech = self.speech.lock().unwrap();
            let active = speech.vocalization().is_some();
            let unfinished = speech
                .vocalization()
                .map(|v| !v.did_finish)
                .unwrap_or(false);
            (
                Controls::derive(&speech),
                speech.progress().percent,
                active,
                unfinished,
            )
        };

        if let Some(button) = self.play_pause_button.upgrade() {
            let mut button = button.lock().unwrap();
            button.title = controls.play_pause_icon.to_string();
            button.enabled = controls.can_play_pause;
        }
        if let Some(button) = self.skip_forward_button.upgrade() {
            button.lock().unwrap().enabled = controls.can_skip_forward;
        }
        if let Some(button) = self.teleprompter_button.upgrade() {
            button.lock().unwrap().enabled = controls.can_open_teleprompter;
        }

        // The menu is rebuilt on every render so its restart entry tracks
        // the current skip-backwards state.
        if let Some(button) = self.skip_backwards_button.upgrade() {
            let menu = self.backwards_button_menu();
            let mut button = button.lock().unwrap();
            button.enabled = controls.can_skip_backwards;
            button.menu = Some(menu);
        }

        if let Some(view) = self.progress_view.upgrade() {
            let mut view = view.lock().unwrap();
            if view.hidden {
                // Snap back to empty so reappearing never animates from
                // a stale fill
                view.animated = false;
                view.fill = 0.0;
                view.animated = true;
            }
            view.fill = percent;
            view.hidden = !active || percent == 1.0;
        }

        match (self.total_duration_text(), self.remaining_time_view.upgrade()) {
            (Some(text), Some(view)) if unfinished => {
                let mut view = view.lock().unwrap();
                view.text = text;
                view.hidden = false;
                if view.alpha == 0.0 {
                    view.fade_in();
                }
            }
            (_, Some(view)) => view.lock().unwrap().set_transparent(),
            _ => (),
        }
    }

    pub fn total_duration_text(&self) -> Option<String> {
        let speech = self.speech.lock().unwrap();
        let duration = speech.total_duration()?;
        let progress_seconds = speech.estimated_progress_seconds()?;

        let minutes = (duration - progress_seconds) / 60.0;
        match minutes < 1.0 {
            true => Some("< 1m left".to_string()),
            false => Some(format!("{}m left", minutes.ceil() as u64)),
        }
    }

    /// Fresh one-item context menu for the skip-backwards button. The
    /// restart entry only carries an action while skipping backwards is
    /// permitted; otherwise it is present but inert.
    pub fn backwards_button_menu(&self) -> Menu {
        let mut menu = Menu::new();
        let mut restart = MenuItem::new("Restart");
        if Controls::derive(&self.speech.lock().unwrap()).can_skip_backwards {
            restart.action = Some(ButtonAction::Restart);
        }
        menu.add_item(restart);
        menu
    }
}

// ===================
//   Click handlers
// =================
impl PlaybackButtons {
    pub fn restart(&self) {
        let mut speech = self.speech.lock().unwrap();
        let text = speech.text().to_string();
        speech.speak(text);
    }

    pub fn play_pause(&self) {
        self.speech.lock().unwrap().play_pause();
    }

    pub fn skip_ahead(&self) {
        self.speech.lock().unwrap().skip(self.skip_boundary, true);
    }

    pub fn skip_backwards(&self) {
        self.speech.lock().unwrap().skip(SkipUnit::Sentence, false);
    }
}
