use crate::REFRESH_RATE;
use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use KeyCode::*;

const X: KeyModifiers = KeyModifiers::NONE;
const C: KeyModifiers = KeyModifiers::CONTROL;

/// User intents. Playback intents are routed through the widget they
/// "click", so a disabled or unwired button swallows the key.
#[derive(PartialEq, Eq, Debug)]
pub enum Action {
    PlayPause,
    SkipAhead,
    SkipBackwards,
    Restart,
    ToggleTeleprompter,
    QUIT,
}

pub fn handle_key_event(key: KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (C, Char('c')) => Some(Action::QUIT),
        (X, Char('q')) | (X, Esc) => Some(Action::QUIT),

        (X, Char(' ')) => Some(Action::PlayPause),
        (X, Char('l')) | (X, Right) => Some(Action::SkipAhead),
        (X, Char('h')) | (X, Left) => Some(Action::SkipBackwards),
        (X, Char('r')) => Some(Action::Restart),
        (X, Char('t')) => Some(Action::ToggleTeleprompter),

        _ => None,
    }
}

pub fn next_event() -> Result<Option<Event>> {
    match event::poll(Duration::from_millis(REFRESH_RATE))? {
        true => Ok(Some(event::read()?)),
        false => Ok(None),
    }
}
