use super::{ControlsRow, ProgressGauge, RemainingTime, Teleprompter};
use crate::ui_state::UiState;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::StatefulWidget,
};

pub fn render(f: &mut Frame, state: &mut UiState, text: &str) {
    let [body, progress, controls] = get_layout(f.area());

    if state.teleprompter_open {
        f.render_widget(Teleprompter(text), body);
    }

    ProgressGauge.render(progress, f.buffer_mut(), state);
    RemainingTime.render(progress, f.buffer_mut(), state);
    ControlsRow.render(controls, f.buffer_mut(), state);
}

fn get_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas::<3>(area)
}
