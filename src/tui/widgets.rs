use crate::ui_state::{Button, UiState};
use ratatui::{
    layout::Rect,
    prelude::Buffer,
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, LineGauge, Padding, Paragraph, StatefulWidget, Widget, Wrap},
};
use std::sync::Mutex;

const TIME_WIDTH: u16 = 12;

/// One row of playback buttons, disabled ones dimmed.
pub struct ControlsRow;

impl StatefulWidget for ControlsRow {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let spans = [
            button_span(&state.skip_backwards_button),
            button_span(&state.play_pause_button),
            button_span(&state.skip_forward_button),
            button_span(&state.teleprompter_button),
        ];

        Line::from_iter(spans.into_iter().flat_map(|s| [s, Span::raw("  ")]))
            .centered()
            .render(area, buf);
    }
}

fn button_span(button: &Mutex<Button>) -> Span<'static> {
    let button = button.lock().unwrap();
    let style = match button.enabled {
        true => Style::new().fg(Color::White),
        false => Style::new().fg(Color::DarkGray).dim(),
    };
    Span::styled(button.title.clone(), style)
}

pub struct ProgressGauge;

impl StatefulWidget for ProgressGauge {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let view = state.progress_view.lock().unwrap();
        if view.hidden {
            return;
        }

        // The gauge chokes on a full ratio; a finished bar is hidden anyway
        let ratio = match view.fill {
            f if (0.0..1.0).contains(&f) => f,
            _ => 0.0,
        };

        LineGauge::default()
            .block(Block::new().padding(Padding {
                left: 2,
                right: TIME_WIDTH + 1,
                top: 0,
                bottom: 0,
            }))
            .filled_style(Style::new().fg(Color::Red))
            .unfilled_style(Style::new().fg(Color::DarkGray))
            .label("")
            .ratio(ratio)
            .render(area, buf);
    }
}

/// Remaining-time readout, drawn at the right edge of the progress row.
/// Opacity maps onto terminal emphasis: invisible, dim, or plain.
pub struct RemainingTime;

impl StatefulWidget for RemainingTime {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let label = state.remaining_time.lock().unwrap();
        if label.hidden || label.alpha <= 0.0 {
            return;
        }

        let style = match label.alpha < 1.0 {
            true => Style::new().fg(Color::DarkGray).dim(),
            false => Style::new().fg(Color::Gray),
        };

        let x_pos = area.right().saturating_sub(TIME_WIDTH);
        Text::styled(label.text.clone(), style)
            .right_aligned()
            .render(Rect::new(x_pos, area.y, TIME_WIDTH.min(area.width), 1), buf);
    }
}

pub struct Teleprompter<'a>(pub &'a str);

impl Widget for Teleprompter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.0)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title(" Teleprompter ")
                    .border_style(Style::new().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}
