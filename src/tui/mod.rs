mod renderer;
mod widgets;

pub use renderer::render;
pub use widgets::{ControlsRow, ProgressGauge, RemainingTime, Teleprompter};
