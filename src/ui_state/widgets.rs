/// Click targets a widget can be wired to. A widget with no action
/// assigned is present but inert.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonAction {
    PlayPause,
    SkipAhead,
    SkipBackwards,
    OpenTeleprompter,
    Restart,
}

pub struct Button {
    pub title: String,
    pub enabled: bool,
    pub action: Option<ButtonAction>,
    pub menu: Option<Menu>,
}

impl Button {
    pub fn new(title: &str) -> Self {
        Button {
            title: title.to_string(),
            enabled: false,
            action: None,
            menu: None,
        }
    }
}

pub struct Menu {
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn new() -> Self {
        Menu { items: Vec::new() }
    }

    pub fn add_item(&mut self, item: MenuItem) {
        self.items.push(item);
    }
}

pub struct MenuItem {
    pub title: String,
    pub action: Option<ButtonAction>,
}

impl MenuItem {
    pub fn new(title: &str) -> Self {
        MenuItem {
            title: title.to_string(),
            action: None,
        }
    }
}

pub struct ProgressView {
    pub fill: f64,
    pub hidden: bool,
    pub animated: bool,
}

impl ProgressView {
    pub fn new() -> Self {
        ProgressView {
            fill: 0.0,
            hidden: true,
            animated: true,
        }
    }
}

/// A label hidden by opacity rather than layout, so it can fade in
/// without shifting its neighbors.
pub struct TimeLabel {
    pub text: String,
    pub hidden: bool,
    pub alpha: f64,
    alpha_target: f64,
}

const FADE_PER_SECOND: f64 = 4.0;

impl TimeLabel {
    pub fn new() -> Self {
        TimeLabel {
            text: String::new(),
            hidden: true,
            alpha: 0.0,
            alpha_target: 0.0,
        }
    }

    pub fn fade_in(&mut self) {
        self.alpha_target = 1.0;
    }

    pub fn set_transparent(&mut self) {
        self.alpha = 0.0;
        self.alpha_target = 0.0;
    }

    pub fn step_fade(&mut self, dt: f64) {
        if self.alpha < self.alpha_target {
            self.alpha = (self.alpha + FADE_PER_SECOND * dt).min(self.alpha_target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_steps_toward_target() {
        let mut label = TimeLabel::new();
        label.fade_in();
        label.step_fade(0.1);
        assert!(label.alpha > 0.0 && label.alpha < 1.0);
        label.step_fade(10.0);
        assert_eq!(label.alpha, 1.0);
    }

    #[test]
    fn set_transparent_cancels_fade() {
        let mut label = TimeLabel::new();
        label.fade_in();
        label.step_fade(0.1);
        label.set_transparent();
        label.step_fade(10.0);
        assert_eq!(label.alpha, 0.0);
    }
}
