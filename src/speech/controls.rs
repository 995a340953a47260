use super::Speech;

/// Stateless projection of engine state onto the playback buttons.
/// Derived fresh at every query, never cached.
pub struct Controls {
    pub can_play_pause: bool,
    pub can_skip_backwards: bool,
    pub can_skip_forward: bool,
    pub can_open_teleprompter: bool,
    pub play_pause_icon: &'static str,
}

impl Controls {
    pub fn derive(speech: &Speech) -> Self {
        let active = speech
            .vocalization()
            .map(|v| !v.did_finish)
            .unwrap_or(false);
        let has_text = !speech.text().is_empty();

        Controls {
            can_play_pause: has_text || active,
            can_skip_backwards: active,
            can_skip_forward: active,
            can_open_teleprompter: has_text,
            play_pause_icon: match speech.is_speaking() {
                true => "⏸",
                false => "▶",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::SkipUnit;

    #[test]
    fn idle_engine_disables_everything() {
        let controls = Controls::derive(&Speech::new(60));
        assert!(!controls.can_play_pause);
        assert!(!controls.can_skip_backwards);
        assert!(!controls.can_skip_forward);
        assert!(!controls.can_open_teleprompter);
        assert_eq!(controls.play_pause_icon, "▶");
    }

    #[test]
    fn active_vocalization_enables_skipping() {
        let mut speech = Speech::new(60);
        speech.speak("one two three four five".into());

        let controls = Controls::derive(&speech);
        assert!(controls.can_play_pause);
        assert!(controls.can_skip_backwards);
        assert!(controls.can_skip_forward);
        assert!(controls.can_open_teleprompter);
        assert_eq!(controls.play_pause_icon, "⏸");
    }

    #[test]
    fn paused_engine_shows_play_icon() {
        let mut speech = Speech::new(60);
        speech.speak("one two three".into());
        speech.play_pause();
        assert_eq!(Controls::derive(&speech).play_pause_icon, "▶");
    }

    #[test]
    fn finished_vocalization_disables_skipping() {
        let mut speech = Speech::new(60);
        speech.speak("one two three".into());
        speech.skip(SkipUnit::Paragraph, true);

        let controls = Controls::derive(&speech);
        assert!(!controls.can_skip_backwards);
        assert!(!controls.can_skip_forward);
        // Text is still loaded, so playback can start over
        assert!(controls.can_play_pause);
        assert!(controls.can_open_teleprompter);
    }
}
