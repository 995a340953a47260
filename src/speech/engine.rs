use super::{Channel, Notifier, SkipUnit, SubscriberId, Vocalization};
use crossbeam_channel::Sender;

/// Fraction of the current vocalization that has been read out.
pub struct Progress {
    pub percent: f64,
}

/// The playback engine. Progress through the text is estimated from a
/// words-per-minute pacing clock driven by `tick`; there is no audio
/// pipeline behind this model.
pub struct Speech {
    text: String,
    total_duration: Option<f64>,
    vocalization: Option<Vocalization>,
    words_per_minute: u64,
    notifier: Notifier,
}

impl Speech {
    pub fn new(words_per_minute: u64) -> Self {
        Speech {
            text: String::new(),
            total_duration: None,
            vocalization: None,
            words_per_minute: words_per_minute.max(1),
            notifier: Notifier::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn total_duration(&self) -> Option<f64> {
        self.total_duration
    }

    pub fn estimated_progress_seconds(&self) -> Option<f64> {
        self.vocalization.as_ref().map(|v| v.elapsed)
    }

    pub fn vocalization(&self) -> Option<&Vocalization> {
        self.vocalization.as_ref()
    }

    pub fn is_speaking(&self) -> bool {
        self.vocalization
            .as_ref()
            .map(|v| v.is_speaking && !v.did_finish)
            .unwrap_or(false)
    }

    pub fn progress(&self) -> Progress {
        let percent = match (&self.vocalization, self.total_duration) {
            (Some(v), _) if v.did_finish => 1.0,
            (Some(v), Some(total)) if total > 0.0 => (v.elapsed / total).clamp(0.0, 1.0),
            _ => 0.0,
        };
        Progress { percent }
    }
}

// ===============
//    Mutators
// =============
impl Speech {
    /// Starts a fresh vocalization of `text` from the top.
    pub fn speak(&mut self, text: String) {
        let words = text.split_whitespace().count() as u64;

        self.text = text;
        self.total_duration = match words {
            0 => None,
            _ => Some(words as f64 * 60.0 / self.words_per_minute as f64),
        };
        // Nothing to vocalize in an empty text
        self.vocalization = match words {
            0 => None,
            _ => Some(Vocalization::new()),
        };

        self.notifier.post(Channel::TotalDurationChanged);
        self.notifier.post(Channel::IsSpeakingChanged);
        self.notifier.post(Channel::ProgressChanged);
    }

    /// Toggles the active vocalization. With nothing active (never spoken,
    /// or the last utterance ran out) a non-empty text starts over.
    pub fn play_pause(&mut self) {
        match &mut self.vocalization {
            Some(v) if !v.did_finish => {
                v.is_speaking = !v.is_speaking;
                self.notifier.post(Channel::IsSpeakingChanged);
            }
            _ if !self.text.is_empty() => {
                let text = std::mem::take(&mut self.text);
                self.speak(text);
            }
            _ => (),
        }
    }

    /// Moves the estimated position by one `unit`, clamped to the
    /// vocalization's bounds. Running past the end finishes it.
    pub fn skip(&mut self, unit: SkipUnit, forward: bool) {
        let Some(total) = self.total_duration else {
            return;
        };
        let delta = unit.estimated_seconds(self.words_per_minute);

        let finished = match &mut self.vocalization {
            Some(v) if !v.did_finish => {
                v.elapsed = match forward {
                    true => (v.elapsed + delta).min(total),
                    false => (v.elapsed - delta).max(0.0),
                };
                if v.elapsed >= total {
                    v.finish();
                }
                v.did_finish
            }
            _ => return,
        };

        if finished {
            self.notifier.post(Channel::IsSpeakingChanged);
        }
        self.notifier.post(Channel::ProgressChanged);
    }

    /// Advances the pacing clock while the engine is speaking.
    pub fn tick(&mut self, dt: f64) {
        let Some(total) = self.total_duration else {
            return;
        };

        let finished = match &mut self.vocalization {
            Some(v) if v.is_speaking && !v.did_finish => {
                v.elapsed = (v.elapsed + dt).min(total);
                if v.elapsed >= total {
                    v.finish();
                }
                v.did_finish
            }
            _ => return,
        };

        if finished {
            self.notifier.post(Channel::IsSpeakingChanged);
        }
        self.notifier.post(Channel::ProgressChanged);
    }
}

// ===============
//   Observers
// =============
impl Speech {
    pub fn issue_subscriber_id(&mut self) -> SubscriberId {
        self.notifier.issue_id()
    }

    pub fn subscribe(&mut self, id: SubscriberId, channel: Channel, sender: Sender<Channel>) {
        self.notifier.subscribe(id, channel, sender);
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.notifier.unsubscribe(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    // At 60wpm every word is worth exactly one second.
    fn spoken(words: usize) -> Speech {
        let mut speech = Speech::new(60);
        speech.speak(vec!["word"; words].join(" "));
        speech
    }

    #[test]
    fn speak_derives_duration_from_pace() {
        let speech = spoken(120);
        assert_eq!(speech.total_duration(), Some(120.0));
        assert_eq!(speech.estimated_progress_seconds(), Some(0.0));
        assert!(speech.is_speaking());
    }

    #[test]
    fn empty_text_has_no_duration() {
        let mut speech = Speech::new(60);
        speech.speak(String::new());
        assert!(speech.total_duration().is_none());
        assert!(speech.vocalization().is_none());
        assert_eq!(speech.progress().percent, 0.0);
    }

    #[test]
    fn tick_advances_and_finishes() {
        let mut speech = spoken(10);
        speech.tick(4.0);
        assert_eq!(speech.estimated_progress_seconds(), Some(4.0));
        assert_eq!(speech.progress().percent, 0.4);

        speech.tick(100.0);
        let vocal = speech.vocalization().unwrap();
        assert!(vocal.did_finish);
        assert!(!vocal.is_speaking);
        assert_eq!(speech.progress().percent, 1.0);
    }

    #[test]
    fn tick_is_inert_while_paused() {
        let mut speech = spoken(10);
        speech.play_pause();
        speech.tick(5.0);
        assert_eq!(speech.estimated_progress_seconds(), Some(0.0));
    }

    #[test]
    fn skip_clamps_at_zero() {
        let mut speech = spoken(600);
        speech.tick(3.0);
        speech.skip(SkipUnit::Sentence, false);
        assert_eq!(speech.estimated_progress_seconds(), Some(0.0));
    }

    #[test]
    fn skip_past_end_finishes_vocalization() {
        let mut speech = spoken(10);
        speech.skip(SkipUnit::Paragraph, true);
        assert!(speech.vocalization().unwrap().did_finish);
        assert_eq!(speech.progress().percent, 1.0);
    }

    #[test]
    fn play_pause_toggles_and_restarts_after_finish() {
        let mut speech = spoken(10);
        speech.play_pause();
        assert!(!speech.is_speaking());
        speech.play_pause();
        assert!(speech.is_speaking());

        speech.tick(100.0);
        assert!(speech.vocalization().unwrap().did_finish);

        // A finished engine starts the text over
        speech.play_pause();
        assert!(speech.is_speaking());
        assert_eq!(speech.estimated_progress_seconds(), Some(0.0));
    }

    #[test]
    fn speak_posts_all_three_channels() {
        let mut speech = Speech::new(60);
        let id = speech.issue_subscriber_id();
        let (tx, rx) = unbounded();
        for channel in [
            Channel::ProgressChanged,
            Channel::TotalDurationChanged,
            Channel::IsSpeakingChanged,
        ] {
            speech.subscribe(id, channel, tx.clone());
        }

        speech.speak("hello there".into());
        let received: Vec<_> = rx.try_iter().collect();
        assert!(received.contains(&Channel::ProgressChanged));
        assert!(received.contains(&Channel::TotalDurationChanged));
        assert!(received.contains(&Channel::IsSpeakingChanged));
    }
}
