mod controls;
mod engine;
mod events;
mod vocalization;

pub use controls::Controls;
pub use engine::{Progress, Speech};
pub use events::{Channel, Notifier, SubscriberId};
pub use vocalization::Vocalization;

use serde::Deserialize;

/// Text boundaries the engine can skip by. With no access to the
/// synthesizer's word ranges, each unit maps to an estimated span of
/// words read at the engine's pace.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipUnit {
    Word,
    Sentence,
    Paragraph,
}

impl SkipUnit {
    fn estimated_words(&self) -> u64 {
        match self {
            SkipUnit::Word => 1,
            SkipUnit::Sentence => 15,
            SkipUnit::Paragraph => 75,
        }
    }

    pub fn estimated_seconds(&self, words_per_minute: u64) -> f64 {
        let wpm = words_per_minute.max(1);
        self.estimated_words() as f64 * 60.0 / wpm as f64
    }
}
