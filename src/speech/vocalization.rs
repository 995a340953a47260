/// One utterance of the engine's text, from `speak` until it runs out.
pub struct Vocalization {
    pub is_speaking: bool,
    pub did_finish: bool,
    pub(super) elapsed: f64,
}

impl Vocalization {
    pub(super) fn new() -> Self {
        Vocalization {
            is_speaking: true,
            did_finish: false,
            elapsed: 0.0,
        }
    }

    pub(super) fn finish(&mut self) {
        self.did_finish = true;
        self.is_speaking = false;
    }
}
