use std::time::{Duration, Instant};

/// How long a button stays visually pressed after activation.
pub const PRESS_FEEDBACK: Duration = Duration::from_millis(150);

/// Transient "pressed" highlight on one button. Purely cosmetic; it never
/// affects which shot is selected.
#[derive(Clone, Copy, Debug, Default)]
pub struct PressFeedback {
    active: Option<(usize, Instant)>,
}

impl PressFeedback {
    pub fn press(&mut self, index: usize, now: Instant) {
        self.active = Some((index, now + PRESS_FEEDBACK));
    }

    /// The pressed button, if its highlight has not yet expired at `now`.
    pub fn pressed(&self, now: Instant) -> Option<usize> {
        match self.active {
            Some((index, until)) if now < until => Some(index),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}
