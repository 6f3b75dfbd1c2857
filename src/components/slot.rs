use std::time::Instant;

use crate::motion::CaretBlink;

/// One digit cell. Holds only what the owning control projects onto it.
#[derive(Clone, Debug)]
pub struct Slot {
    text: Option<char>,
    caret_visible: bool,
    blink: CaretBlink,
    started_at: Instant,
}

impl Slot {
    pub(crate) fn new(blink: CaretBlink) -> Self {
        Self {
            text: None,
            caret_visible: false,
            blink,
            started_at: Instant::now(),
        }
    }

    pub fn text(&self) -> Option<char> {
        self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_none()
    }

    pub fn is_caret_visible(&self) -> bool {
        self.caret_visible
    }

    pub fn blink(&self) -> CaretBlink {
        self.blink
    }

    /// Masked caret opacity. The blink clock keeps running while hidden.
    pub fn caret_opacity(&self, now: Instant) -> f32 {
        if !self.caret_visible {
            return 0.0;
        }
        self.blink
            .opacity_after(now.saturating_duration_since(self.started_at))
    }

    pub(crate) fn set_text(&mut self, value: Option<char>) {
        self.text = value;
    }

    pub(crate) fn set_caret_visible(&mut self, value: bool) {
        self.caret_visible = value;
    }
}
