use tracing::{debug, trace};

use crate::error::{PinCodeError, PinCodeResult};
use crate::motion::CaretBlink;
use crate::style::Appearance;

use super::slot::Slot;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rejection {
    Disabled,
    Empty,
    NonNumeric,
    Overflow,
}

impl Rejection {
    pub fn as_str(self) -> &'static str {
        match self {
            Rejection::Disabled => "disabled",
            Rejection::Empty => "empty",
            Rejection::NonNumeric => "non-numeric",
            Rejection::Overflow => "overflow",
        }
    }
}

/// Text, focus and slot projection for a fixed-length numeric code.
///
/// The entered text never exceeds `digit_count` and only contains ASCII
/// digits. Slots are re-rendered in full after every accepted mutation.
#[derive(Clone, Debug)]
pub struct PinCodeState {
    digit_count: usize,
    text: String,
    enabled: bool,
    focused: bool,
    appearance: Appearance,
    slots: Vec<Slot>,
}

impl PinCodeState {
    pub fn new(digit_count: usize) -> PinCodeResult<Self> {
        Self::with_blink(digit_count, CaretBlink::default())
    }

    pub fn with_blink(digit_count: usize, blink: CaretBlink) -> PinCodeResult<Self> {
        if digit_count == 0 {
            return Err(PinCodeError::InvalidDigitCount { digit_count });
        }
        let mut state = Self {
            digit_count,
            text: String::with_capacity(digit_count),
            enabled: true,
            focused: false,
            appearance: Appearance::default(),
            slots: (0..digit_count).map(|_| Slot::new(blink)).collect(),
        };
        state.show_cursor();
        debug!(digit_count, "pin code state created");
        Ok(state)
    }

    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn has_text(&self) -> bool {
        !self.is_empty()
    }

    pub fn is_filled(&self) -> bool {
        self.len() == self.digit_count
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, value: bool) {
        self.enabled = value;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
    }

    /// Index of the slot currently showing the caret.
    pub fn caret_index(&self) -> Option<usize> {
        self.slots.iter().position(Slot::is_caret_visible)
    }

    pub fn check_insert(&self, candidate: &str) -> Result<(), Rejection> {
        if !self.enabled {
            return Err(Rejection::Disabled);
        }
        if candidate.is_empty() {
            return Err(Rejection::Empty);
        }
        if !candidate.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(Rejection::NonNumeric);
        }
        if self.len() + candidate.len() > self.digit_count {
            return Err(Rejection::Overflow);
        }
        Ok(())
    }

    pub fn insert_text(&mut self, candidate: &str) -> bool {
        if let Err(reason) = self.check_insert(candidate) {
            trace!(reason = reason.as_str(), len = self.len(), "insertion declined");
            return false;
        }
        self.text.push_str(candidate);
        self.show_cursor();
        trace!(len = self.len(), "insertion accepted");
        true
    }

    pub fn delete_backward(&mut self) -> bool {
        if !self.enabled {
            trace!(reason = Rejection::Disabled.as_str(), "deletion declined");
            return false;
        }
        if self.text.pop().is_none() {
            trace!(reason = Rejection::Empty.as_str(), "deletion declined");
            return false;
        }
        self.show_cursor();
        trace!(len = self.len(), "deletion accepted");
        true
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.show_cursor();
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.hide_cursor();
    }

    /// A tap focuses the control; the caret keeps following the text length.
    pub fn tap(&mut self) {
        self.focus();
    }

    fn show_cursor(&mut self) {
        let cursor = self.len();
        for (index, (slot, ch)) in self
            .slots
            .iter_mut()
            .zip(self.text.chars().map(Some).chain(std::iter::repeat(None)))
            .enumerate()
        {
            slot.set_text(ch);
            slot.set_caret_visible(index == cursor);
        }
    }

    fn hide_cursor(&mut self) {
        for slot in &mut self.slots {
            slot.set_caret_visible(false);
        }
    }
}
