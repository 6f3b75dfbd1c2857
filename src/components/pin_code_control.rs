use std::{cell::RefCell, rc::Rc};

use gpui::SharedString;
use tracing::debug;

use crate::contracts::{ControlEventSource, FocusTarget, TextInputSink, TextInputTraitsProvider};
use crate::error::PinCodeResult;
use crate::motion::CaretBlink;
use crate::style::Appearance;

use super::input_traits::TextInputTraits;
use super::pin_code_state::PinCodeState;
use super::slot::Slot;

type ChangeHandler = Rc<dyn Fn(SharedString)>;
type EventListener = Rc<dyn Fn(&ControlEvent)>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ControlEvent {
    EditingChanged { text: SharedString },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SubscriptionId(u64);

struct Inner {
    state: PinCodeState,
    on_change: Option<ChangeHandler>,
    listeners: Vec<(SubscriptionId, EventListener)>,
    next_subscription: u64,
}

/// Shared handle to a pin code control.
///
/// Clones refer to the same control. Every accepted mutation re-renders the
/// slots, calls the change handler once and then delivers
/// [`ControlEvent::EditingChanged`] to every subscriber once. Both run after
/// the internal borrow is released, so they may read the control again.
#[derive(Clone)]
pub struct PinCodeControl {
    inner: Rc<RefCell<Inner>>,
}

impl PinCodeControl {
    pub fn new(digit_count: usize) -> PinCodeResult<Self> {
        Self::with_blink(digit_count, CaretBlink::default())
    }

    pub fn with_blink(digit_count: usize, blink: CaretBlink) -> PinCodeResult<Self> {
        let state = PinCodeState::with_blink(digit_count, blink)?;
        Ok(Self {
            inner: Rc::new(RefCell::new(Inner {
                state,
                on_change: None,
                listeners: Vec::new(),
                next_subscription: 0,
            })),
        })
    }

    pub fn digit_count(&self) -> usize {
        self.inner.borrow().state.digit_count()
    }

    pub fn text(&self) -> SharedString {
        SharedString::from(self.inner.borrow().state.text().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().state.is_empty()
    }

    pub fn is_filled(&self) -> bool {
        self.inner.borrow().state.is_filled()
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.borrow().state.is_enabled()
    }

    pub fn set_enabled(&self, value: bool) {
        self.inner.borrow_mut().state.set_enabled(value);
    }

    pub fn caret_index(&self) -> Option<usize> {
        self.inner.borrow().state.caret_index()
    }

    pub fn slots(&self) -> Vec<Slot> {
        self.inner.borrow().state.slots().to_vec()
    }

    pub fn appearance(&self) -> Appearance {
        self.inner.borrow().state.appearance().clone()
    }

    pub fn set_appearance(&self, appearance: Appearance) {
        self.inner.borrow_mut().state.set_appearance(appearance);
    }

    /// Replaces the single change handler.
    pub fn set_change_handler(&self, handler: impl Fn(SharedString) + 'static) {
        self.inner.borrow_mut().on_change = Some(Rc::new(handler));
        debug!("change handler replaced");
    }

    pub fn clear_change_handler(&self) {
        self.inner.borrow_mut().on_change = None;
    }

    /// Inserts clipboard text under the same rules as typed text.
    pub fn paste(&self, text: &str) -> bool {
        self.insert_text(text.trim())
    }

    pub fn tap(&self) {
        self.inner.borrow_mut().state.tap();
    }

    /// Mirrors an external focus source. Returns `true` when the flag changed.
    pub fn sync_focus(&self, focused: bool) -> bool {
        if self.is_focused() == focused {
            return false;
        }
        if focused {
            self.become_focused()
        } else {
            self.resign_focused()
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn mutate(&self, edit: impl FnOnce(&mut PinCodeState) -> bool) -> bool {
        let (text, on_change, listeners) = {
            let mut inner = self.inner.borrow_mut();
            if !edit(&mut inner.state) {
                return false;
            }
            let text = SharedString::from(inner.state.text().to_string());
            let listeners = inner
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect::<Vec<_>>();
            (text, inner.on_change.clone(), listeners)
        };

        if let Some(handler) = on_change {
            (handler)(text.clone());
        }
        let event = ControlEvent::EditingChanged { text };
        for listener in listeners {
            (listener)(&event);
        }
        true
    }
}

impl TextInputSink for PinCodeControl {
    fn has_text(&self) -> bool {
        self.inner.borrow().state.has_text()
    }

    fn insert_text(&self, text: &str) -> bool {
        self.mutate(|state| state.insert_text(text))
    }

    fn delete_backward(&self) -> bool {
        self.mutate(PinCodeState::delete_backward)
    }
}

impl ControlEventSource for PinCodeControl {
    fn subscribe(&self, listener: impl Fn(&ControlEvent) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        inner.next_subscription += 1;
        let id = SubscriptionId(inner.next_subscription);
        inner.listeners.push((id, Rc::new(listener)));
        debug!(listeners = inner.listeners.len(), "control event listener added");
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(candidate, _)| *candidate != id);
        before != inner.listeners.len()
    }
}

impl FocusTarget for PinCodeControl {
    fn become_focused(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        if !inner.state.is_focused() {
            debug!("pin code control focused");
        }
        inner.state.focus();
        true
    }

    fn resign_focused(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.state.is_focused() {
            debug!("pin code control resigned focus");
        }
        inner.state.blur();
        true
    }

    fn is_focused(&self) -> bool {
        self.inner.borrow().state.is_focused()
    }
}

impl TextInputTraitsProvider for PinCodeControl {
    fn text_input_traits(&self) -> TextInputTraits {
        TextInputTraits::NUMERIC_CODE
    }
}
