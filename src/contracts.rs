use crate::components::{ControlEvent, SubscriptionId, TextInputTraits};

/// Receives keystrokes from the host's keyboard channel.
pub trait TextInputSink {
    fn has_text(&self) -> bool;

    /// Returns `true` when the text was accepted.
    fn insert_text(&self, text: &str) -> bool;

    /// Returns `true` when a character was removed.
    fn delete_backward(&self) -> bool;
}

/// Multi-subscriber control events, independent of any single change handler.
pub trait ControlEventSource {
    fn subscribe(&self, listener: impl Fn(&ControlEvent) + 'static) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

pub trait FocusTarget {
    fn can_become_focused(&self) -> bool {
        true
    }

    fn become_focused(&self) -> bool;

    fn resign_focused(&self) -> bool;

    fn is_focused(&self) -> bool;
}

pub trait TextInputTraitsProvider {
    fn text_input_traits(&self) -> TextInputTraits;
}

pub trait Disableable: Sized {
    fn disabled(self, value: bool) -> Self;
}

#[macro_export]
macro_rules! impl_disableable {
    ($type:ty) => {
        impl $crate::contracts::Disableable for $type {
            fn disabled(self, value: bool) -> Self {
                <$type>::disabled(self, value)
            }
        }
    };
}
