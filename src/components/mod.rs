mod input_traits;
mod pin_code_actions;
mod pin_code_control;
mod pin_code_input;
mod pin_code_state;
mod slot;

#[cfg(test)]
mod test_component_smoke;
#[cfg(test)]
mod test_pin_code_behavior;

pub use input_traits::{
    Autocapitalization, Autocorrection, KeyboardAppearance, KeyboardType, ReturnKey,
    SpellChecking, TextInputTraits,
};
pub use pin_code_actions::{
    DeleteBackward, Done, PIN_CODE_KEY_CONTEXT, PasteClipboard, ensure_pin_code_keybindings,
};
pub use pin_code_control::{ControlEvent, PinCodeControl, SubscriptionId};
pub use pin_code_input::PinCodeInput;
pub use pin_code_state::{PinCodeState, Rejection};
pub use slot::Slot;
