//! Fixed-length numeric code entry (OTP, PIN) for gpui.
//!
//! [`PinCodeControl`] owns the entered digits and projects them onto one
//! [`components::Slot`] per position. [`PinCodeInput`] renders a control and
//! routes keyboard, clipboard and pointer input into it.

pub mod components;
pub mod contracts;
pub mod error;
pub mod id;
pub mod motion;
pub mod prelude;
pub mod style;

#[cfg(test)]
mod test_public_api;

pub use components::{ControlEvent, PinCodeControl, PinCodeInput};
pub use error::{PinCodeError, PinCodeResult};
