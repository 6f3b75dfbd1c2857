pub use crate::components::{
    ControlEvent, PinCodeControl, PinCodeInput, Slot, SubscriptionId, TextInputTraits,
};
pub use crate::contracts::{
    ControlEventSource, Disableable, FocusTarget, TextInputSink, TextInputTraitsProvider,
};
pub use crate::error::{PinCodeError, PinCodeResult};
pub use crate::id::ComponentId;
pub use crate::motion::CaretBlink;
pub use crate::style::{Appearance, FontSpec, SlotLayout};
