use super::*;
use crate::style::SlotLayout;
use gpui::{AnyElement, IntoElement};

fn into_any(element: impl IntoElement) -> AnyElement {
    element.into_any_element()
}

fn control(digit_count: usize) -> PinCodeControl {
    PinCodeControl::new(digit_count).expect("valid digit count")
}

#[test]
fn smoke_pin_code_input_renders_into_any_element() {
    let _ = into_any(PinCodeInput::new(control(4)));
    let _ = into_any(PinCodeInput::new(control(6)).with_id("otp"));
    let _ = into_any(
        PinCodeInput::new(control(1))
            .disabled(true)
            .layout(SlotLayout::new().spacing(4.0).slot_height(40.0)),
    );
}

#[test]
fn element_shares_state_with_its_control() {
    let shared = control(4);
    let input = PinCodeInput::new(shared.clone());
    assert!(crate::contracts::TextInputSink::insert_text(&shared, "12"));
    assert_eq!(input.control().text().to_string(), "12");
}
