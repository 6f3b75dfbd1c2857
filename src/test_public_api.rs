use gpui::IntoElement;

fn into_any(element: impl IntoElement) -> gpui::AnyElement {
    element.into_any_element()
}

fn assert_render_once<T: gpui::RenderOnce>() {}

#[test]
fn root_exports_render_components() {
    assert_render_once::<crate::PinCodeInput>();
}

#[test]
fn prelude_smoke_builds_pin_code_input() {
    use crate::prelude::*;

    let control = PinCodeControl::new(4).expect("valid digit count");
    control.set_appearance(Appearance::default());
    let _ = into_any(
        PinCodeInput::new(control)
            .layout(SlotLayout::default())
            .disabled(false),
    );
    let _ = CaretBlink::default();
    let _ = ComponentId::new("prelude");
}

#[test]
fn prelude_exposes_capability_traits() {
    use crate::prelude::*;

    fn assert_capabilities<T>()
    where
        T: TextInputSink + ControlEventSource + FocusTarget + TextInputTraitsProvider,
    {
    }
    assert_capabilities::<PinCodeControl>();
    assert_eq!(
        PinCodeControl::new(0).err(),
        Some(PinCodeError::InvalidDigitCount { digit_count: 0 })
    );
}
