use std::sync::Once;

use gpui::{App, KeyBinding, actions};

pub const PIN_CODE_KEY_CONTEXT: &str = "pincode_input";

actions!(pincode_input, [DeleteBackward, PasteClipboard, Done]);

static BINDINGS_INIT: Once = Once::new();

pub fn ensure_pin_code_keybindings(cx: &mut App) {
    BINDINGS_INIT.call_once(|| {
        cx.bind_keys(pin_code_bindings(PIN_CODE_KEY_CONTEXT));
    });
}

fn pin_code_bindings(context: &'static str) -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("backspace", DeleteBackward, Some(context)),
        KeyBinding::new("cmd-v", PasteClipboard, Some(context)),
        KeyBinding::new("ctrl-v", PasteClipboard, Some(context)),
        KeyBinding::new("enter", Done, Some(context)),
        KeyBinding::new("escape", Done, Some(context)),
    ]
}
