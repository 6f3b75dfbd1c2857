use std::time::Instant;

use gpui::{
    Animation, AnimationExt, FocusHandle, InteractiveElement, IntoElement, MouseButton,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, px,
    relative,
};

use crate::contracts::{FocusTarget, TextInputSink};
use crate::id::ComponentId;
use crate::style::SlotLayout;

use super::pin_code_actions::{
    DeleteBackward, Done, PIN_CODE_KEY_CONTEXT, PasteClipboard, ensure_pin_code_keybindings,
};
use super::pin_code_control::PinCodeControl;

const DISABLED_OPACITY: f32 = 0.55;

/// Row of digit slots bound to a [`PinCodeControl`].
///
/// Tapping any slot focuses the whole control; the caret keeps following the
/// text length rather than the tapped slot.
#[derive(IntoElement)]
pub struct PinCodeInput {
    id: ComponentId,
    control: PinCodeControl,
    disabled: Option<bool>,
    layout: SlotLayout,
    style: gpui::StyleRefinement,
    focus_handle: Option<FocusHandle>,
}

impl PinCodeInput {
    #[track_caller]
    pub fn new(control: PinCodeControl) -> Self {
        Self {
            id: ComponentId::default(),
            control,
            disabled: None,
            layout: SlotLayout::default(),
            style: gpui::StyleRefinement::default(),
            focus_handle: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    /// Overrides the control's enabled flag when rendered.
    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = Some(value);
        self
    }

    pub fn layout(mut self, value: SlotLayout) -> Self {
        self.layout = value;
        self
    }

    pub fn focus_handle(mut self, focus_handle: FocusHandle) -> Self {
        self.focus_handle = Some(focus_handle);
        self
    }

    pub fn control(&self) -> &PinCodeControl {
        &self.control
    }

    /// Mirrors window focus into the control. Returns `true` when it changed.
    pub(crate) fn sync_window_focus(
        control: &PinCodeControl,
        focus_handle: &FocusHandle,
        window: &Window,
    ) -> bool {
        control.sync_focus(focus_handle.is_focused(window))
    }

    /// Keystrokes only reach a focused control.
    fn route_digit(control: &PinCodeControl, digit: char) -> bool {
        control.is_focused() && control.insert_text(&digit.to_string())
    }

    fn route_delete(control: &PinCodeControl) -> bool {
        control.is_focused() && control.delete_backward()
    }

    fn route_paste(control: &PinCodeControl, text: &str) -> bool {
        control.is_focused() && control.paste(text)
    }

    fn digit_from_key(event: &gpui::KeyDownEvent) -> Option<char> {
        event
            .keystroke
            .key_char
            .as_ref()
            .and_then(|value| value.chars().next())
            .filter(|ch| ch.is_ascii_digit())
            .or_else(|| {
                let key = event.keystroke.key.as_str();
                if key.len() == 1 {
                    key.chars().next().filter(|ch| ch.is_ascii_digit())
                } else {
                    None
                }
            })
    }
}

impl RenderOnce for PinCodeInput {
    fn render(self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        ensure_pin_code_keybindings(cx);

        if let Some(focus_handle) = &self.focus_handle {
            Self::sync_window_focus(&self.control, focus_handle, window);
        }

        if let Some(disabled) = self.disabled {
            self.control.set_enabled(!disabled);
        }
        let enabled = self.control.is_enabled();
        let appearance = self.control.appearance();
        let slots = self.control.slots();
        let layout = self.layout;

        let mut root = div()
            .id(self.id.clone())
            .focusable()
            .key_context(PIN_CODE_KEY_CONTEXT)
            .flex()
            .flex_row()
            .items_center()
            .w_full()
            .h(px(layout.slot_height))
            .gap(px(layout.spacing));

        if enabled {
            root = root.cursor_text();
        } else {
            root = root.cursor_default().opacity(DISABLED_OPACITY);
        }

        root = root
            .on_action({
                let control = self.control.clone();
                move |_: &DeleteBackward, window, _cx| {
                    if Self::route_delete(&control) {
                        window.refresh();
                    }
                }
            })
            .on_action({
                let control = self.control.clone();
                move |_: &PasteClipboard, window, cx| {
                    let Some(item) = cx.read_from_clipboard() else {
                        return;
                    };
                    let Some(pasted) = item.text() else {
                        return;
                    };
                    if Self::route_paste(&control, &pasted) {
                        window.refresh();
                    }
                }
            })
            .on_action({
                let control = self.control.clone();
                move |_: &Done, window, _cx| {
                    control.resign_focused();
                    window.blur();
                    window.refresh();
                }
            })
            .on_key_down({
                let control = self.control.clone();
                move |event, window, cx| {
                    let modifiers = &event.keystroke.modifiers;
                    if modifiers.control || modifiers.platform || modifiers.function || modifiers.alt
                    {
                        return;
                    }
                    if !control.is_focused() {
                        return;
                    }
                    let Some(digit) = Self::digit_from_key(event) else {
                        return;
                    };
                    if Self::route_digit(&control, digit) {
                        window.refresh();
                    }
                    cx.stop_propagation();
                }
            })
            .on_mouse_down_out({
                let control = self.control.clone();
                let focus_handle = self.focus_handle.clone();
                move |_, window, _cx| {
                    if !control.is_focused() {
                        return;
                    }
                    control.resign_focused();
                    if focus_handle
                        .as_ref()
                        .is_some_and(|focus_handle| focus_handle.is_focused(window))
                    {
                        window.blur();
                    }
                    window.refresh();
                }
            });

        if let Some(focus_handle) = &self.focus_handle {
            root = root.track_focus(focus_handle);
        }

        for (index, slot) in slots.iter().enumerate() {
            let mut cell = div()
                .relative()
                .flex()
                .flex_1()
                .h_full()
                .items_center()
                .justify_center()
                .overflow_hidden()
                .rounded(px(layout.corner_radius))
                .bg(appearance.background_color)
                .text_color(appearance.text_color)
                .text_size(px(appearance.font.size))
                .font_weight(appearance.font.weight);
            if let Some(family) = appearance.font.family.clone() {
                cell = cell.font_family(family);
            }

            cell = cell.on_mouse_down(MouseButton::Left, {
                let control = self.control.clone();
                let focus_handle = self.focus_handle.clone();
                move |_, window, _cx| {
                    control.tap();
                    if let Some(focus_handle) = &focus_handle {
                        window.focus(focus_handle);
                    }
                    window.refresh();
                }
            });

            if let Some(ch) = slot.text() {
                cell = cell.child(SharedString::from(ch.to_string()));
            }

            let mut caret = div()
                .id(self.id.slot_index("caret", index))
                .absolute()
                .top(px(layout.caret_top()))
                .left(relative(0.5))
                .ml(px(-layout.caret_width / 2.0))
                .w(px(layout.caret_width))
                .h(px(layout.caret_height()))
                .bg(appearance.caret_color);
            if !slot.is_caret_visible() {
                caret = caret.invisible();
            }

            let sampled = slot.clone();
            let animated = caret.with_animation(
                self.id.slot_index("caret-blink", index),
                Animation::new(slot.blink().cycle()).repeat(),
                move |this, _| this.opacity(sampled.caret_opacity(Instant::now())),
            );

            root = root.child(cell.child(animated));
        }

        gpui::Refineable::refine(gpui::Styled::style(&mut root), &self.style);
        root
    }
}

crate::impl_disableable!(PinCodeInput);

impl gpui::Styled for PinCodeInput {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}
