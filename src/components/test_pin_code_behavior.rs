use std::{cell::RefCell, rc::Rc, sync::Once};

use gpui::SharedString;

use super::*;
use crate::contracts::{ControlEventSource, FocusTarget, TextInputSink};

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Notification {
    Changed(String),
    Event(String),
}

struct Harness {
    control: PinCodeControl,
    log: Rc<RefCell<Vec<Notification>>>,
}

impl Harness {
    fn new(digit_count: usize) -> Self {
        init_tracing();
        let control = PinCodeControl::new(digit_count).expect("valid digit count");
        let log = Rc::new(RefCell::new(Vec::new()));

        let changes = log.clone();
        control.set_change_handler(move |text: SharedString| {
            changes
                .borrow_mut()
                .push(Notification::Changed(text.to_string()));
        });
        let events = log.clone();
        control.subscribe(move |event| {
            let ControlEvent::EditingChanged { text } = event;
            events.borrow_mut().push(Notification::Event(text.to_string()));
        });

        Self { control, log }
    }

    fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    fn slots(&self) -> Vec<String> {
        self.control
            .slots()
            .iter()
            .map(|slot| slot.text().map(String::from).unwrap_or_default())
            .collect()
    }

    fn text(&self) -> String {
        self.control.text().to_string()
    }
}

#[test]
fn four_digit_trace_matches_expected_slots_and_caret() {
    let harness = Harness::new(4);

    assert!(harness.control.insert_text("1"));
    assert_eq!(harness.text(), "1");
    assert_eq!(harness.slots(), ["1", "", "", ""]);
    assert_eq!(harness.control.caret_index(), Some(1));

    assert!(harness.control.insert_text("23"));
    assert_eq!(harness.text(), "123");
    assert_eq!(harness.slots(), ["1", "2", "3", ""]);
    assert_eq!(harness.control.caret_index(), Some(3));

    assert!(!harness.control.insert_text("45"));
    assert_eq!(harness.text(), "123");

    assert!(harness.control.delete_backward());
    assert_eq!(harness.text(), "12");
    assert_eq!(harness.control.caret_index(), Some(2));
    assert!(!harness.control.is_filled());
}

#[test]
fn accepted_mutations_fire_callback_then_event_exactly_once() {
    let harness = Harness::new(4);

    assert!(harness.control.insert_text("42"));
    assert_eq!(
        harness.take(),
        [
            Notification::Changed("42".into()),
            Notification::Event("42".into()),
        ]
    );

    assert!(harness.control.delete_backward());
    assert_eq!(
        harness.take(),
        [
            Notification::Changed("4".into()),
            Notification::Event("4".into()),
        ]
    );
}

#[test]
fn rejected_mutations_are_silent() {
    let harness = Harness::new(3);

    assert!(!harness.control.insert_text("12a"));
    assert!(!harness.control.insert_text("1234"));
    assert!(!harness.control.insert_text(""));
    assert!(!harness.control.delete_backward());
    assert!(harness.take().is_empty());

    assert!(harness.control.insert_text("7"));
    harness.take();
    harness.control.set_enabled(false);
    assert!(!harness.control.insert_text("8"));
    assert!(!harness.control.delete_backward());
    assert_eq!(harness.text(), "7");
    assert!(harness.take().is_empty());
}

#[test]
fn filled_flag_tracks_length() {
    let harness = Harness::new(2);
    assert!(harness.control.is_empty());
    assert!(harness.control.insert_text("12"));
    assert!(harness.control.is_filled());
    assert!(!harness.control.is_empty());
    assert_eq!(harness.control.caret_index(), None);
    assert!(harness.control.delete_backward());
    assert!(!harness.control.is_filled());
    assert_eq!(harness.control.caret_index(), Some(1));
}

#[test]
fn focus_changes_only_toggle_caret_visibility() {
    let harness = Harness::new(4);
    assert!(harness.control.insert_text("12"));
    harness.take();

    assert!(harness.control.resign_focused());
    assert!(harness.control.slots().iter().all(|slot| !slot.is_caret_visible()));
    assert_eq!(harness.slots(), ["1", "2", "", ""]);

    assert!(harness.control.become_focused());
    assert!(harness.control.is_focused());
    assert_eq!(harness.control.caret_index(), Some(2));

    harness.control.resign_focused();
    harness.control.tap();
    assert_eq!(harness.control.caret_index(), Some(2));
    assert!(harness.take().is_empty());
}

#[test]
fn every_subscriber_sees_each_change() {
    let harness = Harness::new(4);
    let second = Rc::new(RefCell::new(Vec::new()));
    let sink = second.clone();
    harness.control.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    assert!(harness.control.insert_text("9"));
    assert_eq!(
        *second.borrow(),
        [ControlEvent::EditingChanged { text: "9".into() }]
    );
    assert_eq!(harness.take().len(), 2);
}

#[test]
fn appearance_round_trips_through_control() {
    let harness = Harness::new(3);
    let appearance = crate::style::Appearance::new(
        crate::style::FontSpec::new(30.0),
        gpui::black(),
        gpui::white(),
        gpui::hsla(0.0, 1.0, 0.5, 1.0),
    );
    harness.control.set_appearance(appearance.clone());
    assert_eq!(harness.control.appearance(), appearance);
    assert_eq!(harness.control.slots().len(), 3);
}
