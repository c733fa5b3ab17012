//! End-to-end walkthrough of the shell state through its public API, with a
//! recording host standing in for the browser.

use std::cell::RefCell;

use mocli_app::{process_message, DocsState, Effects, Message, Millis, ResetTicket};
use mocli_core::{commands, copyable_snippets, Section};

/// Fake host: records clipboard writes and keeps a single pending timer
#[derive(Default)]
struct RecordingHost {
    clipboard: RefCell<Vec<String>>,
    timer: RefCell<Option<(ResetTicket, Millis)>>,
    cancelled: RefCell<usize>,
}

impl Effects for RecordingHost {
    fn write_clipboard(&self, text: &str) {
        self.clipboard.borrow_mut().push(text.to_string());
    }

    fn schedule_feedback_reset(&self, ticket: ResetTicket, delay_ms: Millis) {
        let mut timer = self.timer.borrow_mut();
        if timer.is_some() {
            *self.cancelled.borrow_mut() += 1;
        }
        *timer = Some((ticket, delay_ms));
    }
}

impl RecordingHost {
    /// Fire the pending timer if it is due at `now`
    fn advance_to(&self, state: &mut DocsState, now: Millis) {
        let due = self
            .timer
            .borrow()
            .filter(|(ticket, _)| ticket.due_at() <= now);
        if let Some((ticket, _)) = due {
            self.timer.borrow_mut().take();
            process_message(state, Message::ResetCopyFeedback(ticket), self);
        }
    }
}

fn copy(state: &mut DocsState, host: &RecordingHost, text: &str, now: Millis) {
    process_message(
        state,
        Message::CopySnippet {
            text: text.to_string(),
            now,
        },
        host,
    );
}

#[test]
fn test_concrete_scenario() {
    let mut state = DocsState::default();
    let host = RecordingHost::default();

    assert_eq!(state.active_section(), Section::GettingStarted);
    assert!(!state.is_mobile_menu_open());
    assert_eq!(state.copied_text(), None);

    process_message(&mut state, Message::ChooseSection(Section::Commands), &host);
    assert_eq!(state.active_section(), Section::Commands);

    let snippet = "my-own-cli init --template react";
    copy(&mut state, &host, snippet, 10_000);
    assert!(state.is_copied(snippet));
    assert_eq!(host.clipboard.borrow().as_slice(), [snippet.to_string()]);

    host.advance_to(&mut state, 11_999);
    assert!(state.is_copied(snippet));

    host.advance_to(&mut state, 12_000);
    assert!(!state.is_copied(snippet));
    assert_eq!(state.copied_text(), None);
}

#[test]
fn test_supersession_keeps_one_timer() {
    let mut state = DocsState::default();
    let host = RecordingHost::default();

    copy(&mut state, &host, "X", 0);
    copy(&mut state, &host, "Y", 1_500);

    assert_eq!(*host.cancelled.borrow(), 1);
    assert!(!state.is_copied("X"));
    assert!(state.is_copied("Y"));

    // Absent state is reached 2000ms after the last copy, not the first
    host.advance_to(&mut state, 2_000);
    assert!(state.is_copied("Y"));
    host.advance_to(&mut state, 3_500);
    assert_eq!(state.copied_text(), None);
}

#[test]
fn test_mobile_overlay_round_trip() {
    let mut state = DocsState::default();
    let host = RecordingHost::default();

    process_message(&mut state, Message::ToggleMobileMenu, &host);
    assert!(state.is_mobile_menu_open());

    process_message(&mut state, Message::ChooseSectionFromMenu(Section::Api), &host);
    assert_eq!(state.active_section(), Section::Api);
    assert!(!state.is_mobile_menu_open());
    assert!(host.clipboard.borrow().is_empty());
}

#[test]
fn test_every_rendered_snippet_copies_verbatim() {
    let mut state = DocsState::default();
    let host = RecordingHost::default();
    let mut now = 0;

    for section in Section::ALL {
        process_message(&mut state, Message::ChooseSection(section), &host);
        for snippet in copyable_snippets(section) {
            copy(&mut state, &host, snippet, now);
            assert!(state.is_copied(snippet));
            assert_eq!(host.clipboard.borrow().last().map(String::as_str), Some(snippet));
            now += 100;
        }
    }

    let written = host.clipboard.borrow();
    for cmd in commands() {
        assert!(written.iter().any(|text| text == cmd.example));
    }
}
