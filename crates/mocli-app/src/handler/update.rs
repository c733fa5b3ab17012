//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::DocsState;

use super::{clipboard, navigation, UpdateResult};

/// Process a message and update state
/// Returns an optional action for the host to perform
pub fn update(state: &mut DocsState, message: Message) -> UpdateResult {
    match message {
        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::ChooseSection(section) => navigation::handle_choose_section(state, section),
        Message::ChooseSectionFromMenu(section) => {
            navigation::handle_choose_section_from_menu(state, section)
        }

        // ─────────────────────────────────────────────────────────
        // Mobile Menu Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleMobileMenu => navigation::handle_toggle_mobile_menu(state),
        Message::CloseMobileMenu => {
            state.mobile_menu.close();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Clipboard Messages
        // ─────────────────────────────────────────────────────────
        Message::CopySnippet { text, now } => clipboard::handle_copy_snippet(state, text, now),
        Message::ResetCopyFeedback(ticket) => clipboard::handle_reset(state, ticket),
        Message::Tick { now } => clipboard::handle_tick(state, now),
    }
}
