//! Copy feedback handlers

use mocli_core::prelude::*;

use crate::feedback::{Millis, ResetTicket};
use crate::state::DocsState;

use super::{UpdateAction, UpdateResult};

/// Record the copy before the host has even attempted the write. Feedback is
/// shown whether or not the clipboard accepts the text.
pub(crate) fn handle_copy_snippet(state: &mut DocsState, text: String, now: Millis) -> UpdateResult {
    let reset = state.feedback.record_copy(text.clone(), now);
    debug!(
        "Copied snippet (generation {}): {:?}",
        reset.generation(),
        text
    );

    UpdateResult::action(UpdateAction::CopyToClipboard {
        text,
        reset,
        delay_ms: state.feedback.reset_after_ms(),
    })
}

pub(crate) fn handle_reset(state: &mut DocsState, ticket: ResetTicket) -> UpdateResult {
    if state.feedback.expire(ticket) {
        trace!("Copy feedback cleared (generation {})", ticket.generation());
    } else {
        trace!(
            "Ignoring superseded copy feedback reset (generation {})",
            ticket.generation()
        );
    }
    UpdateResult::none()
}

pub(crate) fn handle_tick(state: &mut DocsState, now: Millis) -> UpdateResult {
    if state.feedback.tick(now) {
        trace!("Copy feedback expired at {}ms", now);
    }
    UpdateResult::none()
}
