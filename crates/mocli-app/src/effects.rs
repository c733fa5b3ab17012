//! Host side effects
//!
//! The state machine never touches the clipboard or a timer itself. The host
//! (the browser page, or a test double) implements this trait and
//! [`crate::process::process_message`] drives it.

use crate::feedback::{Millis, ResetTicket};

#[cfg_attr(test, mockall::automock)]
pub trait Effects {
    /// Write `text` to the system clipboard. Fire-and-forget: failures are
    /// the host's to log, and feedback has already been recorded.
    fn write_clipboard(&self, text: &str);

    /// Deliver `Message::ResetCopyFeedback(ticket)` after `delay_ms`.
    ///
    /// Implementations keep at most one pending reset: a call cancels
    /// whatever was scheduled before it.
    fn schedule_feedback_reset(&self, ticket: ResetTicket, delay_ms: Millis);
}
