//! Message types for the docs shell (TEA pattern)

use mocli_core::Section;

use crate::feedback::{Millis, ResetTicket};

/// All user actions and timer events the shell reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Section picked from the desktop navigation bar
    ChooseSection(Section),
    /// Section picked from the mobile overlay; also dismisses the overlay
    ChooseSectionFromMenu(Section),

    // ─────────────────────────────────────────────────────────
    // Mobile Menu Messages
    // ─────────────────────────────────────────────────────────
    ToggleMobileMenu,
    CloseMobileMenu,

    // ─────────────────────────────────────────────────────────
    // Clipboard Messages
    // ─────────────────────────────────────────────────────────
    /// Copy button pressed on a snippet
    CopySnippet {
        /// Exact literal displayed in the block
        text: String,
        /// Host monotonic clock at the time of the click
        now: Millis,
    },
    /// Deferred reset fired by the host timer
    ResetCopyFeedback(ResetTicket),
    /// Periodic deadline check for hosts without cancellable timers
    Tick { now: Millis },
}
