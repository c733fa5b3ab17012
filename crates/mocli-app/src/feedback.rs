//! Transient "copied" feedback
//!
//! A single feedback slot tracks the most recently copied snippet. Every copy
//! issues a fresh [`ResetTicket`]; only the newest ticket can clear the slot,
//! so a reset scheduled for an older copy is a no-op once superseded.
//!
//! Time is passed in by the caller as monotonic milliseconds. The state never
//! reads a clock itself.

/// Monotonic timestamp or duration in milliseconds
pub type Millis = u64;

/// Delay before the copied indicator reverts
pub const DEFAULT_RESET_AFTER_MS: Millis = 2000;

/// Handle for one scheduled reset of the feedback slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket {
    generation: u64,
    due_at: Millis,
}

impl ResetTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Earliest time at which this reset may clear the slot
    pub fn due_at(&self) -> Millis {
        self.due_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CopiedSnippet {
    text: String,
    ticket: ResetTicket,
}

/// The feedback slot
#[derive(Debug, Clone)]
pub struct ClipboardFeedbackState {
    copied: Option<CopiedSnippet>,
    generation: u64,
    reset_after_ms: Millis,
}

impl Default for ClipboardFeedbackState {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_AFTER_MS)
    }
}

impl ClipboardFeedbackState {
    pub fn new(reset_after_ms: Millis) -> Self {
        Self {
            copied: None,
            generation: 0,
            reset_after_ms,
        }
    }

    pub fn reset_after_ms(&self) -> Millis {
        self.reset_after_ms
    }

    /// Record that `text` was handed to the clipboard at `now`.
    ///
    /// Any ticket issued before this call becomes stale.
    pub fn record_copy(&mut self, text: impl Into<String>, now: Millis) -> ResetTicket {
        self.generation = self.generation.wrapping_add(1);
        let ticket = ResetTicket {
            generation: self.generation,
            due_at: now.saturating_add(self.reset_after_ms),
        };
        self.copied = Some(CopiedSnippet {
            text: text.into(),
            ticket,
        });
        ticket
    }

    /// Deferred reset delivered by a host timer.
    ///
    /// Returns `true` if the slot was cleared, `false` for a stale ticket.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        match &self.copied {
            Some(copied) if copied.ticket == ticket => {
                self.copied = None;
                true
            }
            _ => false,
        }
    }

    /// Deadline check for hosts that poll instead of scheduling timers.
    ///
    /// Returns `true` if the slot was cleared.
    pub fn tick(&mut self, now: Millis) -> bool {
        match &self.copied {
            Some(copied) if now >= copied.ticket.due_at => {
                self.copied = None;
                true
            }
            _ => false,
        }
    }

    /// Exact string comparison against the most recent copy
    pub fn is_copied(&self, text: &str) -> bool {
        self.copied
            .as_ref()
            .is_some_and(|copied| copied.text == text)
    }

    pub fn copied_text(&self) -> Option<&str> {
        self.copied.as_ref().map(|copied| copied.text.as_str())
    }

    /// Ticket of the reset currently allowed to clear the slot
    pub fn pending_reset(&self) -> Option<ResetTicket> {
        self.copied.as_ref().map(|copied| copied.ticket)
    }
}
