//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `navigation`: Section selection and mobile overlay handlers
//! - `clipboard`: Copy feedback handlers

pub(crate) mod clipboard;
pub(crate) mod navigation;
pub(crate) mod update;


use crate::feedback::{Millis, ResetTicket};

// Re-export main entry point
pub use update::update;

/// Actions that the host should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Write `text` to the system clipboard and schedule the feedback reset.
    ///
    /// The write is fire-and-forget. The host must cancel any reset it
    /// scheduled earlier before scheduling this one.
    CopyToClipboard {
        text: String,
        reset: ResetTicket,
        delay_ms: Millis,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional action for the host to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            action: Some(action),
        }
    }
}
