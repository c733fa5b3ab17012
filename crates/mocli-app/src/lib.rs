//! mocli-app - Navigation and feedback state for the my-own-cli docs shell
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the three
//! state slots of the shell (active section, mobile overlay, copy feedback),
//! the settings bundled with the page, and the [`Effects`] seam through which
//! the host performs clipboard writes and timers.

pub mod config;
pub mod effects;
pub mod feedback;
pub mod handler;
pub mod message;
pub mod mobile_menu;
pub mod navigation;
pub mod process;
pub mod state;

// Re-export primary types
pub use config::ShellSettings;
pub use effects::Effects;
pub use feedback::{ClipboardFeedbackState, Millis, ResetTicket, DEFAULT_RESET_AFTER_MS};
pub use handler::{update, UpdateAction, UpdateResult};
pub use message::Message;
pub use mobile_menu::MobileMenuState;
pub use navigation::NavigationState;
pub use process::process_message;
pub use state::DocsState;
