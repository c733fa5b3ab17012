//! Docs shell state (Model in TEA pattern)
//!
//! Three independent slots, each mutated only through [`crate::handler::update`].
//! The view is a pure function of these slots plus the static content.

use mocli_core::Section;

use crate::config::ShellSettings;
use crate::feedback::{ClipboardFeedbackState, ResetTicket};
use crate::mobile_menu::MobileMenuState;
use crate::navigation::NavigationState;

#[derive(Debug, Clone)]
pub struct DocsState {
    pub navigation: NavigationState,
    pub mobile_menu: MobileMenuState,
    pub feedback: ClipboardFeedbackState,
    settings: ShellSettings,
}

impl Default for DocsState {
    fn default() -> Self {
        Self::new(ShellSettings::default())
    }
}

impl DocsState {
    pub fn new(settings: ShellSettings) -> Self {
        Self {
            navigation: NavigationState::new(settings.navigation.initial_section),
            mobile_menu: MobileMenuState::default(),
            feedback: ClipboardFeedbackState::new(settings.feedback.reset_after_ms),
            settings,
        }
    }

    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }

    pub fn active_section(&self) -> Section {
        self.navigation.active()
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu.is_open()
    }

    pub fn is_copied(&self, text: &str) -> bool {
        self.feedback.is_copied(text)
    }

    pub fn copied_text(&self) -> Option<&str> {
        self.feedback.copied_text()
    }

    pub fn pending_reset(&self) -> Option<ResetTicket> {
        self.feedback.pending_reset()
    }
}
