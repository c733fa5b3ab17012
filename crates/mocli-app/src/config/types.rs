//! Settings types for the docs shell
//!
//! Defines:
//! - `ShellSettings` - Root of the bundled `shell.toml`
//! - `NavigationSettings`, `FeedbackSettings` - Its tables

use mocli_core::prelude::*;
use mocli_core::Section;
use serde::{Deserialize, Serialize};

use crate::feedback::{Millis, DEFAULT_RESET_AFTER_MS};

/// Shell settings (`shell.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShellSettings {
    #[serde(default)]
    pub navigation: NavigationSettings,

    #[serde(default)]
    pub feedback: FeedbackSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavigationSettings {
    /// Section shown when the page mounts
    #[serde(default)]
    pub initial_section: Section,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedbackSettings {
    /// How long the copied indicator stays up, in milliseconds
    #[serde(default = "default_reset_after_ms")]
    pub reset_after_ms: Millis,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            reset_after_ms: default_reset_after_ms(),
        }
    }
}

fn default_reset_after_ms() -> Millis {
    DEFAULT_RESET_AFTER_MS
}

impl ShellSettings {
    pub fn validate(&self) -> Result<()> {
        if self.feedback.reset_after_ms == 0 {
            return Err(Error::config_invalid(
                "feedback.reset_after_ms must be greater than 0",
            ));
        }
        Ok(())
    }
}
