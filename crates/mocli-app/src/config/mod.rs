//! Settings for the docs shell
//!
//! The only settings source is `shell.toml`, bundled into the page at build
//! time. There are no environment variables and nothing is persisted.

pub mod settings;
pub mod types;

pub use settings::{parse_settings, settings_or_default};
pub use types::*;
