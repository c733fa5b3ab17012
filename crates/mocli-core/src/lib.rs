//! # mocli-core - Core Domain Types
//!
//! Foundation crate for the my-own-cli documentation shell. Provides the
//! section enumeration, the command catalog, the rest of the bundled prose,
//! and error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Sections (`section`)
//! - [`Section`] - The closed set of documentation views
//!
//! ### Catalog (`catalog`)
//! - [`CommandRecord`] - One documented subcommand
//! - [`commands()`] - The ordered, immutable catalog
//!
//! ### Content (`content`)
//! - [`content::HERO`], [`content::features()`], [`content::workflows()`],
//!   [`content::env_vars()`] - Literal prose for each panel
//! - [`copyable_snippets()`] - Every string a section offers to copy
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mocli_core::prelude::*;
//! ```

pub mod catalog;
pub mod content;
pub mod error;
pub mod icon;
pub mod section;

/// Prelude for common imports used throughout the shell crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{commands, CommandRecord};
pub use content::copyable_snippets;
pub use error::{Error, Result};
pub use icon::{Accent, Icon};
pub use section::Section;
