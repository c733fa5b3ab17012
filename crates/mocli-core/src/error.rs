//! Error types for the docs shell

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Docs shell error types organized by layer
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Navigation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown documentation section: {id:?}")]
    UnknownSection { id: String },

    // ─────────────────────────────────────────────────────────────
    // Host Environment Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Clipboard write failed: {message}")]
    Clipboard { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn unknown_section(id: impl Into<String>) -> Self {
        Self::UnknownSection { id: id.into() }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Clipboard failures are swallowed after logging, and a broken bundled
    /// settings file falls back to defaults.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Clipboard { .. }
                | Error::Toml(_)
                | Error::Config { .. }
                | Error::ConfigInvalid { .. }
        )
    }

    /// Check if this error should stop the page from mounting
    ///
    /// Nothing in the shell is fatal; an unknown section id is a caller bug
    /// and is reported, not escalated.
    pub fn is_fatal(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_section_display() {
        let err = Error::unknown_section("faq");
        assert_eq!(err.to_string(), "Unknown documentation section: \"faq\"");
    }

    #[test]
    fn test_clipboard_error_is_recoverable() {
        let err = Error::clipboard("permission denied");
        assert!(err.is_recoverable());
        assert!(!err.is_fatal());
        assert_eq!(
            err.to_string(),
            "Clipboard write failed: permission denied"
        );
    }

    #[test]
    fn test_unknown_section_is_not_recoverable() {
        let err = Error::unknown_section("nope");
        assert!(!err.is_recoverable());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_toml_error_converts() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = [valid");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Toml(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_config_invalid_display() {
        let err = Error::config_invalid("reset_after_ms must be greater than 0");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: reset_after_ms must be greater than 0"
        );
    }
}
