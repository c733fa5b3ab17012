//! Presentational tokens
//!
//! The core never draws anything. It only names which glyph and accent a
//! piece of content wants, and the view maps the token to artwork.

/// Glyph token attached to sections and content blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Terminal,
    Command,
    Zap,
    BookOpen,
    Code,
    ArrowRight,
    Menu,
    X,
    Copy,
    Check,
}

/// Accent color family for cards and headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accent {
    #[default]
    Emerald,
    Cyan,
    Purple,
}
