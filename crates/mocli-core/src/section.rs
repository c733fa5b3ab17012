//! Top-level documentation sections
//!
//! The set of sections is closed and fixed at build time. Every section is
//! reachable from every other one, so there is no hierarchy to model here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::icon::Icon;

/// One of the four documentation views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    /// Hero copy, install snippet and feature cards
    #[default]
    GettingStarted,
    /// The command reference, projected from the catalog
    Commands,
    /// Workflow walkthroughs
    Examples,
    /// Configuration file and environment variables
    Api,
}

impl Section {
    /// All sections in navigation order
    pub const ALL: [Section; 4] = [
        Section::GettingStarted,
        Section::Commands,
        Section::Examples,
        Section::Api,
    ];

    /// Stable identifier, also used in settings files
    pub fn id(&self) -> &'static str {
        match self {
            Section::GettingStarted => "getting-started",
            Section::Commands => "commands",
            Section::Examples => "examples",
            Section::Api => "api",
        }
    }

    /// Human label shown in the navigation
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::GettingStarted => "Getting Started",
            Section::Commands => "Commands",
            Section::Examples => "Examples",
            Section::Api => "API Reference",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Section::GettingStarted => Icon::Zap,
            Section::Commands => Icon::Command,
            Section::Examples => Icon::Code,
            Section::Api => Icon::BookOpen,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.id() == s)
            .ok_or_else(|| Error::unknown_section(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_getting_started() {
        assert_eq!(Section::default(), Section::GettingStarted);
    }

    #[test]
    fn test_ids_round_trip_through_from_str() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        let err = "faq".parse::<Section>().unwrap_err();
        assert!(matches!(err, Error::UnknownSection { ref id } if id == "faq"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Commands".parse::<Section>().is_err());
        assert!("getting_started".parse::<Section>().is_err());
    }

    #[test]
    fn test_display_names() {
        let names: Vec<_> = Section::ALL.iter().map(|s| s.display_name()).collect();
        assert_eq!(
            names,
            vec!["Getting Started", "Commands", "Examples", "API Reference"]
        );
    }

    #[test]
    fn test_icons() {
        assert_eq!(Section::GettingStarted.icon(), Icon::Zap);
        assert_eq!(Section::Commands.icon(), Icon::Command);
        assert_eq!(Section::Examples.icon(), Icon::Code);
        assert_eq!(Section::Api.icon(), Icon::BookOpen);
    }

    #[test]
    fn test_serde_uses_kebab_case_ids() {
        #[derive(Deserialize)]
        struct Wrapper {
            section: Section,
        }

        let parsed: Wrapper = toml::from_str("section = \"getting-started\"").unwrap();
        assert_eq!(parsed.section, Section::GettingStarted);

        let parsed: Wrapper = toml::from_str("section = \"api\"").unwrap();
        assert_eq!(parsed.section, Section::Api);
    }
}
