//! Active documentation section

use mocli_core::Section;

/// Which section panel is visible
///
/// There is no guard on transitions: every section is reachable from every
/// other section, and nothing changes the active section except an explicit
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    active: Section,
}

impl NavigationState {
    pub fn new(initial: Section) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Replace the active section. Returns `true` if it changed.
    pub fn select(&mut self, section: Section) -> bool {
        let changed = self.active != section;
        self.active = section;
        changed
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_getting_started() {
        assert_eq!(NavigationState::default().active(), Section::GettingStarted);
    }

    #[test]
    fn test_every_section_reachable_from_every_section() {
        for from in Section::ALL {
            for to in Section::ALL {
                let mut nav = NavigationState::new(from);
                nav.select(to);
                assert_eq!(nav.active(), to);
                assert!(nav.is_active(to));
            }
        }
    }

    #[test]
    fn test_select_reports_change() {
        let mut nav = NavigationState::default();
        assert!(nav.select(Section::Api));
        assert!(!nav.select(Section::Api));
        assert_eq!(nav.active(), Section::Api);
    }
}
