//! Narrow-viewport navigation overlay

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenuState {
    open: bool,
}

impl MobileMenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Force closed. Idempotent.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!MobileMenuState::default().is_open());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut menu = MobileMenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());

        let mut menu = MobileMenuState { open: true };
        menu.toggle();
        menu.toggle();
        assert!(menu.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = MobileMenuState::default();
        menu.close();
        assert_eq!(menu, MobileMenuState::default());

        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }
}
