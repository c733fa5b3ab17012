//! Section selection and mobile overlay handlers

use mocli_core::prelude::*;
use mocli_core::Section;

use crate::state::DocsState;

use super::UpdateResult;

pub(crate) fn handle_choose_section(state: &mut DocsState, section: Section) -> UpdateResult {
    if state.navigation.select(section) {
        debug!("Active section: {}", section);
    }
    UpdateResult::none()
}

/// Overlay navigation: the overlay must never outlive a successful selection,
/// so both slots change in the same update.
pub(crate) fn handle_choose_section_from_menu(
    state: &mut DocsState,
    section: Section,
) -> UpdateResult {
    state.mobile_menu.close();
    handle_choose_section(state, section)
}

pub(crate) fn handle_toggle_mobile_menu(state: &mut DocsState) -> UpdateResult {
    state.mobile_menu.toggle();
    trace!("Mobile menu open: {}", state.mobile_menu.is_open());
    UpdateResult::none()
}
