//! Message processing
//!
//! Runs a message through the TEA update function and hands any resulting
//! action to the host's [`Effects`].

use crate::effects::Effects;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::DocsState;

/// Process a message through the TEA update function
pub fn process_message<E: Effects + ?Sized>(state: &mut DocsState, message: Message, effects: &E) {
    let result = handler::update(state, message);

    if let Some(action) = result.action {
        handle_action(action, effects);
    }
}

fn handle_action<E: Effects + ?Sized>(action: UpdateAction, effects: &E) {
    match action {
        UpdateAction::CopyToClipboard {
            text,
            reset,
            delay_ms,
        } => {
            effects.write_clipboard(&text);
            effects.schedule_feedback_reset(reset, delay_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::MockEffects;
    use mocli_core::Section;
    use mockall::predicate::eq;
    use mockall::Sequence;

    #[test]
    fn test_copy_writes_then_schedules() {
        let mut state = DocsState::default();
        let mut effects = MockEffects::new();
        let mut seq = Sequence::new();

        effects
            .expect_write_clipboard()
            .withf(|text: &str| text == "my-own-cli docs generate --format markdown")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        effects
            .expect_schedule_feedback_reset()
            .withf(|ticket, delay_ms| ticket.due_at() == 2100 && *delay_ms == 2000)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        process_message(
            &mut state,
            Message::CopySnippet {
                text: "my-own-cli docs generate --format markdown".to_string(),
                now: 100,
            },
            &effects,
        );

        assert!(state.is_copied("my-own-cli docs generate --format markdown"));
    }

    #[test]
    fn test_navigation_has_no_effects() {
        let mut state = DocsState::default();
        let mut effects = MockEffects::new();
        effects.expect_write_clipboard().never();
        effects.expect_schedule_feedback_reset().never();

        process_message(&mut state, Message::ToggleMobileMenu, &effects);
        process_message(
            &mut state,
            Message::ChooseSectionFromMenu(Section::Commands),
            &effects,
        );
        process_message(&mut state, Message::Tick { now: 10 }, &effects);

        assert_eq!(state.active_section(), Section::Commands);
        assert!(!state.is_mobile_menu_open());
    }

    #[test]
    fn test_each_copy_schedules_a_fresh_reset() {
        let mut state = DocsState::default();
        let mut effects = MockEffects::new();
        effects.expect_write_clipboard().times(2).return_const(());
        effects
            .expect_schedule_feedback_reset()
            .with(mockall::predicate::always(), eq(2000u64))
            .times(2)
            .return_const(());

        process_message(
            &mut state,
            Message::CopySnippet {
                text: "X".to_string(),
                now: 0,
            },
            &effects,
        );
        let first = state.pending_reset().unwrap();

        process_message(
            &mut state,
            Message::CopySnippet {
                text: "Y".to_string(),
                now: 10,
            },
            &effects,
        );
        let second = state.pending_reset().unwrap();

        assert_ne!(first.generation(), second.generation());
        assert!(state.is_copied("Y"));
    }
}
