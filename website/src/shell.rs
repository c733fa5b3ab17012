//! Browser host for the docs shell state
//!
//! [`ShellHandle`] is provided as context at the root of the page. Components
//! read state through [`ShellHandle::with`] and send user actions through the
//! named methods; clipboard writes and the feedback timer are performed here.

use leptos::prelude::*;
use mocli_app::{process_message, DocsState, Effects, Message, Millis, ResetTicket, ShellSettings};
use mocli_core::{Error, Section};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[derive(Clone, Copy)]
pub struct ShellHandle {
    state: RwSignal<DocsState>,
    /// Browser handle of the one outstanding feedback reset
    pending_reset: StoredValue<Option<i32>>,
}

impl ShellHandle {
    pub fn new(settings: ShellSettings) -> Self {
        Self {
            state: RwSignal::new(DocsState::new(settings)),
            pending_reset: StoredValue::new(None),
        }
    }

    /// Read the state, tracking it for reactivity
    pub fn with<R>(&self, f: impl FnOnce(&DocsState) -> R) -> R {
        self.state.with(f)
    }

    pub fn dispatch(&self, message: Message) {
        let effects = *self;
        self.state
            .update(|state| process_message(state, message, &effects));
    }

    pub fn choose_section(&self, section: Section) {
        self.dispatch(Message::ChooseSection(section));
    }

    pub fn choose_section_from_menu(&self, section: Section) {
        self.dispatch(Message::ChooseSectionFromMenu(section));
    }

    pub fn toggle_mobile_menu(&self) {
        self.dispatch(Message::ToggleMobileMenu);
    }

    pub fn copy_snippet(&self, text: &str) {
        self.dispatch(Message::CopySnippet {
            text: text.to_string(),
            now: now_ms(),
        });
    }
}

impl Effects for ShellHandle {
    fn write_clipboard(&self, text: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("{}", Error::clipboard("no window"));
            return;
        };
        let promise = window.navigator().clipboard().write_text(text);
        leptos::task::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("{}", Error::clipboard(format!("{e:?}")));
            }
        });
    }

    fn schedule_feedback_reset(&self, ticket: ResetTicket, delay_ms: Millis) {
        let Some(window) = web_sys::window() else {
            return;
        };

        if let Some(handle) = self.pending_reset.get_value() {
            window.clear_timeout_with_handle(handle);
        }

        let shell = *self;
        let cb = Closure::once(move || {
            shell.pending_reset.set_value(None);
            shell.dispatch(Message::ResetCopyFeedback(ticket));
        });
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            timeout,
        ) {
            Ok(handle) => self.pending_reset.set_value(Some(handle)),
            Err(e) => log::warn!("Failed to schedule copy feedback reset: {e:?}"),
        }
        cb.forget();
    }
}

/// Page-relative monotonic clock
fn now_ms() -> Millis {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now() as Millis)
        .unwrap_or(0)
}
