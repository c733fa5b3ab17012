pub mod components;
pub mod pages;
pub mod shell;

use components::footer::Footer;
use components::header::Header;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use mocli_app::config::settings_or_default;
use mocli_core::content::{HERO, PRODUCT_NAME, TAGLINE};
use mocli_core::Section;
use pages::api_reference::ApiReference;
use pages::commands::Commands;
use pages::examples::Examples;
use pages::getting_started::GettingStarted;
use shell::ShellHandle;

const SHELL_SETTINGS: &str = include_str!("../shell.toml");

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let shell = ShellHandle::new(settings_or_default(SHELL_SETTINGS));
    provide_context(shell);

    let active = Memo::new(move |_| shell.with(|state| state.active_section()));

    view! {
        <Title text=format!("{PRODUCT_NAME} \u{2014} {TAGLINE}") />
        <Meta name="description" content=HERO.lead />
        <ScrollToTop active=active />
        <div class="min-h-screen bg-gradient-to-br from-gray-950 via-gray-900 to-gray-950 text-gray-100">
            <Header />
            {move || match active.get() {
                Section::GettingStarted => view! { <GettingStarted /> }.into_any(),
                Section::Commands => view! { <Commands /> }.into_any(),
                Section::Examples => view! { <Examples /> }.into_any(),
                Section::Api => view! { <ApiReference /> }.into_any(),
            }}
            <Footer />
        </div>
    }
}

#[component]
fn ScrollToTop(active: Memo<Section>) -> impl IntoView {
    Effect::new(move || {
        let _ = active.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    ()
}
