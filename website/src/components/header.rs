use leptos::prelude::*;
use mocli_core::content::{PRODUCT_NAME, TAGLINE};
use mocli_core::Section;

use super::icons::{Menu, Terminal, X};
use crate::shell::ShellHandle;

#[component]
pub fn Header() -> impl IntoView {
    let shell = expect_context::<ShellHandle>();
    let menu_open = Memo::new(move |_| shell.with(|state| state.is_mobile_menu_open()));

    view! {
        <header class="border-b border-gray-800 bg-gray-900/50 backdrop-blur-xl sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-3">
                        <div class="w-10 h-10 bg-gradient-to-br from-emerald-400 to-cyan-400 rounded-lg flex items-center justify-center">
                            <Terminal class="w-6 h-6 text-gray-900" />
                        </div>
                        <div>
                            <h1 class="text-xl font-bold bg-gradient-to-r from-emerald-400 to-cyan-400 bg-clip-text text-transparent">
                                {PRODUCT_NAME}
                            </h1>
                            <p class="text-xs text-gray-400">{TAGLINE}</p>
                        </div>
                    </div>

                    <nav class="hidden md:flex space-x-1">
                        {Section::ALL.into_iter().map(|section| {
                            view! { <NavButton section=section from_menu=false /> }
                        }).collect_view()}
                    </nav>

                    <button
                        on:click=move |_| shell.toggle_mobile_menu()
                        class="md:hidden p-2 hover:bg-gray-800 rounded-lg"
                    >
                        {move || {
                            if menu_open.get() {
                                view! { <X class="w-6 h-6" /> }.into_any()
                            } else {
                                view! { <Menu class="w-6 h-6" /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>

            // Mobile Menu
            <Show when=move || menu_open.get()>
                <div class="md:hidden border-t border-gray-800 bg-gray-900">
                    <nav class="px-4 py-4 space-y-2">
                        {Section::ALL.into_iter().map(|section| {
                            view! { <NavButton section=section from_menu=true /> }
                        }).collect_view()}
                    </nav>
                </div>
            </Show>
        </header>
    }
}

/// One navigation entry. Entries in the mobile overlay dismiss it on click.
#[component]
fn NavButton(section: Section, from_menu: bool) -> impl IntoView {
    let shell = expect_context::<ShellHandle>();
    let is_active = move || shell.with(|state| state.active_section() == section);

    view! {
        <button
            on:click=move |_| {
                if from_menu {
                    shell.choose_section_from_menu(section);
                } else {
                    shell.choose_section(section);
                }
            }
            class=move || {
                match (from_menu, is_active()) {
                    (false, true) => "px-4 py-2 rounded-lg transition-all bg-emerald-500/20 text-emerald-400",
                    (false, false) => "px-4 py-2 rounded-lg transition-all text-gray-400 hover:text-gray-200 hover:bg-gray-800",
                    (true, true) => "w-full text-left px-4 py-2 rounded-lg transition-all bg-emerald-500/20 text-emerald-400",
                    (true, false) => "w-full text-left px-4 py-2 rounded-lg transition-all text-gray-400 hover:bg-gray-800",
                }
            }
        >
            {section.display_name()}
        </button>
    }
}
