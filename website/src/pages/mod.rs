pub mod api_reference;
pub mod commands;
pub mod examples;
pub mod getting_started;

use leptos::prelude::*;
use mocli_core::content;
use mocli_core::Section;

/// Centered title block shared by the reference panels
#[component]
fn PanelHeading(section: Section) -> impl IntoView {
    content::heading(section).map(|heading| {
        view! {
            <h2 class="text-4xl font-bold mb-4 text-center">{heading.title}</h2>
            <p class="text-gray-400 text-center mb-12">{heading.subtitle}</p>
        }
    })
}
