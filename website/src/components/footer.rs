use leptos::prelude::*;
use mocli_core::content::FOOTER_LINES;

#[component]
pub fn Footer() -> impl IntoView {
    let [tagline, copyright] = FOOTER_LINES;

    view! {
        <footer class="border-t border-gray-800 mt-20">
            <div class="max-w-7xl mx-auto px-4 py-12">
                <div class="text-center text-gray-400">
                    <p class="mb-2">{tagline}</p>
                    <p class="text-sm">{copyright}</p>
                </div>
            </div>
        </footer>
    }
}
