use leptos::prelude::*;
use mocli_core::content::{env_vars, CONFIG_FILE_NAME, CONFIG_SAMPLE};
use mocli_core::Section;

use super::PanelHeading;

#[component]
pub fn ApiReference() -> impl IntoView {
    view! {
        <section class="py-20 px-4">
            <div class="max-w-5xl mx-auto">
                <PanelHeading section=Section::Api />

                <div class="bg-gray-900/50 border border-gray-800 rounded-xl p-8">
                    <h3 class="text-2xl font-semibold mb-6">"Configuration File"</h3>
                    <p class="text-gray-400 mb-4">
                        "Create a "
                        <code class="bg-gray-950 px-2 py-1 rounded text-emerald-400">{CONFIG_FILE_NAME}</code>
                        " in your project root:"
                    </p>

                    <div class="bg-gray-950 rounded-lg p-6 font-mono text-sm overflow-x-auto">
                        <pre class="text-gray-300">{CONFIG_SAMPLE}</pre>
                    </div>

                    <div class="mt-8">
                        <h4 class="text-xl font-semibold mb-4">"Environment Variables"</h4>
                        <div class="space-y-2">
                            {env_vars().iter().map(|var| view! {
                                <div class="bg-gray-950 rounded-lg p-4">
                                    <code class="text-cyan-400">{var.name}</code>
                                    <p class="text-sm text-gray-400 mt-1">{var.description}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
