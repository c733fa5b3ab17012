use leptos::prelude::*;

use super::icons::{Check, Copy};
use crate::shell::ShellHandle;

/// Shell snippet with a copy button
///
/// `example` is both what is displayed and what is copied, so the copied
/// indicator compares against exactly the rendered text.
#[component]
pub fn CodeBlock(example: &'static str) -> impl IntoView {
    let shell = expect_context::<ShellHandle>();
    let copied = move || shell.with(|state| state.is_copied(example));

    view! {
        <div class="bg-gray-900 rounded-lg p-4 font-mono text-sm relative group">
            <div class="flex items-center justify-between mb-2">
                <span class="text-emerald-400">"$"</span>
                <button
                    on:click=move |_| shell.copy_snippet(example)
                    class="opacity-0 group-hover:opacity-100 transition-opacity p-1 hover:bg-gray-800 rounded"
                >
                    {move || {
                        if copied() {
                            view! { <Check class="w-4 h-4 text-emerald-400" /> }.into_any()
                        } else {
                            view! { <Copy class="w-4 h-4 text-gray-400" /> }.into_any()
                        }
                    }}
                </button>
            </div>
            <code class="text-gray-300">{example}</code>
        </div>
    }
}
