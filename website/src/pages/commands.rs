use leptos::prelude::*;
use mocli_core::{commands, CommandRecord, Section};

use super::PanelHeading;
use crate::components::code_block::CodeBlock;

#[component]
pub fn Commands() -> impl IntoView {
    view! {
        <section class="py-20 px-4">
            <div class="max-w-5xl mx-auto">
                <PanelHeading section=Section::Commands />

                <div class="space-y-6">
                    {commands().iter().map(|cmd| view! { <CommandCard cmd=*cmd /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CommandCard(cmd: CommandRecord) -> impl IntoView {
    view! {
        <div class="bg-gray-900/50 border border-gray-800 rounded-xl p-6 hover:border-emerald-500/30 transition-all">
            <div class="flex items-start justify-between mb-4">
                <div>
                    <h3 class="text-2xl font-bold text-emerald-400 mb-2">{cmd.name}</h3>
                    <p class="text-gray-300 mb-4">{cmd.description}</p>
                </div>
            </div>

            <div class="space-y-3">
                <div>
                    <span class="text-sm text-gray-500 uppercase tracking-wide">"Usage"</span>
                    <div class="mt-2 bg-gray-950 rounded-lg p-3 font-mono text-sm text-cyan-400">
                        {cmd.usage}
                    </div>
                </div>

                <div>
                    <span class="text-sm text-gray-500 uppercase tracking-wide">"Example"</span>
                    <div class="mt-2">
                        <CodeBlock example=cmd.example />
                    </div>
                </div>
            </div>
        </div>
    }
}
