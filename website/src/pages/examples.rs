use leptos::prelude::*;
use mocli_core::content::{workflows, Step, Workflow};
use mocli_core::Section;

use super::PanelHeading;
use crate::components::code_block::CodeBlock;
use crate::components::icons::{accent_text, ArrowRight};

#[component]
pub fn Examples() -> impl IntoView {
    view! {
        <section class="py-20 px-4">
            <div class="max-w-5xl mx-auto">
                <PanelHeading section=Section::Examples />

                <div class="space-y-8">
                    {workflows().iter().map(|workflow| view! { <WorkflowCard workflow=*workflow /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn WorkflowCard(workflow: Workflow) -> impl IntoView {
    let arrow_class = format!("w-5 h-5 mr-2 {}", accent_text(workflow.accent));

    view! {
        <div class="bg-gray-900/50 border border-gray-800 rounded-xl p-6">
            <h3 class="text-xl font-semibold mb-4 flex items-center">
                <ArrowRight class=arrow_class />
                {workflow.title}
            </h3>
            <div class="space-y-3">
                {workflow.steps.iter().map(|step| match *step {
                    Step::Snippet(text) => view! { <CodeBlock example=text /> }.into_any(),
                    Step::Note(text) => view! { <p class="text-sm text-gray-400 pl-4">{text}</p> }.into_any(),
                }).collect_view()}
            </div>
        </div>
    }
}
