use leptos::prelude::*;
use mocli_core::content::{features, HERO};

use crate::components::code_block::CodeBlock;
use crate::components::icons::{accent_hover_border, accent_text, accent_tile, icon_view, Zap};

#[component]
pub fn GettingStarted() -> impl IntoView {
    view! {
        <section class="py-20 px-4">
            <div class="max-w-4xl mx-auto text-center">
                <div class="inline-flex items-center space-x-2 bg-emerald-500/10 border border-emerald-500/20 rounded-full px-4 py-2 mb-8">
                    <Zap class="w-4 h-4 text-emerald-400" />
                    <span class="text-sm text-emerald-400">{HERO.badge}</span>
                </div>

                <h2 class="text-5xl md:text-6xl font-bold mb-6 bg-gradient-to-r from-white via-gray-200 to-gray-400 bg-clip-text text-transparent">
                    {HERO.headline}
                </h2>

                <p class="text-xl text-gray-400 mb-12 max-w-2xl mx-auto">{HERO.lead}</p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-16">
                    <CodeBlock example=HERO.install />
                </div>

                <div class="grid md:grid-cols-3 gap-6 text-left">
                    {features().iter().map(|feat| {
                        let card_class = format!(
                            "bg-gray-900/50 border border-gray-800 rounded-xl p-6 {} transition-all",
                            accent_hover_border(feat.accent)
                        );
                        let tile_class = format!(
                            "w-12 h-12 {} rounded-lg flex items-center justify-center mb-4",
                            accent_tile(feat.accent)
                        );
                        let icon_class = format!("w-6 h-6 {}", accent_text(feat.accent));
                        view! {
                            <div class=card_class>
                                <div class=tile_class>{icon_view(feat.icon, icon_class)}</div>
                                <h3 class="text-lg font-semibold mb-2">{feat.title}</h3>
                                <p class="text-gray-400 text-sm">{feat.desc}</p>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
