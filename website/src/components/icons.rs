//! Inline SVG glyphs (lucide outlines)

use leptos::prelude::*;
use mocli_core::{Accent, Icon};

/// Render the glyph for a content token
pub fn icon_view(icon: Icon, class: String) -> AnyView {
    match icon {
        Icon::Terminal => view! { <Terminal class=class /> }.into_any(),
        Icon::Command => view! { <Command class=class /> }.into_any(),
        Icon::Zap => view! { <Zap class=class /> }.into_any(),
        Icon::BookOpen => view! { <BookOpen class=class /> }.into_any(),
        Icon::Code => view! { <Code class=class /> }.into_any(),
        Icon::ArrowRight => view! { <ArrowRight class=class /> }.into_any(),
        Icon::Menu => view! { <Menu class=class /> }.into_any(),
        Icon::X => view! { <X class=class /> }.into_any(),
        Icon::Copy => view! { <Copy class=class /> }.into_any(),
        Icon::Check => view! { <Check class=class /> }.into_any(),
    }
}

pub fn accent_text(accent: Accent) -> &'static str {
    match accent {
        Accent::Emerald => "text-emerald-400",
        Accent::Cyan => "text-cyan-400",
        Accent::Purple => "text-purple-400",
    }
}

pub fn accent_tile(accent: Accent) -> &'static str {
    match accent {
        Accent::Emerald => "bg-emerald-500/10",
        Accent::Cyan => "bg-cyan-500/10",
        Accent::Purple => "bg-purple-500/10",
    }
}

pub fn accent_hover_border(accent: Accent) -> &'static str {
    match accent {
        Accent::Emerald => "hover:border-emerald-500/30",
        Accent::Cyan => "hover:border-cyan-500/30",
        Accent::Purple => "hover:border-purple-500/30",
    }
}

#[component]
pub fn Terminal(#[prop(into, default = "w-4 h-4".into())] class: String) -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class=class>
            <polyline points="4 17 10 11 4 5" />
            <line x1="12" x2="20" y1="19" y2="19" />
        </svg>
    }
}

#[component]
pub fn Command(#[prop(into, default = "w-4 h-4".into())] class: String) -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class=class>
            <path d="M15 6v12a3 3 0 1 0 3-3H6a3 3 0 1 0 3 3V6a3 3 0 1 0-3 3h12a3 3 0 1 0-3-3" />
        </svg>
    }
}

#[component]
pub fn Zap(#[prop(into, default = "w-4 h-4".into())] class: String) -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class=class>
            <path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z" />
        </svg>
    }
}

#[component]
pub fn BookOpen(#[prop(into, default = "w-4 h-4".into())] class: String) -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class=class>
            <path d="M12 7v14" />
            <path d="M3 18a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1h5a4 4 0 0 1 4 4 4 4 0 0 1 4-4h5a1 1 0 0 1 1 1v13a1 1 0 0 1-1 1h-6a3 3 0 0 0-3 3 3 3 0 0 0-3-3z" />
        </svg>
    }
}

#[component]
pub fn Code(#[prop(into, default = "w-4 h-4".into())] class: String) -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class=class>
            <polyline points="16 18 22 12 16 6" />
            <polyline points="8 6 2 12 8 18" />
        </svg>
    }
}

#[component]
pub fn ArrowRight(#[prop(into, default = "w-4 h-4".into())] class: String) -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class=class>
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        </svg>
    }
}

#[component]
pub fn Menu(#[prop(into, default = "w-4 h-4".into())] class: String) -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class=class>
            <line x1="4" x2="20" y1="6" y2="6" />
            <line x1="4" x2="20" y1="12" y2="12" />
            <line x1="4" x2="20" y1="18" y2="18" />
        </svg>
    }
}

#[component]
pub fn X(#[prop(into, default = "w-4 h-4".into())] class: String) -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class=class>
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        </svg>
    }
}

#[component]
pub fn Copy(#[prop(into, default = "w-4 h-4".into())] class: String) -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class=class>
            <rect width="14" height="14" x="8" y="8" rx="2" ry="2" />
            <path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2" />
        </svg>
    }
}

#[component]
pub fn Check(#[prop(into, default = "w-4 h-4".into())] class: String) -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class=class>
            <path d="M20 6 9 17l-5-5" />
        </svg>
    }
}
