use leptos::{either::Either, ev, prelude::*};
use leptos_use::{use_event_listener, use_media_query, use_window, use_window_scroll};

use super::{dom::DomViewport, logo::Logo};
use crate::{
    navigation::{scroll_to_section, DrawerState, NavConfig},
    sections::{publish_active, SectionId, SectionTracker},
    theme::{use_theme, ThemeMode},
};

#[component]
pub fn Header() -> impl IntoView {
    let theme = use_theme();
    let config = StoredValue::new(expect_context::<NavConfig>());
    let tracker = StoredValue::new(config.with_value(|c| {
        SectionTracker::new(c.sections.clone(), c.detection_line)
    }));
    let active = RwSignal::new(None::<SectionId>);
    let (drawer, set_drawer) = signal(DrawerState::default());
    let is_narrow = use_media_query(config.with_value(|c| c.narrow_query.to_string()));
    let (_, scroll_y) = use_window_scroll();
    let elevated = move || scroll_y.get() > 0.0;

    let observe = move || {
        tracker.update_value(|t| {
            publish_active(t, &DomViewport, active);
        });
    };
    // effects only run in the browser, once the sections are mounted
    Effect::new(move |_| observe());
    // removed automatically when the header's owner is disposed
    let _ = use_event_listener(use_window(), ev::scroll, move |_| observe());

    let scroll_to = move |id: SectionId| {
        let narrow = is_narrow.get_untracked();
        let mut next = drawer.get_untracked();
        config.with_value(|c| scroll_to_section(&DomViewport, &mut next, narrow, id, c));
        if next != drawer.get_untracked() {
            set_drawer.set(next);
        }
    };
    let toggle_drawer = move |_| set_drawer.update(|d| d.toggle());
    let close_drawer = move |_| set_drawer.update(|d| d.close());

    let nav_class = move |id: SectionId| {
        if active.get() == Some(id) {
            "nav-link nav-link-active text-[var(--accent)]"
        } else {
            "nav-link text-[var(--text-primary)] hover:text-[var(--accent)]"
        }
    };

    let desktop_items = move || {
        config
            .with_value(|c| c.sections.clone())
            .into_iter()
            .map(|id| {
                view! {
                    <button class=move || nav_class(id) on:click=move |_| scroll_to(id)>
                        <span class="mr-2">{section_icon(id)}</span>
                        {id.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let drawer_items = config
        .with_value(|c| c.sections.clone())
        .into_iter()
        .map(|id| {
            view! {
                <li>
                    <button
                        class=move || format!("w-full text-left px-4 py-3 hover:bg-[var(--divider)] {}", nav_class(id))
                        on:click=move |_| scroll_to(id)
                    >
                        <span class="mr-4">{section_icon(id)}</span>
                        {id.label()}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class=move || {
            format!(
                "fixed top-0 inset-x-0 z-40 h-20 backdrop-blur-md border-b border-[var(--divider)] transition-all duration-300 {}",
                if elevated() { "header-elevated shadow-lg" } else { "" },
            )
        }>
            <div class="max-w-6xl mx-auto h-full px-4 flex items-center">
                <Logo on_click=move || scroll_to(SectionId::Home) />
                <div class="flex-grow"></div>
                <Show when=move || !is_narrow.get()>
                    <nav class="flex gap-4">{desktop_items}</nav>
                </Show>
                <ThemeToggle mode=Signal::derive(move || theme.mode()) on_toggle=move || theme.toggle() />
                <Show when=move || is_narrow.get()>
                    <button
                        class="ml-4 p-2 rounded-full theme-button"
                        aria-label="open drawer"
                        on:click=toggle_drawer
                    >
                        "☰"
                    </button>
                </Show>
            </div>
        </header>
        <div class="h-20"></div>
        <Show when=move || drawer.get().is_open()>
            <div class="fixed inset-0 z-40 bg-black/40" on:click=close_drawer></div>
        </Show>
        <aside class=move || {
            format!(
                "fixed top-0 right-0 z-50 h-full w-60 bg-[var(--bg-paper)] border-l border-[var(--divider)] transition-transform duration-300 {}",
                if drawer.get().is_open() { "translate-x-0" } else { "translate-x-full" },
            )
        }>
            <div class="text-right p-2">
                <button class="p-2" aria-label="close drawer" on:click=close_drawer>
                    "✕"
                </button>
            </div>
            <ul>
                {drawer_items}
                <li class="px-4 py-3">
                    <button class="w-full theme-button rounded-md py-2" on:click=move |_| theme.toggle()>
                        {move || {
                            if theme.mode().is_dark() { "☀ Light Mode" } else { "☾ Dark Mode" }
                        }}
                    </button>
                </li>
            </ul>
        </aside>
    }
}

#[component]
fn ThemeToggle(
    #[prop(into)] mode: Signal<ThemeMode>,
    on_toggle: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <button
            class="ml-4 p-2 rounded-full theme-button hover:rotate-180 transition-transform duration-300"
            title=move || format!("Switch to {} mode", mode.get().toggled())
            on:click=move |_| on_toggle()
        >
            {move || {
                if mode.get().is_dark() {
                    Either::Left(view! { <span aria-label="light mode">"☀"</span> })
                } else {
                    Either::Right(view! { <span aria-label="dark mode">"☾"</span> })
                }
            }}
        </button>
    }
}

fn section_icon(id: SectionId) -> &'static str {
    match id {
        SectionId::Home => "⌂",
        SectionId::About => "☺",
        SectionId::Skills => "</>",
        SectionId::Experience => "🎓",
        SectionId::Projects => "💼",
        SectionId::Contact => "✉",
    }
}
