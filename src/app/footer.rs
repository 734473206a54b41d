use chrono::{Datelike, Utc};
use leptos::prelude::*;

use super::{dom::DomViewport, logo::Logo};
use crate::{
    navigation::scroll_to_top,
    profile::{NAME, SOCIAL_LINKS},
};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-10 border-t border-[var(--divider)]">
            <div class="max-w-6xl mx-auto px-4 flex flex-col items-center gap-4">
                <Logo on_click=move || scroll_to_top(&DomViewport) />
                <div class="flex gap-6">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|(label, icon, url)| {
                            view! {
                                <a
                                    href=*url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=*label
                                    class="text-2xl text-[var(--text-secondary)] hover:text-[var(--accent)] transition-all duration-300 hover:-translate-y-1"
                                >
                                    <i class=*icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="font-mono text-sm bg-gradient-to-r from-[var(--accent)] to-[var(--text-secondary)] bg-clip-text text-transparent">
                    {format!("Designed & Built by {NAME}")}
                </p>
                <p class="font-mono text-xs text-[var(--text-secondary)] opacity-70">
                    {format!("© {} All rights reserved", Utc::now().year())}
                </p>
            </div>
        </footer>
    }
}
