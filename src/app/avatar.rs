use leptos::prelude::*;

use crate::{profile::NAME, theme::use_theme};

#[component]
pub fn Avatar() -> impl IntoView {
    let theme = use_theme();
    let initials = NAME
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect::<String>();

    view! {
        <div class="relative w-64 h-64 md:w-80 md:h-80">
            <div class="absolute inset-0 rounded-full border-2 border-[var(--accent)] animate-spin-slow opacity-60"></div>
            <div class="absolute inset-4 rounded-full border border-dashed border-[var(--text-secondary)] animate-spin-reverse opacity-40"></div>
            <div class=move || {
                format!(
                    "absolute inset-8 rounded-full flex items-center justify-center text-6xl font-bold font-mono shadow-2xl {}",
                    if theme.mode().is_dark() {
                        "bg-gradient-to-br from-[#112240] to-[#0a192f] text-[#64ffda]"
                    } else {
                        "bg-gradient-to-br from-white to-[#f1f5f9] text-[#0ea5e9]"
                    },
                )
            }>{initials}</div>
        </div>
    }
}
