use leptos::prelude::*;

#[component]
pub fn Logo(on_click: impl Fn() + Send + Sync + 'static) -> impl IntoView {
    view! {
        <button class="logo text-2xl font-bold font-mono" on:click=move |_| on_click()>
            <span class="text-[var(--accent)]">"<"</span>
            "NP"
            <span class="text-[var(--accent)]">" />"</span>
        </button>
    }
}
