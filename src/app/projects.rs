use leptos::prelude::*;

use crate::{profile::PROJECTS, sections::SectionId, theme::use_theme};

#[component]
pub fn Projects() -> impl IntoView {
    let theme = use_theme();
    let card_shadow = move || {
        if theme.mode().is_dark() {
            "shadow-[0_4px_20px_rgba(0,0,0,0.4)] hover:shadow-[0_8px_30px_rgba(0,0,0,0.5)]"
        } else {
            "shadow-[0_4px_20px_rgba(0,0,0,0.1)] hover:shadow-[0_8px_30px_rgba(0,0,0,0.15)]"
        }
    };

    view! {
        <section
            id=SectionId::Projects.as_str()
            class="relative py-24 scroll-mt-16 bg-[var(--bg-paper)] section-content"
        >
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="section-title text-3xl md:text-5xl font-bold mb-12 text-center">
                    "Featured Projects"
                </h2>
                <div class="grid gap-8 md:grid-cols-2">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <article class=move || {
                                    format!(
                                        "card rounded-xl overflow-hidden bg-[var(--bg-default)] transition-all duration-300 hover:-translate-y-1 {}",
                                        card_shadow(),
                                    )
                                }>
                                    <div class="relative overflow-hidden h-48">
                                        <img
                                            src=project.image
                                            alt=project.title
                                            class="w-full h-full object-cover transition-transform duration-500 hover:scale-110"
                                        />
                                    </div>
                                    <div class="p-6">
                                        <h3 class="text-2xl font-semibold mb-3">{project.title}</h3>
                                        <p class="text-[var(--text-secondary)] mb-4">
                                            {project.description}
                                        </p>
                                        <ul class="space-y-1 mb-4">
                                            {project
                                                .features
                                                .iter()
                                                .map(|f| {
                                                    view! {
                                                        <li class="text-sm">
                                                            <span class="text-[var(--accent)] mr-2">"▹"</span>
                                                            {*f}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                        <div class="flex flex-wrap gap-2 mb-6">
                                            {project
                                                .tech
                                                .iter()
                                                .map(|t| {
                                                    view! {
                                                        <span class="chip px-2 py-1 rounded text-xs">{*t}</span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        <div class="flex gap-4">
                                            <a
                                                href=project.live_link
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="px-4 py-2 rounded-md bg-[var(--accent)] text-[#0a192f] font-medium"
                                            >
                                                "Live Demo"
                                            </a>
                                            <a
                                                href=project.github_link
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="px-4 py-2 rounded-md border-2 border-[var(--accent)] text-[var(--accent)] font-medium"
                                            >
                                                <i class="devicon-github-plain mr-2"></i>
                                                "Code"
                                            </a>
                                        </div>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
