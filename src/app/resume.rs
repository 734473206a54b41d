use leptos::prelude::*;

use crate::{
    profile::{EntryKind, TimelineEntry, OTHER_SKILLS, SKILLS, TIMELINE},
    sections::SectionId,
};

use super::background::{BackgroundEffect, Corner};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section
            id=SectionId::Skills.as_str()
            class="relative overflow-hidden py-24 scroll-mt-16 bg-[var(--bg-paper)] section-content"
        >
            <BackgroundEffect corner=Corner::BottomLeft />
            <div class="relative z-10 max-w-6xl mx-auto px-4">
                <h2 class="section-title text-3xl md:text-5xl font-bold mb-12 text-center">
                    "My Skills"
                </h2>
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="card p-6 rounded-xl bg-[var(--bg-default)] transition-all duration-300 hover:-translate-y-1">
                                    <div
                                        class="w-12 h-12 mb-4 rounded-lg flex items-center justify-center font-bold"
                                        style=format!("color: {0}; border: 2px solid {0};", skill.color)
                                    >
                                        {skill.title.chars().next().map(String::from)}
                                    </div>
                                    <h3 class="text-xl font-semibold mb-2">{skill.title}</h3>
                                    <p class="text-[var(--text-secondary)]">{skill.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <h3 class="text-2xl font-semibold mt-16 mb-6 text-center">"Other Skills"</h3>
                <div class="flex flex-wrap justify-center gap-3">
                    {OTHER_SKILLS
                        .iter()
                        .map(|(name, category)| {
                            view! {
                                <span class="chip px-3 py-1 rounded-md text-sm" title=*category>
                                    {*name}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section
            id=SectionId::Experience.as_str()
            class="relative py-24 scroll-mt-16 section-content"
        >
            <div class="max-w-5xl mx-auto px-4">
                <h2 class="section-title text-3xl md:text-5xl font-bold mb-12 text-center">
                    "Experience & Education"
                </h2>
                <ol class="relative border-l-2 border-[var(--accent)]/40 ml-4">
                    {TIMELINE.iter().map(|entry| view! { <TimelineItem entry /> }).collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(entry: &'static TimelineEntry) -> impl IntoView {
    let badge = match entry.kind {
        EntryKind::Work => "bg-[#64ffda]/20 text-[#64ffda]",
        EntryKind::Education => "bg-[#0ea5e9]/20 text-[#0ea5e9]",
        EntryKind::Project => "bg-[#f59e0b]/20 text-[#f59e0b]",
    };
    view! {
        <li class="mb-12 ml-8">
            <span class="absolute -left-5 flex items-center justify-center w-10 h-10 rounded-full bg-[var(--bg-paper)] border-2 border-[var(--accent)]">
                {entry.kind.icon()}
            </span>
            <div class="card p-6 rounded-xl bg-[var(--bg-paper)] transition-all duration-300 hover:-translate-y-1">
                <div class="flex flex-wrap items-center gap-3 mb-1">
                    <h3 class="text-xl font-semibold">{entry.title}</h3>
                    <span class=format!("px-2 py-0.5 rounded text-xs font-medium {badge}")>
                        {entry.kind.label()}
                    </span>
                </div>
                <p class="text-[var(--accent)] font-medium">{entry.organization}</p>
                <p class="text-sm font-mono text-[var(--text-secondary)] mb-4">{entry.duration}</p>
                <ul class="list-disc ml-5 space-y-1 text-[var(--text-secondary)]">
                    {entry.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                </ul>
                <div class="flex flex-wrap gap-2 mt-4">
                    {entry
                        .technologies
                        .iter()
                        .map(|t| view! { <span class="chip px-2 py-1 rounded text-xs">{*t}</span> })
                        .collect_view()}
                </div>
            </div>
        </li>
    }
}
