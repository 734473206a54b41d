use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    profile::{ABOUT, NAME, ROLE, TAGLINE},
    sections::SectionId,
    theme::use_theme,
};

use super::{
    avatar::Avatar,
    background::{BackgroundEffect, Corner},
    contact::Contact,
    projects::Projects,
    resume::{Experience, Skills},
    testimonials::Testimonials,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Experience />
        <Projects />
        <Testimonials />
        <Contact />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let theme = use_theme();
    let heading_gradient = move || {
        if theme.mode().is_dark() {
            "from-[#64ffda] to-[#0ea5e9]"
        } else {
            "from-[#0ea5e9] to-[#14b8a6]"
        }
    };

    view! {
        <section
            id=SectionId::Home.as_str()
            class="relative overflow-hidden min-h-screen flex items-center section-content"
        >
            <BackgroundEffect corner=Corner::TopRight />
            <div class="relative z-10 max-w-6xl mx-auto px-4 grid gap-12 md:grid-cols-2 items-center">
                <div class="text-center md:text-left">
                    <h5 class="font-mono text-lg text-[var(--accent)] mb-2 animate-fade-in">
                        "Hi, I'm"
                    </h5>
                    <h1 class=move || {
                        format!(
                            "text-4xl md:text-6xl font-bold bg-gradient-to-r bg-clip-text text-transparent {}",
                            heading_gradient(),
                        )
                    }>{NAME}</h1>
                    <h2 class="text-2xl md:text-4xl font-bold text-[var(--text-secondary)] mt-2">
                        {ROLE}
                    </h2>
                    <p class="mt-6 text-lg leading-relaxed text-[var(--text-secondary)] border-l-2 border-[var(--accent)] pl-4">
                        {TAGLINE}
                    </p>
                    <a
                        href=SectionId::Projects.href()
                        class="inline-block mt-8 px-8 py-3 border-2 border-[var(--accent)] text-[var(--accent)] rounded-lg tracking-wide transition-all duration-300 hover:-translate-y-0.5 hover:shadow-lg"
                    >
                        "View My Work"
                    </a>
                </div>
                <div class="flex justify-center">
                    <Avatar />
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section
            id=SectionId::About.as_str()
            class="relative py-24 scroll-mt-16 section-content"
        >
            <div class="max-w-4xl mx-auto px-4">
                <h2 class="section-title text-3xl md:text-5xl font-bold mb-8 text-center md:text-left">
                    "About "
                    <span class="text-[var(--accent)]">"Me"</span>
                </h2>
                {ABOUT
                    .iter()
                    .map(|p| {
                        view! {
                            <p class="text-lg leading-relaxed mb-6 text-[var(--text-secondary)]">
                                {*p}
                            </p>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
