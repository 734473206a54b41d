use leptos::prelude::*;
use leptos_use::{use_interval_fn, use_media_query};

use crate::{
    carousel::{slides_per_view, Carousel, AUTOPLAY_MS},
    profile::TESTIMONIALS,
};

use super::background::{BackgroundEffect, Corner};

#[component]
pub fn Testimonials() -> impl IntoView {
    let (carousel, set_carousel) = signal(Carousel::new(TESTIMONIALS.len()));
    let wide = use_media_query("(min-width: 1024px)".to_string());
    let medium = use_media_query("(min-width: 768px)".to_string());
    let per_view = move || slides_per_view(wide.get(), medium.get());

    // interactions don't pause autoplay
    let _ = use_interval_fn(move || set_carousel.update(|c| c.next()), AUTOPLAY_MS);

    let slides = move || {
        carousel
            .get()
            .visible(per_view())
            .into_iter()
            .map(|i| {
                let t = &TESTIMONIALS[i];
                view! {
                    <figure class="card flex-1 min-w-0 p-6 rounded-xl bg-[var(--bg-paper)] transition-all duration-500">
                        <div class="text-4xl text-[var(--accent)] leading-none mb-2">"“"</div>
                        <blockquote class="text-[var(--text-secondary)] italic mb-6">
                            {t.content}
                        </blockquote>
                        <div class="text-[#ffd700] mb-2" aria-label=format!("{} out of 5", t.rating)>
                            {t.stars()}
                        </div>
                        <figcaption>
                            <div class="font-semibold">{t.name}</div>
                            <div class="text-sm text-[var(--accent)]">
                                {format!("{} @ {}", t.role, t.company)}
                            </div>
                        </figcaption>
                    </figure>
                }
            })
            .collect_view()
    };

    let dots = move || {
        let current = carousel.get().index();
        (0..carousel.get().len())
            .map(|i| {
                let class = if i == current {
                    "w-3 h-3 rounded-full bg-[var(--accent)]"
                } else {
                    "w-3 h-3 rounded-full bg-[var(--text-secondary)] opacity-50"
                };
                view! {
                    <button
                        class=class
                        aria-label=format!("Go to slide {}", i + 1)
                        on:click=move |_| set_carousel.update(|c| c.go_to(i))
                    ></button>
                }
            })
            .collect_view()
    };

    view! {
        <section id="clients" class="relative overflow-hidden py-24 section-content">
            <BackgroundEffect corner=Corner::TopLeft />
            <div class="relative z-10 max-w-6xl mx-auto px-4">
                <h2 class="section-title text-3xl md:text-5xl font-bold mb-12 text-center">
                    "What Clients Say"
                </h2>
                <div class="flex items-stretch gap-6">
                    <button
                        class="self-center text-3xl text-[var(--accent)]"
                        aria-label="Previous testimonial"
                        on:click=move |_| set_carousel.update(|c| c.prev())
                    >
                        "‹"
                    </button>
                    <div class="flex flex-1 gap-6">{slides}</div>
                    <button
                        class="self-center text-3xl text-[var(--accent)]"
                        aria-label="Next testimonial"
                        on:click=move |_| set_carousel.update(|c| c.next())
                    >
                        "›"
                    </button>
                </div>
                <div class="flex justify-center gap-2 mt-8">{dots}</div>
            </div>
        </section>
    }
}
