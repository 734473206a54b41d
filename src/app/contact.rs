use leptos::{ev, prelude::*};

use crate::{
    contact::{ContactForm, Field},
    profile::CONTACT_CHANNELS,
    sections::SectionId,
};

use super::background::{BackgroundEffect, Corner};

#[component]
pub fn Contact() -> impl IntoView {
    let (form, set_form) = signal(ContactForm::default());
    let (error, set_error) = signal(None::<String>);
    let (thanks_open, set_thanks_open) = signal(false);

    let on_input = move |field: Field| {
        move |ev: ev::Event| {
            set_form.update(|f| f.set(field, event_target_value(&ev)));
            set_error.set(None);
        }
    };

    view! {
        <section
            id=SectionId::Contact.as_str()
            class="relative overflow-hidden py-24 scroll-mt-20 bg-[var(--bg-paper)] section-content"
        >
            <BackgroundEffect corner=Corner::BottomRight />
            <div class="relative z-10 max-w-6xl mx-auto px-4">
                <h2 class="section-title text-3xl md:text-5xl font-bold mb-4 text-center">
                    "Get In Touch"
                </h2>
                <p class="text-center text-[var(--text-secondary)] mb-12">
                    "Have a project in mind or just want to say hi? My inbox is always open."
                </p>
                <div class="grid gap-12 md:grid-cols-2">
                    <div class="space-y-4">
                        {CONTACT_CHANNELS
                            .iter()
                            .map(|c| {
                                view! {
                                    <a
                                        href=c.link
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="card flex items-center gap-4 p-4 rounded-xl bg-[var(--bg-default)] transition-all duration-300 hover:translate-x-1"
                                    >
                                        <i class=format!("{} text-3xl", c.icon) style=format!("color: {};", c.color)></i>
                                        <div>
                                            <div class="font-semibold">{c.title}</div>
                                            <div class="text-sm text-[var(--text-secondary)]">{c.value}</div>
                                        </div>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <form
                        class="card p-6 rounded-xl bg-[var(--bg-default)] space-y-4"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            let mut current = form.get_untracked();
                            match current.submit() {
                                Ok(_) => {
                                    log::debug!("contact form submitted");
                                    set_form.set(current);
                                    set_error.set(None);
                                    set_thanks_open.set(true);
                                }
                                Err(e) => set_error.set(Some(e.to_string())),
                            }
                        }
                    >
                        <label class="block">
                            <span class="text-sm text-[var(--text-secondary)]">"Name"</span>
                            <input
                                name="name"
                                required
                                class="form-input"
                                prop:value=move || form.get().name
                                on:input=on_input(Field::Name)
                            />
                        </label>
                        <label class="block">
                            <span class="text-sm text-[var(--text-secondary)]">"Email"</span>
                            <input
                                name="email"
                                type="email"
                                required
                                class="form-input"
                                prop:value=move || form.get().email
                                on:input=on_input(Field::Email)
                            />
                        </label>
                        <label class="block">
                            <span class="text-sm text-[var(--text-secondary)]">"Message"</span>
                            <textarea
                                name="message"
                                rows="4"
                                required
                                class="form-input"
                                prop:value=move || form.get().message
                                on:input=on_input(Field::Message)
                            ></textarea>
                        </label>
                        {move || {
                            error
                                .get()
                                .map(|e| view! { <p class="text-sm text-[#ff4081]">{e}</p> })
                        }}
                        <button
                            type="submit"
                            class="w-full py-3 rounded-md bg-[var(--accent)] text-[#0a192f] font-semibold transition-all duration-300 hover:-translate-y-0.5"
                        >
                            "Send Message"
                        </button>
                    </form>
                </div>
            </div>
            <Show when=move || thanks_open.get()>
                <ThankYouDialog on_close=move || set_thanks_open.set(false) />
            </Show>
        </section>
    }
}

#[component]
fn ThankYouDialog(on_close: impl Fn() + Send + Sync + 'static) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50">
            <div
                role="dialog"
                aria-modal="true"
                class="max-w-sm w-full mx-4 p-8 rounded-2xl bg-[var(--bg-paper)] text-center shadow-2xl animate-slide-up"
            >
                <div class="text-5xl mb-4 text-[var(--accent)]">"✓"</div>
                <h3 class="text-2xl font-bold mb-4">"Thank You!"</h3>
                <p class="text-[var(--text-secondary)] mb-2">
                    "Your message has been sent successfully! I appreciate you taking the time to reach out."
                </p>
                <p class="text-sm font-medium text-[var(--accent)] mb-6">
                    "I'll get back to you as soon as possible."
                </p>
                <button
                    class="px-6 py-2 rounded-md border-2 border-[var(--accent)] text-[var(--accent)]"
                    on:click=move |_| on_close()
                >
                    "Close"
                </button>
            </div>
        </div>
    }
}
