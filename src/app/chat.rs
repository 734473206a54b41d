use std::time::Duration;

use leptos::{ev, html, prelude::*};
use web_sys::HtmlInputElement;

use crate::chat::{AttachmentKind, ChatSession, Sender, REPLY_DELAY_MS};

#[component]
pub fn ChatSupport() -> impl IntoView {
    let (chat, set_chat) = signal(ChatSession::new());
    let messages_end = NodeRef::<html::Div>::new();

    let scroll_to_bottom = move || {
        set_timeout(
            move || {
                if let Some(el) = messages_end.get_untracked() {
                    el.scroll_into_view();
                }
            },
            Duration::from_millis(100),
        );
    };

    let send = move || {
        let mut sent = false;
        set_chat.update(|c| sent = c.send());
        if !sent {
            return;
        }
        scroll_to_bottom();
        set_timeout(
            move || {
                set_chat.update(|c| c.reply());
                scroll_to_bottom();
            },
            Duration::from_millis(REPLY_DELAY_MS),
        );
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    let on_file = move |kind: AttachmentKind| {
        move |ev: ev::Event| {
            let input = event_target::<HtmlInputElement>(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                set_chat.update(|c| c.attach(kind, file.name()));
                scroll_to_bottom();
            }
            input.set_value("");
        }
    };

    let message_list = move || {
        chat.with(|c| {
            c.messages()
                .iter()
                .map(|m| {
                    let (row, bubble) = match m.sender {
                        Sender::User => (
                            "flex justify-end",
                            "bg-[var(--accent)] text-[#0a192f] rounded-br-none",
                        ),
                        Sender::Support => (
                            "flex justify-start",
                            "bg-[var(--bg-default)] rounded-bl-none",
                        ),
                    };
                    view! {
                        <div class=row>
                            <div class=format!("max-w-[80%] px-4 py-2 rounded-2xl animate-slide-in {bubble}")>
                                {m.attachment.clone().map(|a| view! { <AttachmentChip kind=a.kind name=a.name /> })}
                                <p class="whitespace-pre-wrap break-words">{m.text.clone()}</p>
                                <p class="text-[10px] opacity-60 text-right mt-1">
                                    {m.timestamp.format("%H:%M").to_string()}
                                </p>
                            </div>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <Show
            when=move || chat.with(|c| c.is_open())
            fallback=move || {
                view! {
                    <button
                        class="fixed bottom-4 right-4 sm:bottom-6 sm:right-6 z-50 w-14 h-14 rounded-full bg-[var(--accent)] text-[#0a192f] text-2xl shadow-xl animate-pulse-ring"
                        aria-label="Open chat"
                        on:click=move |_| set_chat.update(|c| c.open())
                    >
                        "💬"
                    </button>
                }
            }
        >
            <div class="fixed bottom-0 right-0 sm:bottom-6 sm:right-6 z-50 w-full sm:w-96 h-[70vh] sm:h-[32rem] flex flex-col rounded-t-2xl sm:rounded-2xl bg-[var(--bg-paper)] border border-[var(--divider)] shadow-2xl animate-slide-up">
                <div class="flex items-center justify-between px-4 py-3 border-b border-[var(--divider)]">
                    <div class="flex items-center gap-3">
                        <div class="w-9 h-9 rounded-full bg-[var(--accent)] text-[#0a192f] flex items-center justify-center font-bold">
                            "N"
                        </div>
                        <div>
                            <div class="font-semibold">"Chat Support"</div>
                            <div class="text-xs text-[var(--accent)]">"Online"</div>
                        </div>
                    </div>
                    <button
                        class="p-2"
                        aria-label="Close chat"
                        on:click=move |_| set_chat.update(|c| c.close())
                    >
                        "✕"
                    </button>
                </div>
                <div class="flex-1 overflow-y-auto p-4 space-y-3">
                    {message_list}
                    <div node_ref=messages_end></div>
                </div>
                <div class="flex items-center gap-2 p-3 border-t border-[var(--divider)]">
                    <label class="cursor-pointer p-1" title="Attach image">
                        "🖼"
                        <input
                            type="file"
                            accept="image/*"
                            class="hidden"
                            on:change=on_file(AttachmentKind::Image)
                        />
                    </label>
                    <label class="cursor-pointer p-1" title="Attach file">
                        "📎"
                        <input type="file" class="hidden" on:change=on_file(AttachmentKind::File) />
                    </label>
                    <input
                        class="form-input flex-1"
                        placeholder="Type a message..."
                        prop:value=move || chat.with(|c| c.draft().to_string())
                        on:input=move |ev| set_chat.update(|c| c.set_draft(event_target_value(&ev)))
                        on:keydown=on_keydown
                    />
                    <button
                        class="p-2 text-[var(--accent)] disabled:opacity-40"
                        aria-label="Send"
                        disabled=move || chat.with(|c| c.draft().trim().is_empty())
                        on:click=move |_| send()
                    >
                        "➤"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn AttachmentChip(kind: AttachmentKind, name: String) -> impl IntoView {
    let icon = match kind {
        AttachmentKind::Image => "🖼",
        AttachmentKind::File => "📄",
    };
    let title = name.clone();
    view! {
        <div class="flex items-center gap-2 mb-1 px-2 py-1 rounded-md bg-black/10 text-xs" title=title>
            <span>{icon}</span>
            <span class="truncate max-w-[12rem]">{name}</span>
        </div>
    }
}
