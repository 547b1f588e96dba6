//! Live-chat inbox page.
//!
//! Mounts the chat socket (browser only), closes it on unmount, and renders
//! the inbox newest-first with a plain composer. The wire format is free-form JSON; see
//! [`crate::net::ws`] for the reconnect behavior.

use leptos::prelude::*;

use crate::i18n::t;
use crate::state::auth::AuthState;
use crate::state::chat::{ChatState, ConnectionStatus};
use crate::state::lang::Language;

/// Live-chat inbox page.
#[component]
pub fn LiveChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let lang = expect_context::<RwSignal<Language>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let draft = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let client = {
        let user_type = if auth.get_untracked().is_admin { "admin" } else { "user" };
        let user_id = auth
            .get_untracked()
            .user
            .map(|u| u.id)
            .unwrap_or_default();
        let client = crate::net::ws::spawn_chat_client(user_type, &user_id, chat);
        // Close on unmount, or the reconnect loop outlives the page.
        let on_unmount = client.clone();
        on_cleanup(move || on_unmount.close());
        client
    };
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = draft.get_untracked().trim().to_owned();
        if body.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({
                "id": uuid::Uuid::new_v4().to_string(),
                "message": body,
            });
            client.send(payload.to_string());
        }
        draft.set(String::new());
    };

    view! {
        <section class="live-chat" dir=move || lang.get().dir()>
            <header>
                <h1>{move || t(lang.get(), "liveChat").to_owned()}</h1>
                <span class="live-chat__status">
                    {move || match chat.get().connection_status {
                        ConnectionStatus::Connected => "●",
                        ConnectionStatus::Connecting => "◐",
                        ConnectionStatus::Disconnected => "○",
                    }}
                </span>
            </header>
            <ul class="live-chat__messages">
                <Show when=move || chat.get().messages.is_empty()>
                    <li class="live-chat__empty">
                        {move || t(lang.get(), "noMessages").to_owned()}
                    </li>
                </Show>
                {move || {
                    chat.get()
                        .messages
                        .into_iter()
                        .map(|m| {
                            view! {
                                <li class="live-chat__message">
                                    <span class="live-chat__from">{m.from}</span>
                                    <span class="live-chat__body">{m.body}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <form class="live-chat__composer" on:submit=on_send>
                <input
                    type="text"
                    prop:value=draft
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button type="submit">{move || t(lang.get(), "send").to_owned()}</button>
            </form>
        </section>
    }
}
