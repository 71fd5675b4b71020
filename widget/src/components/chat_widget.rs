//! Floating launcher bubble and the chat panel it expands into.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::WidgetConfig;
use crate::net::api::post_chat;
use crate::state::chat::{ChatState, Submit};
use crate::state::ui::UiState;
use crate::styles::{
    CLOSE_ID, HEADER_ID, HISTORY_ID, INPUT_ID, INPUT_ROW_ID, LAUNCHER_ID, PANEL_ID, SEND_ID, display,
};

/// Enter sends, except while an IME composition is still open.
pub(crate) fn is_send_key(key: &str, composing: bool) -> bool {
    key == "Enter" && !composing
}

/// The whole widget: launcher plus panel.
///
/// Sends the full conversation to `config.endpoint` and renders the reply.
/// Only one request is in flight at a time; Send is disabled until it lands.
#[component]
pub fn ChatWidget(config: WidgetConfig) -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());
    let history_ref = NodeRef::<leptos::html::Div>::new();
    let endpoint = StoredValue::new(config.endpoint);

    // Pin the history to the bottom after every appended row.
    Effect::new(move || {
        let _ = chat.with(|c| c.log.len());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = history_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let raw = input.get_untracked();
        let Some(Submit::Send(request)) = chat.try_update(|c| c.submit(&raw)) else {
            return;
        };
        input.set(String::new());

        let endpoint = endpoint.get_value();
        spawn_local(async move {
            let outcome = post_chat(&endpoint, &request).await;
            #[cfg(feature = "csr")]
            {
                if let Err(e) = &outcome {
                    log::warn!("chat exchange failed: {e}");
                }
            }
            chat.update(|c| c.resolve(outcome));
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_send_key(&ev.key(), ev.is_composing()) {
            ev.prevent_default();
            do_send();
        }
    };

    let expanded = move || ui.with(UiState::is_expanded);
    let title = config.title;
    let placeholder = config.placeholder;
    let launcher = config.launcher;

    view! {
        <div id=PANEL_ID style:display=move || display(expanded())>
            <div id=HEADER_ID>
                {title}
                <span id=CLOSE_ID on:click=move |_| ui.update(UiState::close)>
                    "\u{00d7}"
                </span>
            </div>
            <div id=HISTORY_ID node_ref=history_ref>
                <For
                    each=move || chat.with(ChatState::rows)
                    key=|(index, _)| *index
                    children=|(_, entry)| {
                        let class = format!("message {}", entry.author.css_class());
                        view! { <div class=class>{entry.text}</div> }
                    }
                />
            </div>
            <div id=INPUT_ROW_ID>
                <input
                    type="text"
                    id=INPUT_ID
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button id=SEND_ID on:click=move |_| do_send() disabled=move || chat.with(|c| c.pending)>
                    "Send"
                </button>
            </div>
        </div>
        <div
            id=LAUNCHER_ID
            style:display=move || display(!expanded())
            on:click=move |_| ui.update(UiState::open)
        >
            {launcher}
        </div>
    }
}

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod tests;
