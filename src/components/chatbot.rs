//! Chat Assistant Component
//!
//! Floating helper window shown to signed-in users. The transcript lives
//! with the component, so it starts fresh with each session; reply
//! selection is the pure routing in [`crate::model::chat`].

use leptos::*;

use crate::model::chat::{self, ChatMessage, Speaker};

/// Floating chatbot toggle and window
#[component]
pub fn Chatbot() -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let (messages, set_messages) = create_signal(vec![ChatMessage::bot(chat::GREETING)]);
    let (draft, set_draft) = create_signal(String::new());

    let send = move || {
        let text = draft.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        let response = chat::reply(&text);
        set_messages.update(|log| {
            log.push(ChatMessage::user(text.clone()));
            log.push(ChatMessage::bot(response));
        });
        set_draft.set(String::new());
    };

    view! {
        <button
            on:click=move |_| set_open.update(|o| *o = !*o)
            class="fixed bottom-4 right-4 z-40 w-14 h-14 rounded-full bg-blue-600 hover:bg-blue-700 \
                   text-2xl shadow-lg transition-colors"
        >
            "💬"
        </button>

        {move || {
            if !open.get() {
                return view! {}.into_view();
            }
            view! {
                <div class="fixed bottom-20 right-4 z-40 w-80 bg-gray-800 border border-gray-700 \
                            rounded-xl shadow-xl flex flex-col">
                    // Header
                    <div class="flex items-center justify-between px-4 py-3 border-b border-gray-700">
                        <h4 class="font-semibold">"AI Assistant"</h4>
                        <button
                            on:click=move |_| set_open.set(false)
                            class="text-gray-400 hover:text-white"
                        >
                            "✕"
                        </button>
                    </div>

                    // Transcript
                    <div class="flex-1 max-h-80 overflow-y-auto p-4 space-y-2">
                        {move || {
                            messages
                                .get()
                                .into_iter()
                                .map(|message| {
                                    let bubble = match message.speaker {
                                        Speaker::User => {
                                            "ml-8 bg-blue-600 text-white rounded-lg px-3 py-2 text-sm"
                                        }
                                        Speaker::Bot => {
                                            "mr-8 bg-gray-700 text-gray-100 rounded-lg px-3 py-2 text-sm"
                                        }
                                    };
                                    view! { <div class=bubble>{message.text}</div> }
                                })
                                .collect_view()
                        }}
                    </div>

                    // Input row
                    <div class="flex items-center space-x-2 p-3 border-t border-gray-700">
                        <input
                            type="text"
                            placeholder="Ask me about Boston real estate..."
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    send();
                                }
                            }
                            class="flex-1 bg-gray-700 rounded-lg px-3 py-2 text-sm \
                                   border border-gray-600 focus:border-blue-500 focus:outline-none"
                        />
                        <button
                            on:click=move |_| send()
                            class="px-3 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg text-sm \
                                   font-medium transition-colors"
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            }
            .into_view()
        }}
    }
}
