//! Login Page
//!
//! Credential form over the in-memory user list. The submit handler waits
//! out a short simulated network delay before running the store command,
//! mirroring a real API round-trip.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::state::{GlobalState, Page};

/// Simulated latency for auth calls, in milliseconds.
pub const AUTH_DELAY_MS: u32 = 500;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);

    let submit_state = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());
        set_loading.set(true);

        let state = submit_state.clone();
        spawn_local(async move {
            TimeoutFuture::new(AUTH_DELAY_MS).await;
            if let Err(message) = state.login(&email.get_untracked(), &password.get_untracked()) {
                set_error.set(message);
            }
            set_loading.set(false);
        });
    };

    let register_state = state;
    view! {
        <div class="container mx-auto px-4 py-12">
            <div class="max-w-md mx-auto bg-gray-800 rounded-xl border border-gray-700 p-6 space-y-4">
                <h2 class="text-2xl font-bold text-center">"Login"</h2>

                {move || {
                    let message = error.get();
                    (!message.is_empty()).then(|| view! {
                        <div class="bg-red-900 text-red-100 rounded-lg px-4 py-3 text-sm">
                            {message}
                        </div>
                    })
                }}

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                        <input
                            type="email"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                   border border-gray-600 focus:border-blue-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                   border border-gray-600 focus:border-blue-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || loading.get()
                        class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-gray-600 \
                               rounded-lg py-3 font-semibold transition-colors"
                    >
                        {move || if loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <div class="text-center space-y-2">
                    <p class="text-gray-400">"Don't have an account?"</p>
                    <button
                        on:click=move |_| register_state.navigate(Page::Register)
                        class="px-4 py-2 border border-gray-600 hover:bg-gray-700 rounded-lg \
                               transition-colors"
                    >
                        "Register"
                    </button>
                </div>

                <div class="text-center text-xs text-gray-500">
                    "Demo credentials:"
                    <br />
                    "Dealer: dealer@example.com / password123"
                    <br />
                    "Customer: customer@example.com / password123"
                </div>
            </div>
        </div>
    }
}
