//! Register Page
//!
//! Account creation form. On success the visitor lands on the login page:
//! registration never authenticates by itself.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::model::Role;
use crate::pages::login::AUTH_DELAY_MS;
use crate::state::{GlobalState, Page, RegisterForm};

/// Register page component
#[component]
pub fn Register() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (role, set_role) = create_signal(Role::Customer);
    let (name, set_name) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
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
            let form = RegisterForm {
                name: name.get_untracked(),
                phone: phone.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                confirm_password: confirm.get_untracked(),
                role: role.get_untracked(),
            };
            if let Err(message) = state.register(form) {
                set_error.set(message);
            }
            set_loading.set(false);
        });
    };

    let login_state = state;
    view! {
        <div class="container mx-auto px-4 py-12">
            <div class="max-w-lg mx-auto bg-gray-800 rounded-xl border border-gray-700 p-6 space-y-4">
                <h2 class="text-2xl font-bold text-center">"Register"</h2>

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
                        <label class="block text-sm text-gray-400 mb-2">"Role"</label>
                        <select
                            on:change=move |ev| {
                                let role = match event_target_value(&ev).as_str() {
                                    "property_dealer" => Role::PropertyDealer,
                                    _ => Role::Customer,
                                };
                                set_role.set(role);
                            }
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                   border border-gray-600 focus:border-blue-500 focus:outline-none"
                        >
                            <option value="customer">"Customer"</option>
                            <option value="property_dealer">"Property Dealer"</option>
                        </select>
                    </div>

                    <div class="grid md:grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Full Name"</label>
                            <input
                                type="text"
                                required=true
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                       border border-gray-600 focus:border-blue-500 focus:outline-none"
                            />
                        </div>
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Phone"</label>
                            <input
                                type="tel"
                                required=true
                                prop:value=move || phone.get()
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                       border border-gray-600 focus:border-blue-500 focus:outline-none"
                            />
                        </div>
                    </div>

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

                    <div class="grid md:grid-cols-2 gap-4">
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
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Confirm Password"</label>
                            <input
                                type="password"
                                required=true
                                prop:value=move || confirm.get()
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                       border border-gray-600 focus:border-blue-500 focus:outline-none"
                            />
                        </div>
                    </div>

                    <button
                        type="submit"
                        disabled=move || loading.get()
                        class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-gray-600 \
                               rounded-lg py-3 font-semibold transition-colors"
                    >
                        {move || if loading.get() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>

                <div class="text-center space-y-2">
                    <p class="text-gray-400">"Already have an account?"</p>
                    <button
                        on:click=move |_| login_state.navigate(Page::Login)
                        class="px-4 py-2 border border-gray-600 hover:bg-gray-700 rounded-lg \
                               transition-colors"
                    >
                        "Login"
                    </button>
                </div>
            </div>
        </div>
    }
}
