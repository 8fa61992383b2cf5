//! Profile Page
//!
//! Contact-details editor plus an activity summary. Saving merges the
//! draft into the user list and the session copy through the store
//! command, then raises a success toast.

use leptos::*;

use crate::state::{GlobalState, Page};
use crate::model::Role;

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (editing, set_editing) = create_signal(false);
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());

    let toggle_state = state.clone();
    let on_toggle = move |_| {
        if editing.get_untracked() {
            toggle_state.save_profile(
                name.get_untracked(),
                email.get_untracked(),
                phone.get_untracked(),
            );
            toggle_state.show_success("Profile updated");
            set_editing.set(false);
        } else if let Some(user) = toggle_state.current_user() {
            set_name.set(user.name);
            set_email.set(user.email);
            set_phone.set(user.phone);
            set_editing.set(true);
        }
    };

    let details_state = state.clone();
    let summary_state = state.clone();
    let actions_state = state;

    view! {
        <div class="container mx-auto px-4 py-8 space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Profile"</h1>
                <p class="text-gray-400 mt-1">"Manage your account settings and preferences."</p>
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                // Personal information
                <div class="bg-gray-800 rounded-xl border border-gray-700 p-6 space-y-4">
                    <div class="flex items-center justify-between">
                        <h3 class="text-lg font-semibold">"Personal Information"</h3>
                        <button
                            on:click=on_toggle
                            class="px-3 py-2 border border-gray-600 hover:bg-gray-700 rounded-lg \
                                   text-sm transition-colors"
                        >
                            {move || if editing.get() { "Save Changes" } else { "Edit Profile" }}
                        </button>
                    </div>

                    {move || {
                        if editing.get() {
                            view! {
                                <div class="space-y-4">
                                    <div>
                                        <label class="block text-sm text-gray-400 mb-2">"Full Name"</label>
                                        <input
                                            type="text"
                                            prop:value=move || name.get()
                                            on:input=move |ev| set_name.set(event_target_value(&ev))
                                            class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                                   border border-gray-600 focus:border-blue-500 \
                                                   focus:outline-none"
                                        />
                                    </div>
                                    <div>
                                        <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                                        <input
                                            type="email"
                                            prop:value=move || email.get()
                                            on:input=move |ev| set_email.set(event_target_value(&ev))
                                            class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                                   border border-gray-600 focus:border-blue-500 \
                                                   focus:outline-none"
                                        />
                                    </div>
                                    <div>
                                        <label class="block text-sm text-gray-400 mb-2">"Phone"</label>
                                        <input
                                            type="tel"
                                            prop:value=move || phone.get()
                                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                                            class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                                   border border-gray-600 focus:border-blue-500 \
                                                   focus:outline-none"
                                        />
                                    </div>
                                </div>
                            }
                            .into_view()
                        } else {
                            match details_state.current_user() {
                                Some(user) => view! {
                                    <div class="space-y-2 text-gray-300">
                                        <p><strong>"Name: "</strong>{user.name}</p>
                                        <p><strong>"Email: "</strong>{user.email}</p>
                                        <p><strong>"Phone: "</strong>{user.phone}</p>
                                        <p><strong>"Role: "</strong>{user.role.label()}</p>
                                    </div>
                                }
                                .into_view(),
                                None => view! {}.into_view(),
                            }
                        }
                    }}
                </div>

                // Activity summary
                <div class="bg-gray-800 rounded-xl border border-gray-700 p-6 space-y-4">
                    <h3 class="text-lg font-semibold">"Activity Summary"</h3>
                    {move || {
                        summary_state.current_user().map(|user| {
                            let predictions = summary_state.predictions_for(user.id).len();
                            let favorites = summary_state.favorites_for(user.id);
                            let listings = (user.role == Role::PropertyDealer)
                                .then(|| summary_state.listings_for(user.id));
                            view! {
                                <div class="space-y-4">
                                    <ActivityStat value=predictions label="Price Predictions" />
                                    <ActivityStat value=favorites label="Saved Properties" />
                                    {listings.map(|count| view! {
                                        <ActivityStat value=count label="Listed Properties" />
                                    })}
                                </div>
                            }
                        })
                    }}
                </div>
            </div>

            // Quick links
            <div class="bg-gray-800 rounded-xl border border-gray-700 p-6">
                <h3 class="text-lg font-semibold mb-4">"Quick Actions"</h3>
                <div class="flex flex-wrap gap-4">
                    {[
                        ("Dashboard", Page::Dashboard),
                        ("Browse Properties", Page::Properties),
                        ("Price Calculator", Page::Predictions),
                    ]
                    .into_iter()
                    .map(|(label, page)| {
                        let link_state = actions_state.clone();
                        view! {
                            <button
                                on:click=move |_| link_state.navigate(page)
                                class="px-4 py-2 border border-gray-600 hover:bg-gray-700 \
                                       rounded-lg transition-colors"
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ActivityStat(value: usize, label: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-4">
            <div class="text-3xl font-bold">{value}</div>
            <p class="text-sm text-gray-300">{label}</p>
        </div>
    }
}
