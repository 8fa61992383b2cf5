//! App Root Component
//!
//! Wires the global store into the component tree and switches pages.
//! Protected pages go through the session guard, which swaps in the
//! access-restricted card instead of the page when nobody is signed in.

use leptos::*;

use crate::components::{Breadcrumb, Chatbot, Nav, Toast};
use crate::pages::{Dashboard, Home, Login, MapView, Predictions, Profile, Properties, Register};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::Page;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let switch_state = state.clone();
    let chat_state = state;

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Nav />
            <Breadcrumb />

            <main class="flex-1">
                {move || {
                    let page = switch_state.page.get();
                    if page.requires_auth() && !switch_state.is_authenticated() {
                        return view! { <AccessRestricted /> }.into_view();
                    }
                    match page {
                        Page::Home => view! { <Home /> }.into_view(),
                        Page::Login => view! { <Login /> }.into_view(),
                        Page::Register => view! { <Register /> }.into_view(),
                        Page::Dashboard => view! { <Dashboard /> }.into_view(),
                        Page::Properties => view! { <Properties /> }.into_view(),
                        Page::Predictions => view! { <Predictions /> }.into_view(),
                        Page::Map => view! { <MapView /> }.into_view(),
                        Page::Profile => view! { <Profile /> }.into_view(),
                    }
                }}
            </main>

            // Assistant is available to signed-in users only
            {move || {
                if chat_state.is_authenticated() {
                    view! { <Chatbot /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <Footer />
            <Toast />
        </div>
    }
}

/// Shown in place of a protected page when no session exists. Renders
/// navigation offers only; the store is left untouched.
#[component]
fn AccessRestricted() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let login_state = state.clone();
    let register_state = state;
    view! {
        <div class="container mx-auto px-4 py-12">
            <div class="max-w-md mx-auto bg-gray-800 rounded-xl border border-gray-700 p-6 \
                        text-center space-y-4">
                <div class="text-5xl">"🔒"</div>
                <h3 class="text-xl font-semibold">"Access Restricted"</h3>
                <p class="text-gray-400">"Please log in to access this page."</p>
                <div class="flex items-center justify-center gap-4">
                    <button
                        on:click=move |_| login_state.navigate(Page::Login)
                        class="px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium \
                               transition-colors"
                    >
                        "Login"
                    </button>
                    <button
                        on:click=move |_| register_state.navigate(Page::Register)
                        class="px-4 py-2 border border-gray-600 hover:bg-gray-700 rounded-lg \
                               transition-colors"
                    >
                        "Register"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Footer with inert legal links
#[component]
fn Footer() -> impl IntoView {
    use chrono::Datelike;
    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-4 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>{format!("© {} Boston House Predictor", year)}</span>
                <nav class="flex items-center space-x-4">
                    {["Privacy", "Terms", "Contact"]
                        .into_iter()
                        .map(|label| view! {
                            <a
                                href="#"
                                on:click=move |ev: web_sys::MouseEvent| ev.prevent_default()
                                class="hover:text-white transition-colors"
                            >
                                {label}
                            </a>
                        })
                        .collect_view()}
                </nav>
            </div>
        </footer>
    }
}
