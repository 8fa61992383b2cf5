//! Navigation Component
//!
//! Header navigation bar. Protected links appear only with a session;
//! the hamburger button drives the mobile overlay, which every
//! navigation closes again.

use leptos::*;

use crate::components::ThemeToggle;
use crate::state::{GlobalState, Page};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let brand_state = state.clone();
    let menu_state = state.clone();
    let links_state = state.clone();

    view! {
        <nav class="relative bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <button
                        on:click=move |_| brand_state.navigate(Page::Home)
                        class="flex items-center space-x-3"
                    >
                        <span class="text-2xl">"🏠"</span>
                        <span class="text-xl font-bold text-white">"Boston House Predictor"</span>
                    </button>

                    // Mobile menu toggle
                    <button
                        on:click=move |_| menu_state.mobile_menu.update(|open| *open = !*open)
                        class="md:hidden px-3 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700"
                    >
                        "☰"
                    </button>

                    // Navigation links
                    <div class=move || {
                        if links_state.mobile_menu.get() {
                            "absolute left-0 right-0 top-16 z-40 flex flex-col space-y-1 bg-gray-800 \
                             border-b border-gray-700 p-4 md:static md:flex md:flex-row md:items-center \
                             md:space-x-1 md:space-y-0 md:border-0 md:p-0"
                        } else {
                            "hidden md:flex items-center space-x-1"
                        }
                    }>
                        <NavLinks />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Link list shared by the desktop row and the mobile overlay
#[component]
fn NavLinks() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let session_state = state.clone();
    view! {
        <NavLink page=Page::Home />
        {
            let state = state.clone();
            move || {
                if state.is_authenticated() {
                    let pages = [
                        Page::Dashboard,
                        Page::Properties,
                        Page::Predictions,
                        Page::Map,
                        Page::Profile,
                    ];
                    pages
                        .into_iter()
                        .map(|page| view! { <NavLink page=page /> })
                        .collect_view()
                } else {
                    view! {}.into_view()
                }
            }
        }

        <ThemeToggle />

        {move || {
            match session_state.current_user() {
                Some(user) => {
                    let logout_state = session_state.clone();
                    view! {
                        <span class="px-4 py-2 text-gray-300">
                            {format!("Welcome, {}!", user.name)}
                        </span>
                        <button
                            on:click=move |_| logout_state.logout()
                            class="px-4 py-2 rounded-lg border border-gray-600 text-gray-300 \
                                   hover:text-white hover:bg-gray-700 transition-colors"
                        >
                            "Logout"
                        </button>
                    }
                    .into_view()
                }
                None => {
                    // Login as a plain link, Register as the primary button.
                    let register_state = session_state.clone();
                    view! {
                        <NavLink page=Page::Login />
                        <button
                            on:click=move |_| register_state.navigate(Page::Register)
                            class="px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white \
                                   font-medium transition-colors"
                        >
                            "Register"
                        </button>
                    }
                    .into_view()
                }
            }
        }}
    }
}

/// Individual navigation link
#[component]
fn NavLink(page: Page) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let click_state = state.clone();
    view! {
        <button
            on:click=move |_| click_state.navigate(page)
            class=move || {
                let base = "px-4 py-2 rounded-lg text-left transition-colors";
                if state.page.get() == page {
                    format!("{} bg-gray-700 text-white", base)
                } else {
                    format!("{} text-gray-300 hover:text-white hover:bg-gray-700", base)
                }
            }
        >
            {page.label()}
        </button>
    }
}
