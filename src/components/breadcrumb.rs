//! Breadcrumb Component
//!
//! Home-rooted trail under the navbar. Pages whose trail has fewer than
//! two crumbs render nothing.

use leptos::*;

use crate::state::GlobalState;

/// Breadcrumb trail for the current page
#[component]
pub fn Breadcrumb() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            let trail = state.page.get().trail();
            if trail.len() <= 1 {
                return view! {}.into_view();
            }

            let last = trail.len() - 1;
            view! {
                <div class="container mx-auto px-4 pt-4">
                    <div class="flex items-center space-x-2 text-sm">
                        {trail
                            .into_iter()
                            .enumerate()
                            .map(|(index, crumb)| {
                                let crumb_state = state.clone();
                                if index < last {
                                    view! {
                                        <button
                                            on:click=move |_| crumb_state.navigate(crumb)
                                            class="text-gray-400 hover:text-white transition-colors"
                                        >
                                            {crumb.label()}
                                        </button>
                                        <span class="text-gray-600">"›"</span>
                                    }
                                    .into_view()
                                } else {
                                    view! {
                                        <span class="text-white">{crumb.label()}</span>
                                    }
                                    .into_view()
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
            .into_view()
        }}
    }
}
