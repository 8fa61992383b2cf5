//! Map Page
//!
//! Neighborhood explorer. The map itself is a placeholder panel, with no
//! real mapping or geocoding, but the neighborhood table behind it is
//! live store data.

use leptos::*;

use crate::model::Neighborhood;
use crate::state::{GlobalState, Page};

/// Map view page component
#[component]
pub fn MapView() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (selected, set_selected) = create_signal(None::<Neighborhood>);
    let (show_properties, set_show_properties) = create_signal(false);

    let neighborhoods = state.neighborhoods;
    let browse_state = state;

    view! {
        <div class="container mx-auto px-4 py-8 space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Boston Neighborhoods Map"</h1>
                <p class="text-gray-400 mt-1">"Explore Boston neighborhoods and property distributions."</p>
            </div>

            // Mode toggle + placeholder map
            <div class="bg-gray-800 rounded-xl border border-gray-700 p-6 space-y-4">
                <div class="flex gap-4">
                    <ModeButton
                        label="Neighborhoods"
                        active=Signal::derive(move || !show_properties.get())
                        on_click=move |_| set_show_properties.set(false)
                    />
                    <ModeButton
                        label="Properties"
                        active=show_properties
                        on_click=move |_| set_show_properties.set(true)
                    />
                </div>

                <div class="h-64 bg-gray-700 rounded-lg flex flex-col items-center justify-center \
                            text-center space-y-2">
                    <div class="text-5xl">"🗺️"</div>
                    <h3 class="text-xl font-semibold">"Interactive Boston Map"</h3>
                    <p class="text-gray-400 text-sm">"Click on markers to view neighborhood or property details"</p>
                </div>
            </div>

            // Neighborhood cards
            <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                {move || {
                    neighborhoods
                        .get()
                        .into_iter()
                        .take(6)
                        .map(|neighborhood| {
                            let detail = neighborhood.clone();
                            let card_browse_state = browse_state.clone();
                            view! {
                                <div class="bg-gray-800 rounded-xl border border-gray-700 p-4 space-y-2">
                                    <h3 class="font-semibold">{neighborhood.name.clone()}</h3>
                                    <div class="text-3xl font-bold">{neighborhood.property_count}</div>
                                    <p class="text-sm text-gray-400">"Available properties"</p>
                                    <div class="flex gap-2">
                                        <button
                                            on:click=move |_| set_selected.set(Some(detail.clone()))
                                            class="px-3 py-2 border border-gray-600 hover:bg-gray-700 \
                                                   rounded-lg text-sm transition-colors"
                                        >
                                            "View Details"
                                        </button>
                                        <button
                                            on:click=move |_| card_browse_state.navigate(Page::Properties)
                                            class="px-3 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg \
                                                   text-sm font-medium transition-colors"
                                        >
                                            "Browse"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            // Selected neighborhood detail
            {move || {
                selected.get().map(|neighborhood| view! {
                    <div class="bg-gray-800 rounded-xl border border-gray-700 p-6">
                        <div class="flex items-start justify-between">
                            <div class="space-y-2">
                                <h3 class="text-xl font-semibold">
                                    {format!("{} Details", neighborhood.name)}
                                </h3>
                                <p class="text-gray-300">
                                    <strong>"Coordinates: "</strong>
                                    {format!("{}, {}", neighborhood.lat, neighborhood.lng)}
                                </p>
                                <p class="text-gray-300">
                                    <strong>"Available Properties: "</strong>
                                    {neighborhood.property_count}
                                </p>
                            </div>
                            <button
                                on:click=move |_| set_selected.set(None)
                                class="px-4 py-2 border border-gray-600 hover:bg-gray-700 \
                                       rounded-lg transition-colors"
                            >
                                "Close"
                            </button>
                        </div>
                    </div>
                })
            }}
        </div>
    }
}

#[component]
fn ModeButton(
    label: &'static str,
    #[prop(into)] active: Signal<bool>,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg font-medium transition-colors";
                if active.get() {
                    format!("{} bg-blue-600 text-white", base)
                } else {
                    format!("{} border border-gray-600 text-gray-300 hover:bg-gray-700", base)
                }
            }
        >
            {label}
        </button>
    }
}
