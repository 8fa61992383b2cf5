//! Properties Page
//!
//! Search and filter controls over the listing grid. The filter predicate
//! re-evaluates reactively on every keystroke; see
//! [`crate::model::filter`] for the matching rules.

use leptos::*;

use crate::components::PropertyCard;
use crate::model::{filter::PropertyFilter, PropertyType, Role};
use crate::state::GlobalState;

/// Properties page component
#[component]
pub fn Properties() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (filter, set_filter) = create_signal(PropertyFilter::default());

    let properties = state.properties;
    let filtered = move || {
        let filter = filter.get();
        properties
            .get()
            .into_iter()
            .filter(|property| filter.matches(property))
            .collect::<Vec<_>>()
    };

    let header_state = state.clone();
    let neighborhoods = state.neighborhoods;

    view! {
        <div class="container mx-auto px-4 py-8 space-y-6">
            // Header
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Properties"</h1>
                {move || {
                    let dealer = header_state
                        .current_user()
                        .is_some_and(|user| user.role == Role::PropertyDealer);
                    dealer.then(|| view! {
                        // Listing creation is intentionally not wired up.
                        <button class="px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg \
                                       font-medium transition-colors">
                            "+ Add Property"
                        </button>
                    })
                }}
            </div>

            // Search and filters
            <div class="bg-gray-800 rounded-xl border border-gray-700 p-6 space-y-4">
                <input
                    type="text"
                    placeholder="Search properties by address or neighborhood..."
                    prop:value=move || filter.get().search
                    on:input=move |ev| {
                        set_filter.update(|f| f.search = event_target_value(&ev));
                    }
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                           border border-gray-600 focus:border-blue-500 focus:outline-none"
                />

                <div class="grid md:grid-cols-2 gap-4">
                    <select
                        on:change=move |ev| {
                            set_filter.update(|f| f.neighborhood = event_target_value(&ev));
                        }
                        class="bg-gray-700 rounded-lg px-4 py-3 \
                               border border-gray-600 focus:border-blue-500 focus:outline-none"
                    >
                        <option value="">"All Neighborhoods"</option>
                        {move || {
                            neighborhoods
                                .get()
                                .into_iter()
                                .map(|n| view! {
                                    <option value=n.name.clone()>{n.name}</option>
                                })
                                .collect_view()
                        }}
                    </select>

                    <select
                        on:change=move |ev| {
                            set_filter.update(|f| f.property_type = event_target_value(&ev));
                        }
                        class="bg-gray-700 rounded-lg px-4 py-3 \
                               border border-gray-600 focus:border-blue-500 focus:outline-none"
                    >
                        <option value="">"All Types"</option>
                        {PropertyType::ALL
                            .into_iter()
                            .map(|t| view! {
                                <option value=t.as_str()>{t.as_str()}</option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="grid md:grid-cols-3 gap-4">
                    <input
                        type="number"
                        placeholder="Min Price"
                        prop:value=move || filter.get().min_price
                        on:input=move |ev| {
                            set_filter.update(|f| f.min_price = event_target_value(&ev));
                        }
                        class="bg-gray-700 rounded-lg px-4 py-3 \
                               border border-gray-600 focus:border-blue-500 focus:outline-none"
                    />
                    <input
                        type="number"
                        placeholder="Max Price"
                        prop:value=move || filter.get().max_price
                        on:input=move |ev| {
                            set_filter.update(|f| f.max_price = event_target_value(&ev));
                        }
                        class="bg-gray-700 rounded-lg px-4 py-3 \
                               border border-gray-600 focus:border-blue-500 focus:outline-none"
                    />
                    <input
                        type="number"
                        placeholder="Bedrooms"
                        prop:value=move || filter.get().bedrooms
                        on:input=move |ev| {
                            set_filter.update(|f| f.bedrooms = event_target_value(&ev));
                        }
                        class="bg-gray-700 rounded-lg px-4 py-3 \
                               border border-gray-600 focus:border-blue-500 focus:outline-none"
                    />
                </div>
            </div>

            // Listing grid / empty state
            {move || {
                let listings = filtered();
                if listings.is_empty() {
                    view! {
                        <div class="text-center py-12 space-y-3">
                            <div class="text-5xl">"🔍"</div>
                            <h3 class="text-xl font-semibold">"No properties found"</h3>
                            <p class="text-gray-400">"Try adjusting your search criteria or filters."</p>
                        </div>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {listings
                                .into_iter()
                                .map(|property| view! { <PropertyCard property=property /> })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
