//! Property Card Component
//!
//! One listing in the properties grid: price, address, badges, the
//! bed/bath/sqft row, and the favorite heart.

use leptos::*;

use crate::model::{format_usd, ListingStatus, Property, Role};
use crate::state::GlobalState;

/// Listing card with favorite toggle
#[component]
pub fn PropertyCard(property: Property) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let property_id = property.id;
    let status_badge = match property.status {
        ListingStatus::Available => "bg-green-700 text-green-100",
        ListingStatus::Sold => "bg-yellow-700 text-yellow-100",
    };

    let favorite_state = state.clone();
    let heart_state = state.clone();
    let offer_state = state.clone();

    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 hover:border-gray-600 \
                    transition overflow-hidden">
            // Image placeholder
            <div class="h-32 bg-gray-700 flex items-center justify-center text-4xl">"🏠"</div>

            <div class="p-4 space-y-3">
                <div class="text-2xl font-bold">{format_usd(u64::from(property.price))}</div>
                <div class="text-gray-300">{property.address.clone()}</div>

                // Badges
                <div class="flex flex-wrap gap-2 text-xs">
                    <span class="px-2 py-1 rounded bg-blue-900 text-blue-100">
                        {property.property_type.as_str()}
                    </span>
                    <span class=format!("px-2 py-1 rounded {}", status_badge)>
                        {property.status.as_str()}
                    </span>
                    <span class="px-2 py-1 rounded bg-gray-700 text-gray-200">
                        {property.listing_type.as_str()}
                    </span>
                </div>

                // Feature row
                <div class="flex items-center justify-between text-sm text-gray-400">
                    <span>{format!("{} bed", property.bedrooms)}</span>
                    <span>{format!("{} bath", property.bathrooms)}</span>
                    <span>{format!("{} sqft", property.sqft)}</span>
                </div>

                // Actions
                <div class="flex items-center space-x-2 pt-1">
                    <button class="px-3 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg text-sm \
                                   font-medium transition-colors">
                        "View Details"
                    </button>
                    <button
                        on:click=move |_| favorite_state.toggle_favorite(property_id)
                        title=move || {
                            if heart_state.is_favorite(property_id) {
                                "Remove from favorites"
                            } else {
                                "Add to favorites"
                            }
                        }
                        class=move || {
                            let base = "px-3 py-2 rounded-lg text-sm border transition-colors";
                            if state.is_favorite(property_id) {
                                format!("{} bg-red-600 border-red-600 text-white", base)
                            } else {
                                format!("{} border-gray-600 text-gray-300 hover:text-white", base)
                            }
                        }
                    >
                        "♥"
                    </button>
                    {move || {
                        let customer = offer_state
                            .current_user()
                            .is_some_and(|user| user.role == Role::Customer);
                        customer.then(|| view! {
                            // Offer flow is intentionally not wired up.
                            <button class="px-3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg \
                                           text-sm transition-colors">
                                "Make Offer"
                            </button>
                        })
                    }}
                </div>
            </div>
        </div>
    }
}
