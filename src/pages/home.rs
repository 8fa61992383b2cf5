//! Home Page
//!
//! Public landing view with the hero and feature cards.

use leptos::*;

use crate::state::{GlobalState, Page};

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let start_state = state.clone();
    let predict_state = state;

    view! {
        <div class="space-y-8">
            // Hero
            <div class="bg-gray-800 border-b border-gray-700">
                <div class="container mx-auto px-4 py-16 text-center space-y-6">
                    <h1 class="text-4xl font-bold">"Boston House Price Prediction"</h1>
                    <p class="text-gray-300 max-w-2xl mx-auto">
                        "Get accurate house price predictions using advanced machine learning. \
                         Browse properties, analyze market trends, and make informed real estate \
                         decisions."
                    </p>
                    <div class="flex items-center justify-center gap-4">
                        <button
                            on:click=move |_| start_state.navigate(Page::Register)
                            class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg \
                                   font-semibold transition-colors"
                        >
                            "Get Started"
                        </button>
                        <button
                            on:click=move |_| predict_state.navigate(Page::Predictions)
                            class="px-6 py-3 border border-gray-600 hover:bg-gray-700 rounded-lg \
                                   font-semibold transition-colors"
                        >
                            "Try Prediction Tool"
                        </button>
                    </div>
                    <p class="text-sm text-gray-400">
                        "Tip: You can switch themes anytime using the sun/moon button in the navbar."
                    </p>
                </div>
            </div>

            // Feature cards
            <div class="container mx-auto px-4 pb-8">
                <div class="grid md:grid-cols-3 gap-6">
                    <FeatureCard
                        icon="🏠"
                        title="Property Listings"
                        text="Browse comprehensive property listings across all Boston neighborhoods \
                              with detailed information and market insights."
                    />
                    <FeatureCard
                        icon="📈"
                        title="ML Predictions"
                        text="Get accurate price predictions using our Gradient Boosting machine \
                              learning model trained on Boston housing data."
                    />
                    <FeatureCard
                        icon="🗺️"
                        title="Interactive Maps"
                        text="Explore Boston neighborhoods on interactive maps with property markers, \
                              filters, and neighborhood statistics."
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 p-6 text-center space-y-3">
            <div class="text-5xl">{icon}</div>
            <h3 class="text-xl font-semibold">{title}</h3>
            <p class="text-gray-400 text-sm">{text}</p>
        </div>
    }
}
