//! Dashboard Page
//!
//! Role-specific overview: dealers see their listings and market stats,
//! customers see saved properties and prediction activity. A few figures
//! (inquiries, revenue, offers, trend) are canned demo numbers.

use leptos::*;

use crate::model::{format_usd, Role, User};
use crate::state::{GlobalState, Page};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="container mx-auto px-4 py-8">
            {move || {
                match state.current_user() {
                    Some(user) => match user.role {
                        Role::PropertyDealer => view! { <DealerDashboard user=user /> }.into_view(),
                        Role::Customer => view! { <CustomerDashboard user=user /> }.into_view(),
                    },
                    // The guard never renders this page without a session.
                    None => view! {}.into_view(),
                }
            }}
        </div>
    }
}

#[component]
fn DealerDashboard(user: User) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let listing_count = state.listings_for(user.id);
    let market_average = format_usd(state.average_price().round() as u64);

    let manage_state = state.clone();
    let analysis_state = state.clone();

    // The add-property flow is intentionally unwired, hence no target.
    let dealer_primary = ("Add Property", None);
    let dealer_actions = [("View Map", Page::Map), ("Price Predictions", Page::Predictions)];

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Property Dealer Dashboard"</h1>
                <p class="text-gray-400 mt-1">
                    {format!("Welcome back, {}! Manage your properties and track performance.", user.name)}
                </p>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard title="Your Properties" value=listing_count.to_string() note="Active listings">
                    <button
                        on:click=move |_| manage_state.navigate(Page::Properties)
                        class="px-3 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg text-sm \
                               font-medium transition-colors"
                    >
                        "Manage Properties"
                    </button>
                </StatCard>
                <StatCard title="Total Inquiries" value="23".to_string() note="This month">
                    <span class="text-sm text-gray-500">"Demo figure"</span>
                </StatCard>
                <StatCard title="Revenue" value="$45,000".to_string() note="Last 30 days">
                    <span class="text-sm text-gray-500">"Demo figure"</span>
                </StatCard>
                <StatCard title="Market Average" value=market_average note="Boston area">
                    <button
                        on:click=move |_| analysis_state.navigate(Page::Predictions)
                        class="px-3 py-2 border border-gray-600 hover:bg-gray-700 rounded-lg \
                               text-sm transition-colors"
                    >
                        "Price Analysis"
                    </button>
                </StatCard>
            </div>

            <QuickActions primary=dealer_primary others=dealer_actions />
        </div>
    }
}

#[component]
fn CustomerDashboard(user: User) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let favorites_state = state.clone();
    let predictions_state = state.clone();
    let user_id = user.id;

    let view_state = state.clone();
    let new_prediction_state = state.clone();

    let customer_primary = ("Search Properties", Some(Page::Properties));
    let customer_actions = [("Price Calculator", Page::Predictions), ("Explore Map", Page::Map)];

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Customer Dashboard"</h1>
                <p class="text-gray-400 mt-1">
                    {format!("Welcome back, {}! Find your dream property.", user.name)}
                </p>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard
                    title="Saved Properties"
                    value=Signal::derive(move || favorites_state.favorites_for(user_id).to_string())
                    note="In your favorites"
                >
                    <button
                        on:click=move |_| view_state.navigate(Page::Properties)
                        class="px-3 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg text-sm \
                               font-medium transition-colors"
                    >
                        "View Favorites"
                    </button>
                </StatCard>
                <StatCard title="Active Offers" value="2".to_string() note="Pending response">
                    <span class="text-sm text-gray-500">"Demo figure"</span>
                </StatCard>
                <StatCard
                    title="Price Predictions"
                    value=Signal::derive(move || predictions_state.predictions_for(user_id).len().to_string())
                    note="This session"
                >
                    <button
                        on:click=move |_| new_prediction_state.navigate(Page::Predictions)
                        class="px-3 py-2 border border-gray-600 hover:bg-gray-700 rounded-lg \
                               text-sm transition-colors"
                    >
                        "New Prediction"
                    </button>
                </StatCard>
                <StatCard title="Market Trends" value="+3.2%".to_string() note="Price increase">
                    <span class="text-sm text-gray-500">"Demo figure"</span>
                </StatCard>
            </div>

            <QuickActions primary=customer_primary others=customer_actions />
        </div>
    }
}

/// One dashboard stat tile
#[component]
fn StatCard(
    title: &'static str,
    #[prop(into)] value: MaybeSignal<String>,
    note: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 p-4 space-y-2">
            <h3 class="text-sm text-gray-400">{title}</h3>
            <div class="text-3xl font-bold">{move || value.get()}</div>
            <p class="text-sm text-gray-400">{note}</p>
            {children()}
        </div>
    }
}

/// Row of shortcut buttons. A `None` target renders the button unwired
/// (the add-property flow does not exist).
#[component]
fn QuickActions(
    primary: (&'static str, Option<Page>),
    others: [(&'static str, Page); 2],
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (primary_label, primary_target) = primary;
    let primary_state = state.clone();
    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 p-6">
            <h3 class="text-lg font-semibold mb-4">"Quick Actions"</h3>
            <div class="flex flex-wrap gap-4">
                <button
                    on:click=move |_| {
                        if let Some(page) = primary_target {
                            primary_state.navigate(page);
                        }
                    }
                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium \
                           transition-colors"
                >
                    {primary_label}
                </button>
                {others
                    .into_iter()
                    .map(|(label, page)| {
                        let action_state = state.clone();
                        view! {
                            <button
                                on:click=move |_| action_state.navigate(page)
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
    }
}
