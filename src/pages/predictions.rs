//! Predictions Page
//!
//! Feature form feeding the price estimator. Input parses leniently
//! (anything unreadable becomes zero rather than an error) and each
//! submission appends to the session user's prediction log after a
//! simulated model-call delay.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::model::{format_usd, FeatureKey, Features, Prediction};
use crate::state::{GlobalState, Page};

/// Simulated latency for a prediction call, in milliseconds.
pub const PREDICT_DELAY_MS: u32 = 1000;

/// Predictions page component
#[component]
pub fn Predictions() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (features, set_features) = create_signal(Features::example());
    let (result, set_result) = create_signal(None::<Prediction>);
    let (loading, set_loading) = create_signal(false);

    let submit_state = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_loading.set(true);

        let state = submit_state.clone();
        spawn_local(async move {
            TimeoutFuture::new(PREDICT_DELAY_MS).await;
            if let Some(prediction) =
                state.record_prediction(features.get_untracked(), js_sys::Math::random)
            {
                set_result.set(Some(prediction));
            }
            set_loading.set(false);
        });
    };

    let browse_state = state.clone();
    let history_state = state;
    view! {
        <div class="container mx-auto px-4 py-8 space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"House Price Predictions"</h1>
                <p class="text-gray-400 mt-1">
                    "Enter property characteristics to get an ML-powered price prediction using \
                     the Boston Housing dataset model."
                </p>
            </div>

            // Feature form
            <div class="bg-gray-800 rounded-xl border border-gray-700 p-6">
                <h2 class="text-xl font-semibold mb-4">"Property Features"</h2>

                <form on:submit=on_submit class="space-y-4">
                    {FeatureKey::ALL
                        .into_iter()
                        .map(|key| view! {
                            <div>
                                <label class="block text-sm text-gray-400 mb-2">
                                    {format!("{}: {}", key.as_str(), key.description())}
                                </label>
                                <input
                                    type="number"
                                    step="0.001"
                                    prop:value=move || features.get().value(key).to_string()
                                    on:input=move |ev| {
                                        let value =
                                            event_target_value(&ev).parse().unwrap_or(0.0);
                                        set_features.update(|f| f.set(key, value));
                                    }
                                    class="w-full bg-gray-700 rounded-lg px-4 py-3 \
                                           border border-gray-600 focus:border-blue-500 \
                                           focus:outline-none"
                                />
                            </div>
                        })
                        .collect_view()}

                    <button
                        type="submit"
                        disabled=move || loading.get()
                        class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-gray-600 \
                               rounded-lg py-3 font-semibold transition-colors"
                    >
                        {move || {
                            if loading.get() {
                                "Calculating Prediction..."
                            } else {
                                "Predict Price"
                            }
                        }}
                    </button>
                </form>
            </div>

            // Result card
            {move || {
                result.get().map(|prediction| {
                    let next_state = browse_state.clone();
                    view! {
                        <div class="bg-gray-800 rounded-xl border border-blue-700 p-6 text-center \
                                    space-y-3">
                            <h3 class="text-xl font-semibold">"Prediction Result"</h3>
                            <div class="text-4xl font-bold text-blue-400">
                                {format_usd(prediction.price.round() as u64)}
                            </div>
                            <p class="text-gray-400">
                                {format!(
                                    "Confidence Score: {}%",
                                    (prediction.confidence * 100.0).round()
                                )}
                            </p>
                            <div class="flex items-center justify-center gap-4">
                                <button
                                    on:click=move |_| set_result.set(None)
                                    class="px-4 py-2 border border-gray-600 hover:bg-gray-700 \
                                           rounded-lg transition-colors"
                                >
                                    "New Prediction"
                                </button>
                                <button
                                    on:click=move |_| next_state.navigate(Page::Properties)
                                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg \
                                           font-medium transition-colors"
                                >
                                    "Browse Properties"
                                </button>
                            </div>
                        </div>
                    }
                })
            }}

            // Recent predictions
            {move || {
                let user = history_state.current_user()?;
                let log = history_state.predictions_for(user.id);
                if log.is_empty() {
                    return None;
                }
                let recent: Vec<Prediction> =
                    log[log.len().saturating_sub(3)..].to_vec();
                Some(view! {
                    <div class="bg-gray-800 rounded-xl border border-gray-700 p-6">
                        <h3 class="text-lg font-semibold mb-4">"Recent Predictions"</h3>
                        <div class="grid md:grid-cols-3 gap-4">
                            {recent
                                .into_iter()
                                .map(|prediction| view! {
                                    <div class="bg-gray-700 rounded-lg p-4 space-y-1">
                                        <div class="text-2xl font-bold">
                                            {format_usd(prediction.price.round() as u64)}
                                        </div>
                                        <p class="text-sm text-gray-300">
                                            {format!(
                                                "Confidence: {}%",
                                                (prediction.confidence * 100.0).round()
                                            )}
                                        </p>
                                        <p class="text-xs text-gray-400">
                                            {prediction.timestamp.format("%b %d, %Y").to_string()}
                                        </p>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                })
            }}
        </div>
    }
}
