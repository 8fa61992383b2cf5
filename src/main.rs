//! Boston House Predictor
//!
//! Real-estate browsing and price-prediction demo built with Leptos (WASM).
//!
//! # Features
//!
//! - Demo login/registration against an in-memory user list
//! - Property listings with search and filtering
//! - Linear price estimator over the Boston-housing covariates
//! - Neighborhood map placeholder, profile editor, canned-reply assistant
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state lives in a signal-backed in-memory store and is
//! discarded on reload; only the theme preference is persisted (to
//! localStorage). There is no backend: the short delays around login,
//! registration, and prediction stand in for network calls.

use leptos::*;

mod app;
mod components;
mod model;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
