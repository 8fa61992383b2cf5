//! Theme Toggle
//!
//! Light/dark switch in the navbar. The choice is the only state that
//! survives a reload: it is written to localStorage and reapplied on
//! startup. With nothing stored, the explicit attribute stays off and the
//! presentation follows the system appearance.

use leptos::*;

const STORAGE_KEY: &str = "theme";

fn stored_theme() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let saved = storage.get_item(STORAGE_KEY).ok()??;
    if saved == "light" || saved == "dark" {
        Some(saved)
    } else {
        None
    }
}

fn store_theme(value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, value);
        }
    }
}

fn apply_theme(theme: Option<&str>) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        match theme {
            Some(value) => {
                let _ = root.set_attribute("data-color-scheme", value);
            }
            None => {
                let _ = root.remove_attribute("data-color-scheme");
            }
        }
    }
}

/// Sun/moon toggle button
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (theme, set_theme) = create_signal(None::<String>);

    // Reapply a saved preference on mount; otherwise leave the document
    // attribute unset so the system scheme wins.
    create_effect(move |_| {
        let saved = stored_theme();
        apply_theme(saved.as_deref());
        set_theme.set(saved);
    });

    let toggle = move |_| {
        let next = if theme.get_untracked().as_deref() == Some("dark") {
            "light"
        } else {
            "dark"
        };
        apply_theme(Some(next));
        store_theme(next);
        set_theme.set(Some(next.to_string()));
    };

    view! {
        <button
            on:click=toggle
            class="px-3 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            title=move || {
                if theme.get().as_deref() == Some("dark") {
                    "Switch to light mode"
                } else {
                    "Switch to dark mode"
                }
            }
        >
            {move || {
                if theme.get().as_deref() == Some("dark") {
                    "☀️"
                } else {
                    "🌙"
                }
            }}
        </button>
    }
}
