use crate::shared::icons::icon;
use leptos::prelude::*;

/// Navigates one entry back in the browser history.
#[component]
pub fn BackButton() -> impl IntoView {
    let go_back = move |_| {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    };

    view! {
        <button class="button button--icon" aria-label="Back" on:click=go_back>
            {icon("arrow-left")}
        </button>
    }
}
