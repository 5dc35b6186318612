//! Transient success notifications.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const DISMISS_AFTER_MS: u32 = 3_000;

/// Context service for toast notifications.
#[derive(Clone, Copy)]
pub struct ToastService {
    message: RwSignal<Option<String>>,
    // Bumped on every show so an older dismiss timer cannot clear a newer toast.
    epoch: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            epoch: RwSignal::new(0),
        }
    }

    /// Show a success toast; it dismisses itself after a few seconds.
    pub fn success(&self, text: impl Into<String>) {
        let shown = self.epoch.get_untracked() + 1;
        self.epoch.set(shown);
        self.message.set(Some(text.into()));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            if svc.epoch.get_untracked() == shown {
                svc.message.set(None);
            }
        });
    }
}

/// Renders the current toast, if any. Mount once at the app root.
#[component]
pub fn Toaster() -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        {move || {
            toast
                .message
                .get()
                .map(|text| view! { <div class="toast toast--success">{text}</div> })
        }}
    }
}
