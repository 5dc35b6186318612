use crate::domain::order::ui::details::OrderDetailPage;
use crate::shared::toast::{ToastService, Toaster};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    // Provide the toast service to the whole app via context.
    provide_context(ToastService::new());

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/orders/:id") view=OrderDetailRoute />
                </Routes>
            </main>
            <Toaster />
        </Router>
    }
}

/// Reads the order identifier from the route and re-renders the detail page
/// whenever it changes.
#[component]
fn OrderDetailRoute() -> impl IntoView {
    let params = use_params_map();
    let order_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    view! { <OrderDetailPage order_id=order_id /> }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__content">"Page not found"</div>
        </div>
    }
}
