/// Routed application shell for standalone use: `/items/:item_id` shows that
/// item's review panel.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::reviews_panel::ItemReviews;
use crate::models::ItemRef;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Reviews" />
        <Router>
            <main class="container py-3">
                <Routes>
                    <Route path="/items/:item_id" view=ItemPage />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ItemPage() -> impl IntoView {
    let params = use_params_map();
    let item = move || params.with(|p| p.get("item_id").cloned().unwrap_or_default());

    // Remount the panel when the route moves to another item.
    move || {
        let id = item();
        if id.trim().is_empty() {
            view! { <NotFound /> }.into_view()
        } else {
            view! { <ItemReviews item=ItemRef::new(id) /> }.into_view()
        }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <div class="alert alert-warning">"Pick an item to see its reviews."</div> }
}
