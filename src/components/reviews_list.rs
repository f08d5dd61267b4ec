use leptos::ev::MouseEvent;
use leptos::logging::error;
use leptos::*;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::api::ReviewBackend;
use crate::controller::ReviewController;
use crate::render::{self, LOADING_NOTICE, VOTE_INDEX_ATTR};

/// Starts a list load in the background. Failures only reach the console.
pub fn spawn_reload<B: ReviewBackend + 'static>(controller: Rc<ReviewController<B>>) {
    spawn_local(async move {
        if let Err(err) = controller.load_reviews().await {
            error!("[REVIEWS] Failed to load reviews for item {}: {}", controller.item(), err);
        }
    });
}

/// Position of the card whose `+1` control was clicked, if any.
fn clicked_vote_index(ev: &MouseEvent) -> Option<usize> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let control = target.closest(&format!("[{VOTE_INDEX_ATTR}]")).ok()??;
    control.get_attribute(VOTE_INDEX_ATTR)?.parse().ok()
}

/// Count label plus the card container. Cards are plain markup; the `+1`
/// controls are handled by one delegated listener on the container.
#[component]
pub fn ReviewsList<B: ReviewBackend + 'static>(controller: Rc<ReviewController<B>>) -> impl IntoView {
    let reviews = controller.reviews;

    let on_click = move |ev: MouseEvent| {
        let Some(index) = clicked_vote_index(&ev) else {
            return;
        };
        let controller = controller.clone();
        spawn_local(async move {
            if let Err(err) = controller.thumb_up(index).await {
                error!("[VOTE] Vote for index {} failed: {}", index, err);
            }
        });
    };

    view! {
        <div class="reviews-list">
            <h5 class="mb-3">
                "Reviews "
                <span class="badge bg-light text-dark" id="revCount">
                    {move || reviews.with(|list| list.as_ref().map_or(0, Vec::len))}
                </span>
            </h5>
            <div
                id="reviewsWrap"
                on:click=on_click
                inner_html=move || {
                    reviews.with(|list| match list {
                        Some(list) => render::review_list(list),
                        None => LOADING_NOTICE.to_string(),
                    })
                }
            ></div>
        </div>
    }
}
