use leptos::logging::warn;
use leptos::*;
use std::rc::Rc;

use crate::api::{HttpBackend, ReviewBackend};
use crate::bootstrap;
use crate::components::review_form::{NewReviewForm, MODAL_ID};
use crate::components::reviews_list::{spawn_reload, ReviewsList};
use crate::config::ApiConfig;
use crate::controller::ReviewController;
use crate::models::ItemRef;

/// List, "write a review" trigger and dialog for one controller.
/// Kicks off the first load when mounted.
#[component]
pub fn ReviewsPanel<B: ReviewBackend + 'static>(controller: Rc<ReviewController<B>>) -> impl IntoView {
    spawn_reload(controller.clone());

    let open_dialog = move |_| {
        if let Err(err) = bootstrap::show_modal(MODAL_ID) {
            warn!("[REVIEWS] Cannot open the review dialog: {}", err);
        }
    };

    view! {
        <section class="reviews-panel">
            <div class="d-flex justify-content-end mb-2">
                <button type="button" class="btn btn-sm btn-primary" on:click=open_dialog>
                    "Write a review"
                </button>
            </div>
            <ReviewsList controller=controller.clone() />
            <NewReviewForm controller=controller />
        </section>
    }
}

/// Review panel for `item` talking to the HTTP review service.
#[component]
pub fn ItemReviews(item: ItemRef, #[prop(optional)] config: Option<ApiConfig>) -> impl IntoView {
    let config = config.unwrap_or_else(ApiConfig::from_document);
    let controller = Rc::new(ReviewController::new(HttpBackend::new(config), item));

    view! { <ReviewsPanel controller=controller /> }
}
