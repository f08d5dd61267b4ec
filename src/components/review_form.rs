use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::logging::{error, warn};
use leptos::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::api::ReviewBackend;
use crate::bootstrap;
use crate::controller::{ReviewController, SubmitOutcome, SUBMIT_FALLBACK_ERROR};
use crate::form::serialize_form;

pub const MODAL_ID: &str = "newReviewModal";

fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// New-review dialog: the form, the AI suggestion button and its hint panel.
#[component]
pub fn NewReviewForm<B: ReviewBackend + 'static>(controller: Rc<ReviewController<B>>) -> impl IntoView {
    let form_ref = create_node_ref::<html::Form>();
    let hint = controller.hint;

    let on_suggest = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            let Some(form) = form_ref.get() else {
                return;
            };
            let draft = match serialize_form(&form) {
                Ok(record) => record.suggest_request(),
                Err(err) => {
                    error!("[AI] Could not read the review form: {}", err);
                    return;
                }
            };
            let controller = controller.clone();
            spawn_local(async move {
                controller.suggest(draft).await;
            });
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get() else {
            return;
        };
        let record = match serialize_form(&form) {
            Ok(record) => record,
            Err(err) => {
                error!("[SUBMIT] Could not read the review form: {}", err);
                return;
            }
        };
        let controller = controller.clone();
        spawn_local(async move {
            let closed = move || {
                if let Err(err) = bootstrap::hide_modal(MODAL_ID) {
                    warn!("[SUBMIT] {}", err);
                }
                form.reset();
            };
            match controller.submit(record, closed).await {
                Ok(SubmitOutcome::Created) => {}
                Ok(SubmitOutcome::Rejected(message)) => show_alert(&message),
                Err(err) => {
                    error!("[SUBMIT] Request failed: {}", err);
                    show_alert(SUBMIT_FALLBACK_ERROR);
                }
            }
        });
    };

    view! {
        <div class="modal fade" id=MODAL_ID tabindex="-1" aria-labelledby="newReviewTitle" aria-hidden="true">
            <div class="modal-dialog">
                <div class="modal-content">
                    <form id="reviewForm" node_ref=form_ref on:submit=on_submit>
                        <div class="modal-header">
                            <h5 class="modal-title" id="newReviewTitle">"Write a review"</h5>
                            <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
                        </div>
                        <div class="modal-body">
                            <div class="mb-2">
                                <label class="form-label" for="revTitle">"Title"</label>
                                <input class="form-control" id="revTitle" name="title" type="text" />
                            </div>
                            <div class="mb-2">
                                <label class="form-label" for="revText">"Review"</label>
                                <textarea class="form-control" id="revText" name="review_text" rows="4"></textarea>
                            </div>
                            <div class="row g-2 mb-2">
                                <div class="col">
                                    <label class="form-label" for="revRating">"Rating"</label>
                                    <select class="form-select" id="revRating" name="rating">
                                        <option value="5">"5"</option>
                                        <option value="4">"4"</option>
                                        <option value="3">"3"</option>
                                        <option value="2">"2"</option>
                                        <option value="1">"1"</option>
                                    </select>
                                </div>
                                <div class="col">
                                    <label class="form-label" for="revAge">"Age"</label>
                                    <input class="form-control" id="revAge" name="age" type="number" min="0" />
                                </div>
                            </div>
                            <div class="form-check mb-2">
                                <input class="form-check-input" id="revRecommended" name="recommended" type="checkbox" value="1" />
                                <label class="form-check-label" for="revRecommended">"I recommend this item"</label>
                            </div>
                            <div
                                id="aiHint"
                                class=move || {
                                    if hint.with(Option::is_some) {
                                        "alert alert-light py-2 small"
                                    } else {
                                        "alert alert-light py-2 small d-none"
                                    }
                                }
                            >
                                "AI suggestion: "
                                <strong id="aiLabel">
                                    {move || hint.with(|h| h.as_ref().map(|h| h.sentiment.label()).unwrap_or_default())}
                                </strong>
                                " ("
                                <span id="aiProb">
                                    {move || hint.with(|h| h.as_ref().map(|h| h.percent_label()).unwrap_or_default())}
                                </span>
                                ")"
                                {move || {
                                    hint.with(|h| h.as_ref().is_some_and(|h| h.degraded))
                                        .then(|| view! { <span class="text-muted ms-1">"(heuristic)"</span> })
                                }}
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-outline-secondary" id="btnSuggest" on:click=on_suggest>
                                "Suggest sentiment"
                            </button>
                            <button type="submit" class="btn btn-primary">"Submit review"</button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
