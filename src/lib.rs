pub mod api;
pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod controller;
pub mod errors;
pub mod form;
pub mod models;
pub mod render;
pub mod utils;

pub use api::{HttpBackend, ReviewBackend};
pub use config::ApiConfig;
pub use controller::{ReviewController, SubmitOutcome};
pub use errors::ReviewsError;
pub use models::{ItemRef, Review};

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// Mounts a review panel for `item_id` into the element `root_id` of a page
/// rendered elsewhere. `options` is `undefined` or `{ base: "https://..." }`.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn mount_reviews(root_id: &str, item_id: &str, options: JsValue) -> Result<(), JsValue> {
    use crate::components::reviews_panel::ItemReviews;
    use gloo_utils::format::JsValueSerdeExt;
    use leptos::logging::log;
    use leptos::*;

    utils::panic_hook::init();

    let config = if options.is_undefined() || options.is_null() {
        ApiConfig::from_document()
    } else {
        let parsed: ApiConfig = options
            .into_serde()
            .map_err(|e| ReviewsError::Config(e.to_string()))?;
        ApiConfig::new(parsed.base)
    };

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(root_id))
        .ok_or_else(|| ReviewsError::missing(root_id))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| ReviewsError::Dom(format!("#{root_id} is not an HTML element")))?;

    let item = ItemRef::new(item_id);
    log!("[MOUNT] Review panel for item {} in #{}", item, root_id);
    mount_to(root, move || view! { <ItemReviews item=item config=config /> });
    Ok(())
}
