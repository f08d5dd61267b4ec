use leptos::logging::{log, warn};
use wasm_bindgen::prelude::*;

use crate::errors::ReviewsError;

// Bootstrap 5 modal, loaded by the host page as the global `bootstrap`.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "Modal")]
    pub type Modal;

    #[wasm_bindgen(js_namespace = ["bootstrap", "Modal"], js_name = "getInstance")]
    fn get_instance(element: &web_sys::Element) -> Option<Modal>;

    #[wasm_bindgen(js_namespace = ["bootstrap", "Modal"], js_name = "getOrCreateInstance")]
    fn get_or_create_instance(element: &web_sys::Element) -> Modal;

    #[wasm_bindgen(method)]
    fn show(this: &Modal);

    #[wasm_bindgen(method)]
    fn hide(this: &Modal);
}

fn modal_element(id: &str) -> Result<web_sys::Element, ReviewsError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .ok_or_else(|| ReviewsError::missing(id))
}

/// Hides the modal with the given id. A modal that was never opened has no
/// instance, which leaves nothing to hide.
pub fn hide_modal(id: &str) -> Result<(), ReviewsError> {
    let element = modal_element(id)?;
    match get_instance(&element) {
        Some(modal) => {
            log!("[MODAL] Hiding #{}", id);
            modal.hide();
        }
        None => warn!("[MODAL] #{} has no Bootstrap instance", id),
    }
    Ok(())
}

pub fn show_modal(id: &str) -> Result<(), ReviewsError> {
    let element = modal_element(id)?;
    get_or_create_instance(&element).show();
    Ok(())
}
