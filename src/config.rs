/// Where the review API lives and how its endpoints are spelled.
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlMetaElement;

use crate::models::ItemRef;

/// `<meta name="reviews-api-base" content="https://...">` overrides the base.
pub const BASE_META_NAME: &str = "reviews-api-base";

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ApiConfig {
    /// Prefix for every endpoint; empty means same origin.
    #[serde(default)]
    pub base: String,
}

impl ApiConfig {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Reads the base from the page's meta tag, falling back to same origin.
    pub fn from_document() -> Self {
        let content = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| {
                document
                    .query_selector(&format!("meta[name=\"{BASE_META_NAME}\"]"))
                    .ok()
                    .flatten()
            })
            .and_then(|element| element.dyn_into::<HtmlMetaElement>().ok())
            .map(|meta| meta.content());

        match content {
            Some(base) => Self::new(base),
            None => Self::default(),
        }
    }

    pub fn reviews_for(&self, item: &ItemRef) -> String {
        format!("{}/reviews/for/{}", self.base, item.path_segment())
    }

    pub fn thumb_up(&self) -> String {
        format!("{}/reviews/thumb-up", self.base)
    }

    pub fn suggest(&self) -> String {
        format!("{}/reviews/ai", self.base)
    }

    pub fn create(&self) -> String {
        format!("{}/reviews", self.base)
    }
}
