use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ReviewsError {
    /// Transport or JSON decoding failure from gloo-net.
    #[error("request failed: {0}")]
    Http(#[from] gloo_net::Error),

    /// A browser API call failed or an expected element is missing.
    #[error("dom error: {0}")]
    Dom(String),

    #[error("invalid mount options: {0}")]
    Config(String),
}

impl ReviewsError {
    pub fn dom(context: &str, value: JsValue) -> Self {
        let detail = value
            .as_string()
            .or_else(|| js_sys::JSON::stringify(&value).ok().and_then(|s| s.as_string()))
            .unwrap_or_else(|| "unknown".to_string());
        ReviewsError::Dom(format!("{context}: {detail}"))
    }

    pub fn missing(element_id: &str) -> Self {
        ReviewsError::Dom(format!("element #{element_id} not found"))
    }
}

impl From<ReviewsError> for JsValue {
    fn from(err: ReviewsError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
