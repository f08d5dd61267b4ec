use serde::Serialize;
use serde_json::{Map, Number, Value};
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

use crate::errors::ReviewsError;
use crate::models::{ItemRef, SuggestRequest};

/// Fields sent as numbers no matter what the input holds.
const NUMERIC_FIELDS: [&str; 2] = ["rating", "age"];

/// Field name -> value of a serialized form. `rating` and `age` are numbers,
/// everything else is the raw string the browser gave us.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct FormRecord(Map<String, Value>);

impl FormRecord {
    /// Builds a record from `(name, value)` pairs. Later duplicates win.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Map::new();
        for (key, value) in fields {
            map.insert(key.into(), Value::String(value.into()));
        }
        for key in NUMERIC_FIELDS {
            let number = coerce_number(map.get(key));
            map.insert(key.to_string(), Value::Number(number));
        }
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn text(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    pub fn with_item(mut self, item: &ItemRef) -> Self {
        let value = serde_json::to_value(item).unwrap_or_else(|_| Value::String(item.to_string()));
        self.0.insert("item_id".to_string(), value);
        self
    }

    /// The subset the sentiment endpoint wants.
    pub fn suggest_request(&self) -> SuggestRequest {
        SuggestRequest {
            title: self.text("title"),
            review_text: self.text("review_text"),
        }
    }
}

/// Absent, empty or non-numeric input becomes 0; whole numbers stay integers.
fn coerce_number(value: Option<&Value>) -> Number {
    let parsed = match value {
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Number(n)) => n.as_f64(),
        _ => None,
    };
    match parsed {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            Number::from(f as i64)
        }
        Some(f) => Number::from_f64(f).unwrap_or_else(|| Number::from(0)),
        None => Number::from(0),
    }
}

/// Reads every string entry of a form through the browser's `FormData`.
pub fn form_fields(form: &HtmlFormElement) -> Result<Vec<(String, String)>, ReviewsError> {
    let data = FormData::new_with_form(form).map_err(|e| ReviewsError::dom("FormData", e))?;
    let entries = js_sys::try_iter(&data)
        .map_err(|e| ReviewsError::dom("FormData entries", e))?
        .ok_or_else(|| ReviewsError::Dom("FormData is not iterable".to_string()))?;

    let mut fields = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ReviewsError::dom("FormData entry", e))?;
        let pair: js_sys::Array = entry.unchecked_into();
        let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) else {
            // File inputs yield Blob values; nothing here sends files.
            continue;
        };
        fields.push((key, value));
    }
    Ok(fields)
}

pub fn serialize_form(form: &HtmlFormElement) -> Result<FormRecord, ReviewsError> {
    Ok(FormRecord::from_fields(form_fields(form)?))
}
