// src/models/review.rs
use serde::de::{self, Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};

use crate::models::item::ItemRef;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,            // Backend row id, when the API exposes it
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub review_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: i64,                // 0-5 stars
    #[serde(default, deserialize_with = "bool_or_flag")]
    pub recommended: bool,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub positive_feedback: Option<i64>, // "Helpful" votes
}

/// Nullable columns come back as `null`; treat that like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `true`/`false` as well as the `0`/`1` flags sqlite-backed APIs emit.
fn bool_or_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(false),
        Some(Flag::Bool(b)) => Ok(b),
        Some(Flag::Int(n)) => Ok(n != 0),
        Some(Flag::Float(f)) => Ok(f != 0.0),
        Some(Flag::Text(s)) => match s.trim() {
            "" | "0" | "false" => Ok(false),
            "1" | "true" | "on" => Ok(true),
            other => Err(de::Error::custom(format!("invalid recommended flag: {other}"))),
        },
    }
}

/// The `{success, data/error}` wrapper every endpoint answers with.
#[derive(Deserialize, Debug, Clone)]
pub struct Envelope<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// The payload, or `None` when the call failed or carried no data.
    pub fn into_data(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}

/// Envelope whose payload nobody reads.
pub type Ack = Envelope<IgnoredAny>;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VoteRequest {
    pub item_id: ItemRef,
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_id: Option<i64>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct SuggestRequest {
    pub title: String,
    pub review_text: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SuggestResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendation: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub confidence: f64,
    // Set when the backend answered with its rule-based fallback model
    #[serde(default, deserialize_with = "null_as_default")]
    pub degraded: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
        }
    }
}

/// What the AI hint panel shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub sentiment: Sentiment,
    pub percent: u32,
    pub degraded: bool,
}

impl Suggestion {
    pub fn from_response(response: &SuggestResponse) -> Option<Self> {
        if !response.success {
            return None;
        }
        let sentiment = if response.recommendation {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        };
        let percent = if response.confidence.is_finite() {
            (response.confidence * 100.0).round().max(0.0) as u32
        } else {
            0
        };
        Some(Self {
            sentiment,
            percent,
            degraded: response.degraded,
        })
    }

    pub fn percent_label(&self) -> String {
        format!("{}%", self.percent)
    }
}
