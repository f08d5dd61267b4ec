use serde::{Serialize, Serializer};
use std::fmt;

/// Opaque reference to the item (product) whose reviews are shown.
/// Handed in by the host page or the router, never created here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemRef(String);

impl ItemRef {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The reference as a single, percent-encoded URL path segment.
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl From<&str> for ItemRef {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ItemRef {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<i64> for ItemRef {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Canonical integers go out as JSON numbers, anything else (leading zeros,
// signs, non-digits) as the exact string used in the URL path.
impl Serialize for ItemRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.parse::<i64>() {
            Ok(id) if id.to_string() == self.0 => serializer.serialize_i64(id),
            _ => serializer.serialize_str(&self.0),
        }
    }
}
