//! Single string value.

use serde::{Deserialize, Deserializer, Serialize};

/// A single string value.
///
/// Never absent: a missing or `null` value decodes as the empty string, and
/// the empty string means "no value yet".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarData {
    #[serde(default, deserialize_with = "null_as_empty")]
    value: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ScalarData {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// True when no value has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
