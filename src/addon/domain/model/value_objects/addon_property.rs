use serde::{Deserialize, Serialize};

/// Key/value pair from the hosting platform's property bag.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct AddonProperty {
    pub key: String,
    pub value: String,
}

impl AddonProperty {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
