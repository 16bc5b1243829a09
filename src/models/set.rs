use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Set: a release grouping of cards, keyed by `set_code`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Set {
    pub set_code: String,
    pub set_name: String,
    pub release_date: String,
    pub set_type: String,
    pub card_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_set_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_name: Option<String>,
    pub icon_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_digital: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_foil: Option<bool>,
}

impl Set {
    /// Storage key.
    pub fn key(&self) -> &str {
        &self.set_code
    }
}
