use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CardRelatedLinks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardRelatedLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gatherer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcgplayer_decks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edhrec: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtgtop8: Option<String>,
}

// ---------------------------------------------------------------------------
// CardPurchaseLinks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardPurchaseLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amazon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ebay: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcgplayer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magiccardmarket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardhoarder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_kingdom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtgo_traders: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coolstuffinc: Option<String>,
}
