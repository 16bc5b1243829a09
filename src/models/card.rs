use serde::{Deserialize, Serialize};

use super::legality::CardLegality;
use super::links::{CardPurchaseLinks, CardRelatedLinks};

// ---------------------------------------------------------------------------
// Card: one printing, keyed by (set_code, collector_number)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    // -- identity --
    pub name: String,
    pub set_code: String,
    pub set_name: String,
    pub collector_number: String,
    pub layout: String,
    pub type_line: String,

    // -- cost and stats --
    pub converted_mana_cost: f64,
    pub mana_cost: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toughness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_modifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hand_modifier: Option<String>,

    // -- colors --
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_indicator: Option<Vec<String>>,
    pub color_identity: Vec<String>,

    // -- nested records --
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_faces: Option<Vec<CardFace>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_cards: Option<Vec<RelatedCard>>,
    pub legality: CardLegality,

    // -- prices --
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tix_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eur_price: Option<f64>,

    // -- presentation --
    pub rarity: String,
    pub frame: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watermark: Option<String>,
    pub border_color: String,
    pub is_full_art: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_digital: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_spotlight_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_spotlight_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_timeshifted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_colorshifted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_futureshifted: Option<bool>,
    pub image_uri: String,

    // -- links --
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_links: Option<CardRelatedLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_links: Option<CardPurchaseLinks>,
}

impl Card {
    /// Storage key: `(set_code, collector_number)`.
    pub fn key(&self) -> (&str, &str) {
        (&self.set_code, &self.collector_number)
    }
}

// ---------------------------------------------------------------------------
// CardFace: one face of a multi-faced card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    pub name: String,
    pub type_line: String,
    pub mana_cost: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toughness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_indicator: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
}

// ---------------------------------------------------------------------------
// RelatedCard: pointer to another printing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedCard {
    pub name: String,
    pub set_code: String,
    pub collector_number: String,
}
