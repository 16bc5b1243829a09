//! Turn request bodies into canonical records.
//!
//! `create_set` and `create_card` validate the whole record and build the
//! canonical value field by field. The result holds exactly the schema's
//! fields: unknown keys never make it across, and optional fields that were
//! absent or `null` stay `None` and are left out when serialized. Running a
//! canonical record back through its `create_*` function yields the same
//! record.

use serde_json::Value;
use tracing::debug;

use crate::models::{Card, Set};
use crate::validation::{self, RawRecord, ValidationError};

pub fn create_set(raw: &Value) -> Result<Set, ValidationError> {
    let set = validation::validate_set(raw)?;
    debug!(
        set_code = %set.set_code,
        dropped = dropped_keys(raw, SET_FIELDS),
        "normalized set"
    );
    Ok(set)
}

pub fn create_card(raw: &Value) -> Result<Card, ValidationError> {
    let card = validation::validate_card(raw)?;
    debug!(
        set_code = %card.set_code,
        collector_number = %card.collector_number,
        dropped = dropped_keys(raw, CARD_FIELDS),
        "normalized card"
    );
    Ok(card)
}

/// Top-level keys of a canonical set.
pub const SET_FIELDS: &[&str] = &[
    "set_code",
    "set_name",
    "release_date",
    "set_type",
    "card_count",
    "parent_set_code",
    "block_code",
    "block_name",
    "icon_uri",
    "is_digital",
    "is_foil",
];

/// Top-level keys of a canonical card.
pub const CARD_FIELDS: &[&str] = &[
    "name",
    "set_code",
    "set_name",
    "collector_number",
    "layout",
    "type_line",
    "converted_mana_cost",
    "mana_cost",
    "oracle_text",
    "power",
    "toughness",
    "loyalty",
    "life_modifier",
    "hand_modifier",
    "colors",
    "color_indicator",
    "color_identity",
    "card_faces",
    "related_cards",
    "legality",
    "usd_price",
    "tix_price",
    "eur_price",
    "rarity",
    "frame",
    "watermark",
    "border_color",
    "is_full_art",
    "is_digital",
    "artist",
    "flavor_text",
    "story_spotlight_number",
    "story_spotlight_uri",
    "is_timeshifted",
    "is_colorshifted",
    "is_futureshifted",
    "image_uri",
    "related_links",
    "purchase_links",
];

/// Number of input keys outside `known`.
fn dropped_keys(raw: &Value, known: &[&str]) -> usize {
    RawRecord::from_value("record", raw)
        .map(|r| r.keys().filter(|k| !known.contains(k)).count())
        .unwrap_or(0)
}
