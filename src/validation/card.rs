//! Field and record rules for cards.
//!
//! Faces and related cards reuse these rules for their fields of the same
//! name, so a face's `power` is checked exactly like the card's.

use serde_json::Value;

use super::fields::{self, FieldResult, RawRecord};
use super::nested::{validate_card_faces, validate_related_cards};
use super::tokens::{BORDER_COLORS, FRAMES, LAYOUTS, LOYALTIES, POWER_TOUGHNESS, RARITIES, WATERMARKS};
use super::{legality, links, mana_cost, set};
use crate::models::Card;

const CONTEXT: &str = "card";

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

pub fn validate_name(value: Option<&Value>) -> FieldResult<String> {
    fields::required_non_empty("name", value)
}

pub fn validate_set_code(value: Option<&Value>) -> FieldResult<String> {
    set::validate_set_code(value).map_err(|e| e.in_context(CONTEXT))
}

pub fn validate_set_name(value: Option<&Value>) -> FieldResult<String> {
    set::validate_set_name(value).map_err(|e| e.in_context(CONTEXT))
}

pub fn validate_collector_number(value: Option<&Value>) -> FieldResult<String> {
    fields::required_alphanumeric("collector_number", value)
}

pub fn validate_layout(value: Option<&Value>) -> FieldResult<String> {
    fields::required_token("layout", value, &LAYOUTS)
}

pub fn validate_type_line(value: Option<&Value>) -> FieldResult<String> {
    fields::required_non_empty("type_line", value)
}

// ---------------------------------------------------------------------------
// Cost and stats
// ---------------------------------------------------------------------------

pub fn validate_converted_mana_cost(value: Option<&Value>) -> FieldResult<f64> {
    fields::required_non_negative("converted_mana_cost", value)
}

pub fn validate_mana_cost(value: Option<&Value>) -> FieldResult<String> {
    mana_cost::validate_mana_cost(value)
}

pub fn validate_oracle_text(value: Option<&Value>) -> FieldResult<Option<String>> {
    fields::optional_non_empty("oracle_text", value)
}

pub fn validate_power(value: Option<&Value>) -> FieldResult<Option<String>> {
    fields::optional_token("power", value, &POWER_TOUGHNESS)
}

pub fn validate_toughness(value: Option<&Value>) -> FieldResult<Option<String>> {
    fields::optional_token("toughness", value, &POWER_TOUGHNESS)
}

pub fn validate_loyalty(value: Option<&Value>) -> FieldResult<Option<String>> {
    fields::optional_token("loyalty", value, &LOYALTIES)
}

pub fn validate_life_modifier(value: Option<&Value>) -> FieldResult<Option<String>> {
    fields::optional_signed_integer("life_modifier", value)
}

pub fn validate_hand_modifier(value: Option<&Value>) -> FieldResult<Option<String>> {
    fields::optional_signed_integer("hand_modifier", value)
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub fn validate_colors(value: Option<&Value>) -> FieldResult<Vec<String>> {
    fields::required_colors("colors", value)
}

pub fn validate_color_indicator(value: Option<&Value>) -> FieldResult<Option<Vec<String>>> {
    fields::optional_colors("color_indicator", value, false)
}

pub fn validate_color_identity(value: Option<&Value>) -> FieldResult<Vec<String>> {
    fields::required_colors("color_identity", value)
}

// ---------------------------------------------------------------------------
// Prices
// ---------------------------------------------------------------------------

pub fn validate_usd_price(value: Option<&Value>) -> FieldResult<Option<f64>> {
    fields::optional_non_negative("usd_price", value)
}

pub fn validate_tix_price(value: Option<&Value>) -> FieldResult<Option<f64>> {
    fields::optional_non_negative("tix_price", value)
}

pub fn validate_eur_price(value: Option<&Value>) -> FieldResult<Option<f64>> {
    fields::optional_non_negative("eur_price", value)
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

pub fn validate_rarity(value: Option<&Value>) -> FieldResult<String> {
    fields::required_token("rarity", value, &RARITIES)
}

pub fn validate_frame(value: Option<&Value>) -> FieldResult<String> {
    fields::required_token("frame", value, &FRAMES)
}

pub fn validate_watermark(value: Option<&Value>) -> FieldResult<Option<String>> {
    fields::optional_token("watermark", value, &WATERMARKS)
}

pub fn validate_border_color(value: Option<&Value>) -> FieldResult<String> {
    fields::required_token("border_color", value, &BORDER_COLORS)
}

pub fn validate_is_full_art(value: Option<&Value>) -> FieldResult<bool> {
    fields::required_bool("is_full_art", value)
}

pub fn validate_is_digital(value: Option<&Value>) -> FieldResult<Option<bool>> {
    set::validate_is_digital(value).map_err(|e| e.in_context(CONTEXT))
}

pub fn validate_artist(value: Option<&Value>) -> FieldResult<Option<String>> {
    fields::optional_non_empty("artist", value)
}

pub fn validate_flavor_text(value: Option<&Value>) -> FieldResult<Option<String>> {
    fields::optional_non_empty("flavor_text", value)
}

pub fn validate_story_spotlight_number(value: Option<&Value>) -> FieldResult<Option<String>> {
    fields::optional_alphanumeric("story_spotlight_number", value)
}

pub fn validate_story_spotlight_uri(value: Option<&Value>) -> FieldResult<Option<String>> {
    fields::optional_uri("story_spotlight_uri", value)
}

pub fn validate_is_timeshifted(value: Option<&Value>) -> FieldResult<Option<bool>> {
    fields::optional_bool("is_timeshifted", value)
}

pub fn validate_is_colorshifted(value: Option<&Value>) -> FieldResult<Option<bool>> {
    fields::optional_bool("is_colorshifted", value)
}

pub fn validate_is_futureshifted(value: Option<&Value>) -> FieldResult<Option<bool>> {
    fields::optional_bool("is_futureshifted", value)
}

const IMAGE_EXTENSION: &str = ".png";
const IMAGE_URI_EXPECTED: &str = "a valid absolute URI ending in .png";

pub fn validate_image_uri(value: Option<&Value>) -> FieldResult<String> {
    fields::required_file_uri("image_uri", value, IMAGE_EXTENSION, IMAGE_URI_EXPECTED)
}

/// A face may carry its own image; when present it follows the card rule.
pub fn validate_face_image_uri(value: Option<&Value>) -> FieldResult<Option<String>> {
    fields::optional_file_uri("image_uri", value, IMAGE_EXTENSION, IMAGE_URI_EXPECTED)
}

// ---------------------------------------------------------------------------
// validate_card
// ---------------------------------------------------------------------------

/// Check every card field in order and narrow the record to a [`Card`].
///
/// Stops at the first broken rule. Keys outside the card schema are ignored.
pub fn validate_card(raw: &Value) -> FieldResult<Card> {
    let r = RawRecord::from_value(CONTEXT, raw)?;
    Ok(Card {
        name: validate_name(r.get("name"))?,
        set_code: validate_set_code(r.get("set_code"))?,
        set_name: validate_set_name(r.get("set_name"))?,
        collector_number: validate_collector_number(r.get("collector_number"))?,
        layout: validate_layout(r.get("layout"))?,
        type_line: validate_type_line(r.get("type_line"))?,
        converted_mana_cost: validate_converted_mana_cost(r.get("converted_mana_cost"))?,
        mana_cost: validate_mana_cost(r.get("mana_cost"))?,
        oracle_text: validate_oracle_text(r.get("oracle_text"))?,
        power: validate_power(r.get("power"))?,
        toughness: validate_toughness(r.get("toughness"))?,
        loyalty: validate_loyalty(r.get("loyalty"))?,
        life_modifier: validate_life_modifier(r.get("life_modifier"))?,
        hand_modifier: validate_hand_modifier(r.get("hand_modifier"))?,
        colors: validate_colors(r.get("colors"))?,
        color_indicator: validate_color_indicator(r.get("color_indicator"))?,
        color_identity: validate_color_identity(r.get("color_identity"))?,
        card_faces: validate_card_faces(r.get("card_faces"))?,
        related_cards: validate_related_cards(r.get("related_cards"))?,
        legality: legality::validate_legality(r.get("legality"))?,
        usd_price: validate_usd_price(r.get("usd_price"))?,
        tix_price: validate_tix_price(r.get("tix_price"))?,
        eur_price: validate_eur_price(r.get("eur_price"))?,
        rarity: validate_rarity(r.get("rarity"))?,
        frame: validate_frame(r.get("frame"))?,
        watermark: validate_watermark(r.get("watermark"))?,
        border_color: validate_border_color(r.get("border_color"))?,
        is_full_art: validate_is_full_art(r.get("is_full_art"))?,
        is_digital: validate_is_digital(r.get("is_digital"))?,
        artist: validate_artist(r.get("artist"))?,
        flavor_text: validate_flavor_text(r.get("flavor_text"))?,
        story_spotlight_number: validate_story_spotlight_number(r.get("story_spotlight_number"))?,
        story_spotlight_uri: validate_story_spotlight_uri(r.get("story_spotlight_uri"))?,
        is_timeshifted: validate_is_timeshifted(r.get("is_timeshifted"))?,
        is_colorshifted: validate_is_colorshifted(r.get("is_colorshifted"))?,
        is_futureshifted: validate_is_futureshifted(r.get("is_futureshifted"))?,
        image_uri: validate_image_uri(r.get("image_uri"))?,
        related_links: links::validate_related_links(r.get("related_links"))?,
        purchase_links: links::validate_purchase_links(r.get("purchase_links"))?,
    })
}
