//! `card_faces` and `related_cards`: optional arrays that must be non-empty
//! when present. Each element is checked with the card rules and any failure
//! is reported under `card_faces[i]` / `related_cards[i]`.

use serde_json::Value;

use super::{card, set};
use super::error::{ValidationError, ViolationKind};
use super::fields::{self, FieldResult, RawRecord};
use crate::config::MAX_NESTED_RECORDS;
use crate::models::{CardFace, RelatedCard};

/// Borrow the elements of an optional non-empty array.
fn non_empty_array<'a>(field: &str, value: Option<&'a Value>) -> FieldResult<Option<&'a [Value]>> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let items = raw
        .as_array()
        .ok_or_else(|| fields::structural(field, "an array", raw))?;
    if items.is_empty() {
        return Err(ValidationError::new(field, ViolationKind::EmptyValue).with_value(raw));
    }
    if items.len() > MAX_NESTED_RECORDS {
        return Err(ValidationError::new(
            field,
            ViolationKind::StructuralViolation {
                expected: "an array within the nested record limit",
            },
        )
        .with_value(&Value::from(items.len())));
    }
    Ok(Some(items))
}

// ---------------------------------------------------------------------------
// card_faces
// ---------------------------------------------------------------------------

pub fn validate_card_face(raw: &Value) -> FieldResult<CardFace> {
    let r = RawRecord::from_value("card_face", raw)?;
    Ok(CardFace {
        name: card::validate_name(r.get("name"))?,
        type_line: card::validate_type_line(r.get("type_line"))?,
        mana_cost: card::validate_mana_cost(r.get("mana_cost"))?,
        oracle_text: card::validate_oracle_text(r.get("oracle_text"))?,
        power: card::validate_power(r.get("power"))?,
        toughness: card::validate_toughness(r.get("toughness"))?,
        loyalty: card::validate_loyalty(r.get("loyalty"))?,
        colors: fields::optional_colors("colors", r.get("colors"), true)?,
        color_indicator: card::validate_color_indicator(r.get("color_indicator"))?,
        artist: card::validate_artist(r.get("artist"))?,
        flavor_text: card::validate_flavor_text(r.get("flavor_text"))?,
        image_uri: card::validate_face_image_uri(r.get("image_uri"))?,
    })
}

pub fn validate_card_faces(value: Option<&Value>) -> FieldResult<Option<Vec<CardFace>>> {
    let Some(items) = non_empty_array("card_faces", value)? else {
        return Ok(None);
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            validate_card_face(item).map_err(|e| e.in_context(format!("card_faces[{i}]")))
        })
        .collect::<FieldResult<Vec<_>>>()
        .map(Some)
}

// ---------------------------------------------------------------------------
// related_cards
// ---------------------------------------------------------------------------

pub fn validate_related_card(raw: &Value) -> FieldResult<RelatedCard> {
    let r = RawRecord::from_value("related_card", raw)?;
    Ok(RelatedCard {
        name: card::validate_name(r.get("name"))?,
        set_code: set::validate_set_code(r.get("set_code"))?,
        collector_number: card::validate_collector_number(r.get("collector_number"))?,
    })
}

pub fn validate_related_cards(value: Option<&Value>) -> FieldResult<Option<Vec<RelatedCard>>> {
    let Some(items) = non_empty_array("related_cards", value)? else {
        return Ok(None);
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            validate_related_card(item).map_err(|e| e.in_context(format!("related_cards[{i}]")))
        })
        .collect::<FieldResult<Vec<_>>>()
        .map(Some)
}
