//! Field and record rules for sets.
//!
//! `validate_set_code`, `validate_set_name` and `validate_is_digital` are
//! also the rules cards apply to their fields of the same name.

use serde_json::Value;

use super::fields::{self, FieldResult, RawRecord};
use super::tokens::SET_TYPES;
use crate::models::Set;

pub fn validate_set_code(value: Option<&Value>) -> FieldResult<String> {
    fields::required_alphanumeric("set_code", value)
}

pub fn validate_set_name(value: Option<&Value>) -> FieldResult<String> {
    fields::required_non_empty("set_name", value)
}

pub fn validate_release_date(value: Option<&Value>) -> FieldResult<String> {
    fields::required_date("release_date", value)
}

pub fn validate_set_type(value: Option<&Value>) -> FieldResult<String> {
    fields::required_token("set_type", value, &SET_TYPES)
}

pub fn validate_card_count(value: Option<&Value>) -> FieldResult<u64> {
    fields::required_count("card_count", value)
}

pub fn validate_parent_set_code(value: Option<&Value>) -> FieldResult<Option<String>> {
    fields::optional_alphanumeric("parent_set_code", value)
}

pub fn validate_block_code(value: Option<&Value>) -> FieldResult<Option<String>> {
    fields::optional_alphanumeric("block_code", value)
}

pub fn validate_block_name(value: Option<&Value>) -> FieldResult<Option<String>> {
    fields::optional_non_empty("block_name", value)
}

pub fn validate_icon_uri(value: Option<&Value>) -> FieldResult<String> {
    fields::required_file_uri(
        "icon_uri",
        value,
        ".svg",
        "a valid absolute URI ending in .svg",
    )
}

pub fn validate_is_digital(value: Option<&Value>) -> FieldResult<Option<bool>> {
    fields::optional_bool("is_digital", value)
}

pub fn validate_is_foil(value: Option<&Value>) -> FieldResult<Option<bool>> {
    fields::optional_bool("is_foil", value)
}

/// Check every set field in order and narrow the record to a [`Set`].
///
/// Stops at the first broken rule. Keys outside the set schema are ignored.
pub fn validate_set(raw: &Value) -> FieldResult<Set> {
    let record = RawRecord::from_value("set", raw)?;
    Ok(Set {
        set_code: validate_set_code(record.get("set_code"))?,
        set_name: validate_set_name(record.get("set_name"))?,
        release_date: validate_release_date(record.get("release_date"))?,
        set_type: validate_set_type(record.get("set_type"))?,
        card_count: validate_card_count(record.get("card_count"))?,
        parent_set_code: validate_parent_set_code(record.get("parent_set_code"))?,
        block_code: validate_block_code(record.get("block_code"))?,
        block_name: validate_block_name(record.get("block_name"))?,
        icon_uri: validate_icon_uri(record.get("icon_uri"))?,
        is_digital: validate_is_digital(record.get("is_digital"))?,
        is_foil: validate_is_foil(record.get("is_foil"))?,
    })
}
