//! `legality`: one required legal flag per play format, checked for every
//! format before any of the optional banned/restricted flags.

use serde_json::Value;

use super::error::ValidationError;
use super::fields::{self, FieldResult, RawRecord};
use crate::models::CardLegality;

const CONTEXT: &str = "legality";

pub fn validate_legality(value: Option<&Value>) -> FieldResult<CardLegality> {
    let raw = value.ok_or_else(|| ValidationError::missing(CONTEXT))?;
    let r = RawRecord::from_value(CONTEXT, raw)?;
    let legal = |key: &str| fields::required_bool(key, r.get(key)).map_err(|e| e.in_context(CONTEXT));
    let flag = |key: &str| fields::optional_bool(key, r.get(key)).map_err(|e| e.in_context(CONTEXT));

    Ok(CardLegality {
        is_standard_legal: legal("is_standard_legal")?,
        is_future_legal: legal("is_future_legal")?,
        is_frontier_legal: legal("is_frontier_legal")?,
        is_modern_legal: legal("is_modern_legal")?,
        is_legacy_legal: legal("is_legacy_legal")?,
        is_pauper_legal: legal("is_pauper_legal")?,
        is_vintage_legal: legal("is_vintage_legal")?,
        is_penny_legal: legal("is_penny_legal")?,
        is_commander_legal: legal("is_commander_legal")?,
        is_one_v_one_legal: legal("is_one_v_one_legal")?,
        is_duel_legal: legal("is_duel_legal")?,
        is_standard_banned: flag("is_standard_banned")?,
        is_standard_restricted: flag("is_standard_restricted")?,
        is_future_banned: flag("is_future_banned")?,
        is_future_restricted: flag("is_future_restricted")?,
        is_frontier_banned: flag("is_frontier_banned")?,
        is_frontier_restricted: flag("is_frontier_restricted")?,
        is_modern_banned: flag("is_modern_banned")?,
        is_modern_restricted: flag("is_modern_restricted")?,
        is_legacy_banned: flag("is_legacy_banned")?,
        is_legacy_restricted: flag("is_legacy_restricted")?,
        is_pauper_banned: flag("is_pauper_banned")?,
        is_pauper_restricted: flag("is_pauper_restricted")?,
        is_vintage_banned: flag("is_vintage_banned")?,
        is_vintage_restricted: flag("is_vintage_restricted")?,
        is_penny_banned: flag("is_penny_banned")?,
        is_penny_restricted: flag("is_penny_restricted")?,
        is_commander_banned: flag("is_commander_banned")?,
        is_commander_restricted: flag("is_commander_restricted")?,
        is_one_v_one_banned: flag("is_one_v_one_banned")?,
        is_one_v_one_restricted: flag("is_one_v_one_restricted")?,
        is_duel_banned: flag("is_duel_banned")?,
        is_duel_restricted: flag("is_duel_restricted")?,
    })
}
