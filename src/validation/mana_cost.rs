//! Mana cost tokenizer.
//!
//! A cost is a run of tightly bracketed symbols such as `{2}{G}{G}`. The
//! string is cut at every `}` and each piece, re-closed, must be a known
//! symbol, so anything outside a bracket pair (`W`, `{2}G`) never matches.

use serde_json::Value;

use super::fields::{self, FieldResult};
use super::tokens::MANA_SYMBOLS;
use crate::config::MAX_MANA_COST_LEN;

/// Split a non-empty cost into its bracketed symbols.
///
/// Returns `None` as soon as a piece is not a known symbol.
pub fn tokenize(cost: &str) -> Option<Vec<&str>> {
    let mut symbols = Vec::new();
    let mut start = 0;
    for (i, _) in cost.match_indices('}') {
        let symbol = &cost[start..=i];
        if !MANA_SYMBOLS.contains(symbol) {
            return None;
        }
        symbols.push(symbol);
        start = i + 1;
    }
    // trailing text after the last `}`
    if start != cost.len() {
        return None;
    }
    Some(symbols)
}

/// Validate a mana cost. Required; `""` means the card has no cost.
pub fn validate_mana_cost(value: Option<&Value>) -> FieldResult<String> {
    let field = "mana_cost";
    let cost = fields::required_str(field, value)?;
    if cost.is_empty() {
        return Ok(String::new());
    }
    if cost.chars().count() > MAX_MANA_COST_LEN {
        return Err(fields::format_violation(
            field,
            "a mana cost of reasonable length",
            &Value::String(cost.to_string()),
        ));
    }
    if tokenize(cost).is_none() {
        return Err(fields::format_violation(
            field,
            "a sequence of mana symbols like {2}{G}",
            &Value::String(cost.to_string()),
        ));
    }
    Ok(cost.to_string())
}
