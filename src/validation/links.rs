//! `related_links` and `purchase_links`: optional objects of named URIs.
//! Every key that is present must hold a well-formed absolute web URI;
//! keys outside the known set are dropped.

use serde_json::Value;

use super::fields::{self, FieldResult, RawRecord};
use crate::models::{CardPurchaseLinks, CardRelatedLinks};

pub fn validate_related_links(value: Option<&Value>) -> FieldResult<Option<CardRelatedLinks>> {
    const CONTEXT: &str = "related_links";
    let Some(raw) = value else {
        return Ok(None);
    };
    let r = RawRecord::from_value(CONTEXT, raw)?;
    let uri = |key: &str| fields::optional_uri(key, r.get(key)).map_err(|e| e.in_context(CONTEXT));

    Ok(Some(CardRelatedLinks {
        gatherer: uri("gatherer")?,
        tcgplayer_decks: uri("tcgplayer_decks")?,
        edhrec: uri("edhrec")?,
        mtgtop8: uri("mtgtop8")?,
    }))
}

pub fn validate_purchase_links(value: Option<&Value>) -> FieldResult<Option<CardPurchaseLinks>> {
    const CONTEXT: &str = "purchase_links";
    let Some(raw) = value else {
        return Ok(None);
    };
    let r = RawRecord::from_value(CONTEXT, raw)?;
    let uri = |key: &str| fields::optional_uri(key, r.get(key)).map_err(|e| e.in_context(CONTEXT));

    Ok(Some(CardPurchaseLinks {
        amazon: uri("amazon")?,
        ebay: uri("ebay")?,
        tcgplayer: uri("tcgplayer")?,
        magiccardmarket: uri("magiccardmarket")?,
        cardhoarder: uri("cardhoarder")?,
        card_kingdom: uri("card_kingdom")?,
        mtgo_traders: uri("mtgo_traders")?,
        coolstuffinc: uri("coolstuffinc")?,
    }))
}
