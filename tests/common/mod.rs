//! Shared fixtures for the catalog integration tests.
//!
//! Provides valid raw set and card records plus helpers to open an in-memory
//! catalog and to tweak one field of a record.

#![allow(dead_code)]

use mtg_catalog::Catalog;
use serde_json::{json, Value};

/// The Unstable set record.
pub fn valid_set() -> Value {
    json!({
        "set_code": "ust",
        "set_name": "Unstable",
        "release_date": "2017-12-08",
        "set_type": "funny",
        "card_count": 268,
        "icon_uri": "https://assets.example.com/sets/ust.svg",
        "is_digital": false,
        "is_foil": false
    })
}

/// Dominaria, with the optional block fields filled in.
pub fn second_set() -> Value {
    json!({
        "set_code": "dom",
        "set_name": "Dominaria",
        "release_date": "2018-04-27",
        "set_type": "expansion",
        "card_count": 280,
        "block_code": "dom",
        "block_name": "Dominaria",
        "icon_uri": "https://assets.example.com/sets/dom.svg"
    })
}

/// Legality object with every required flag set.
pub fn valid_legality() -> Value {
    json!({
        "is_standard_legal": false,
        "is_future_legal": false,
        "is_frontier_legal": false,
        "is_modern_legal": false,
        "is_legacy_legal": true,
        "is_pauper_legal": false,
        "is_vintage_legal": true,
        "is_penny_legal": false,
        "is_commander_legal": true,
        "is_one_v_one_legal": true,
        "is_duel_legal": true
    })
}

/// A complete single-faced card from Unstable.
pub fn valid_card() -> Value {
    json!({
        "name": "Super-Duper Death Ray",
        "set_code": "ust",
        "set_name": "Unstable",
        "collector_number": "104",
        "layout": "normal",
        "type_line": "Sorcery",
        "converted_mana_cost": 6.0,
        "mana_cost": "{4}{R}{R}",
        "oracle_text": "Trample. Super-Duper Death Ray deals 4 damage to target creature.",
        "colors": ["R"],
        "color_identity": ["R"],
        "legality": valid_legality(),
        "usd_price": 0.25,
        "rarity": "uncommon",
        "frame": "2015",
        "border_color": "silver",
        "is_full_art": false,
        "artist": "Dmitry Burmak",
        "image_uri": "https://img.example.com/cards/ust/104.png",
        "related_links": {
            "gatherer": "https://gatherer.wizards.com/Pages/Card/Details.aspx?multiverseid=439484"
        },
        "purchase_links": {
            "tcgplayer": "https://shop.tcgplayer.com/magic/unstable/super-duper-death-ray"
        }
    })
}

/// A second, cheaper card in the same set.
pub fn creature_card() -> Value {
    json!({
        "name": "Crow Storm",
        "set_code": "ust",
        "set_name": "Unstable",
        "collector_number": "31",
        "layout": "normal",
        "type_line": "Sorcery",
        "converted_mana_cost": 1.0,
        "mana_cost": "{U}",
        "colors": ["U"],
        "color_identity": ["U"],
        "legality": valid_legality(),
        "rarity": "uncommon",
        "frame": "2015",
        "border_color": "silver",
        "is_full_art": false,
        "image_uri": "https://img.example.com/cards/ust/31.png"
    })
}

/// A transform card with two faces.
pub fn double_faced_card() -> Value {
    let mut card = valid_card();
    let obj = card.as_object_mut().unwrap();
    obj.insert("name".into(), json!("Delver of Secrets // Insectile Aberration"));
    obj.insert("collector_number".into(), json!("7"));
    obj.insert("layout".into(), json!("transform"));
    obj.insert("type_line".into(), json!("Creature — Human Wizard // Creature — Human Insect"));
    obj.insert("converted_mana_cost".into(), json!(1));
    obj.insert("mana_cost".into(), json!(""));
    obj.insert("colors".into(), json!(["U"]));
    obj.insert("color_identity".into(), json!(["U"]));
    obj.insert(
        "card_faces".into(),
        json!([
            {
                "name": "Delver of Secrets",
                "type_line": "Creature — Human Wizard",
                "mana_cost": "{U}",
                "power": "1",
                "toughness": "1",
                "colors": ["U"]
            },
            {
                "name": "Insectile Aberration",
                "type_line": "Creature — Human Insect",
                "mana_cost": "",
                "power": "3",
                "toughness": "2",
                "color_indicator": ["U"],
                "image_uri": "https://img.example.com/cards/isd/51b.png"
            }
        ]),
    );
    card
}

/// Return `record` with `field` replaced by `value`.
pub fn with(record: &Value, field: &str, value: Value) -> Value {
    let mut out = record.clone();
    out.as_object_mut().unwrap().insert(field.to_string(), value);
    out
}

/// Return `record` with `field` removed.
pub fn without(record: &Value, field: &str) -> Value {
    let mut out = record.clone();
    out.as_object_mut().unwrap().remove(field);
    out
}

/// An empty in-memory catalog.
pub fn setup_catalog() -> Catalog {
    Catalog::builder().build().unwrap()
}

/// An in-memory catalog holding both fixture sets and the three fixture cards.
pub fn setup_sample_catalog() -> Catalog {
    let catalog = setup_catalog();
    catalog.create_set(&valid_set()).unwrap();
    catalog.create_set(&second_set()).unwrap();
    catalog.create_card(&valid_card()).unwrap();
    catalog.create_card(&creature_card()).unwrap();
    catalog.create_card(&double_faced_card()).unwrap();
    catalog
}
