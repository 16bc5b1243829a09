//! Card record validation: field rules, nested records and error paths.

mod common;

use mtg_catalog::validation::card::{self, validate_card};
use mtg_catalog::validation::{fields, nested};
use mtg_catalog::{config, ViolationKind};
use serde_json::json;

// ---------------------------------------------------------------------------
// Whole records
// ---------------------------------------------------------------------------

#[test]
fn valid_card_passes() {
    let card = validate_card(&common::valid_card()).unwrap();
    assert_eq!(card.key(), ("ust", "104"));
    assert_eq!(card.mana_cost, "{4}{R}{R}");
    assert_eq!(card.converted_mana_cost, 6.0);
    assert_eq!(card.colors, vec!["R"]);
    assert!(card.legality.is_legacy_legal);
    assert_eq!(card.usd_price, Some(0.25));
    let purchase = card.purchase_links.unwrap();
    assert!(purchase.tcgplayer.is_some());
    assert!(purchase.amazon.is_none());
}

#[test]
fn double_faced_card_passes() {
    let card = validate_card(&common::double_faced_card()).unwrap();
    let faces = card.card_faces.unwrap();
    assert_eq!(faces.len(), 2);
    assert_eq!(faces[1].color_indicator, Some(vec!["U".to_string()]));
    assert_eq!(faces[1].mana_cost, "");
    assert!(faces[0].image_uri.is_none());
}

#[test]
fn checks_stop_at_first_failure_in_field_order() {
    // rarity precedes image_uri
    let raw = common::with(&common::valid_card(), "rarity", json!("bonus"));
    let raw = common::with(&raw, "image_uri", json!("not a uri"));
    let err = validate_card(&raw).unwrap_err();
    assert_eq!(err.field(), "rarity");

    // name precedes everything
    let raw = common::without(&raw, "name");
    let err = validate_card(&raw).unwrap_err();
    assert_eq!(err.field(), "name");
    assert_eq!(*err.kind(), ViolationKind::MissingRequired);
}

#[test]
fn set_fields_are_reported_in_card_context() {
    let raw = common::with(&common::valid_card(), "set_code", json!("u st"));
    let err = validate_card(&raw).unwrap_err();
    assert_eq!(err.path(), ["card"]);
    assert_eq!(err.field(), "set_code");
    assert_eq!(
        err.to_string(),
        "card set_code invalid: set_code must be alphanumeric. *** set_code = u st"
    );

    let raw = common::with(&common::valid_card(), "is_digital", json!(1));
    let err = validate_card(&raw).unwrap_err();
    assert_eq!(err.location(), "card.is_digital");
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

#[test]
fn colors_may_be_empty_but_must_be_present() {
    let raw = common::with(&common::valid_card(), "colors", json!([]));
    assert!(validate_card(&raw).unwrap().colors.is_empty());

    let raw = common::without(&common::valid_card(), "colors");
    let err = validate_card(&raw).unwrap_err();
    assert_eq!(err.field(), "colors");
    assert_eq!(*err.kind(), ViolationKind::MissingRequired);
}

#[test]
fn repeated_color_is_uniqueness_violation() {
    let err = card::validate_colors(Some(&json!(["U", "U"]))).unwrap_err();
    assert_eq!(*err.kind(), ViolationKind::UniquenessViolation);
    assert_eq!(err.value(), Some("U"));
}

#[test]
fn unknown_color_is_domain_violation() {
    let err = card::validate_colors(Some(&json!(["U", "P"]))).unwrap_err();
    assert_eq!(*err.kind(), ViolationKind::DomainViolation);
    assert_eq!(err.value(), Some("P"));
}

#[test]
fn colors_must_be_an_array_of_strings() {
    let err = card::validate_colors(Some(&json!("U"))).unwrap_err();
    assert!(matches!(err.kind(), ViolationKind::StructuralViolation { .. }));

    let err = card::validate_colors(Some(&json!([1]))).unwrap_err();
    assert!(matches!(err.kind(), ViolationKind::TypeMismatch { .. }));
}

#[test]
fn color_indicator_must_not_be_empty() {
    assert!(card::validate_color_indicator(None).unwrap().is_none());
    let err = card::validate_color_indicator(Some(&json!([]))).unwrap_err();
    assert_eq!(*err.kind(), ViolationKind::EmptyValue);
}

// ---------------------------------------------------------------------------
// Stats and modifiers
// ---------------------------------------------------------------------------

#[test]
fn power_and_toughness_use_printed_values() {
    for value in ["*", "1+*", "-1", ".5", "∞", "99"] {
        assert!(card::validate_power(Some(&json!(value))).is_ok(), "{value}");
    }
    let err = card::validate_toughness(Some(&json!("18"))).unwrap_err();
    assert_eq!(*err.kind(), ViolationKind::DomainViolation);
}

#[test]
fn loyalty_accepts_x() {
    assert_eq!(card::validate_loyalty(Some(&json!("X"))).unwrap(), Some("X".to_string()));
    assert!(card::validate_loyalty(Some(&json!("11"))).is_err());
}

#[test]
fn vanguard_modifiers_are_signed_integers() {
    assert!(card::validate_life_modifier(Some(&json!("+3"))).is_ok());
    assert!(card::validate_hand_modifier(Some(&json!("-1"))).is_ok());
    assert!(card::validate_hand_modifier(Some(&json!("0"))).is_ok());
    assert!(card::validate_life_modifier(Some(&json!("+"))).is_err());
    assert!(card::validate_life_modifier(Some(&json!("three"))).is_err());
}

#[test]
fn every_optional_string_is_non_empty_when_present() {
    for field in [
        "oracle_text",
        "power",
        "toughness",
        "loyalty",
        "life_modifier",
        "hand_modifier",
        "watermark",
        "artist",
        "flavor_text",
        "story_spotlight_number",
    ] {
        let raw = common::with(&common::valid_card(), field, json!(""));
        let err = validate_card(&raw).unwrap_err();
        assert_eq!(err.field(), field);
        assert_eq!(*err.kind(), ViolationKind::EmptyValue, "{field}");

        let raw = common::without(&common::valid_card(), field);
        assert!(validate_card(&raw).is_ok(), "{field}");
    }
}

#[test]
fn converted_mana_cost_must_be_non_negative_number() {
    assert_eq!(card::validate_converted_mana_cost(Some(&json!(0.5))).unwrap(), 0.5);
    assert!(card::validate_converted_mana_cost(Some(&json!(-1))).is_err());
    let err = card::validate_converted_mana_cost(Some(&json!("6"))).unwrap_err();
    assert!(matches!(err.kind(), ViolationKind::TypeMismatch { .. }));
}

#[test]
fn prices_are_optional_non_negative() {
    let raw = common::with(&common::valid_card(), "eur_price", json!(-0.1));
    let err = validate_card(&raw).unwrap_err();
    assert_eq!(err.field(), "eur_price");
}

#[test]
fn collector_number_is_alphanumeric() {
    assert!(card::validate_collector_number(Some(&json!("51b"))).is_ok());
    assert!(card::validate_collector_number(Some(&json!("51★"))).is_err());
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

#[test]
fn enumerated_fields_reject_unknown_tokens() {
    for (field, bad) in [
        ("layout", "saga"),
        ("frame", "2020"),
        ("border_color", "red"),
        ("watermark", "hogwarts"),
    ] {
        let raw = common::with(&common::valid_card(), field, json!(bad));
        let err = validate_card(&raw).unwrap_err();
        assert_eq!(err.field(), field);
        assert_eq!(*err.kind(), ViolationKind::DomainViolation);
    }
}

#[test]
fn is_full_art_is_required() {
    let raw = common::without(&common::valid_card(), "is_full_art");
    let err = validate_card(&raw).unwrap_err();
    assert_eq!(err.field(), "is_full_art");
    assert_eq!(*err.kind(), ViolationKind::MissingRequired);
}

#[test]
fn story_spotlight_uri_must_be_web_uri() {
    let raw = common::with(
        &common::valid_card(),
        "story_spotlight_uri",
        json!("ftp://stories.example.com/ust"),
    );
    let err = validate_card(&raw).unwrap_err();
    assert_eq!(err.field(), "story_spotlight_uri");
}

// ---------------------------------------------------------------------------
// image_uri
// ---------------------------------------------------------------------------

#[test]
fn image_uri_requires_png() {
    let err = card::validate_image_uri(Some(&json!("https://img.example.com/card.jpg")))
        .unwrap_err();
    assert!(matches!(err.kind(), ViolationKind::FormatViolation { .. }));
    assert!(err.to_string().contains("ending in .png"));
}

#[test]
fn image_uri_requires_dotted_host() {
    assert!(card::validate_image_uri(Some(&json!("http://test/card.png"))).is_err());
    assert!(card::validate_image_uri(Some(&json!("card.png"))).is_err());
    assert!(card::validate_image_uri(Some(&json!("http://127.0.0.1/card.png"))).is_ok());
}

#[test]
fn image_uri_ignores_query_string() {
    let uri = "https://img.example.com/cards/ust/104.png?1512563211";
    assert_eq!(card::validate_image_uri(Some(&json!(uri))).unwrap(), uri);
}

#[test]
fn optional_file_uri_checks_only_present_values() {
    let expected = "a valid absolute URI ending in .png";
    assert_eq!(fields::optional_file_uri("image_uri", None, ".png", expected).unwrap(), None);

    let uri = json!("https://img.example.com/cards/isd/51b.png");
    assert_eq!(
        fields::optional_file_uri("image_uri", Some(&uri), ".png", expected).unwrap(),
        Some("https://img.example.com/cards/isd/51b.png".to_string())
    );

    let err = fields::optional_file_uri("image_uri", Some(&json!("https://img.example.com/51b.jpg")), ".png", expected)
        .unwrap_err();
    assert!(matches!(err.kind(), ViolationKind::FormatViolation { .. }));
    assert_eq!(err.value(), Some("https://img.example.com/51b.jpg"));

    let err = fields::optional_file_uri("image_uri", Some(&json!("")), ".png", expected).unwrap_err();
    assert_eq!(*err.kind(), ViolationKind::EmptyValue);
}

#[test]
fn face_image_uri_follows_card_rule() {
    assert_eq!(card::validate_face_image_uri(None).unwrap(), None);
    let err = card::validate_face_image_uri(Some(&json!("https://img.example.com/fire.jpg")))
        .unwrap_err();
    assert!(err.to_string().contains("ending in .png"));
}

// ---------------------------------------------------------------------------
// card_faces / related_cards
// ---------------------------------------------------------------------------

#[test]
fn empty_card_faces_is_rejected() {
    let err = nested::validate_card_faces(Some(&json!([]))).unwrap_err();
    assert_eq!(err.field(), "card_faces");
    assert_eq!(*err.kind(), ViolationKind::EmptyValue);
}

#[test]
fn face_errors_carry_index() {
    let faces = json!([
        { "name": "Fire", "type_line": "Instant", "mana_cost": "{1}{R}" },
        { "name": "", "type_line": "Instant", "mana_cost": "{2}{U}" }
    ]);
    let err = nested::validate_card_faces(Some(&faces)).unwrap_err();
    assert_eq!(err.path(), ["card_faces[1]"]);
    assert_eq!(err.field(), "name");
    assert_eq!(err.location(), "card_faces[1].name");
    assert!(err.to_string().starts_with("card_faces[1] name invalid:"));
}

#[test]
fn face_image_uri_is_optional_but_checked() {
    let faces = json!([
        {
            "name": "Fire",
            "type_line": "Instant",
            "mana_cost": "{1}{R}",
            "image_uri": "https://img.example.com/fire.jpg"
        }
    ]);
    let err = nested::validate_card_faces(Some(&faces)).unwrap_err();
    assert_eq!(err.location(), "card_faces[0].image_uri");
}

#[test]
fn face_errors_surface_through_card() {
    let mut raw = common::double_faced_card();
    raw["card_faces"][0]["mana_cost"] = json!("U");
    let err = validate_card(&raw).unwrap_err();
    assert_eq!(err.location(), "card_faces[0].mana_cost");
}

#[test]
fn related_card_requires_key_fields() {
    let related = json!([
        { "name": "Grusilda, Monster Masher", "set_code": "ust", "collector_number": "50" },
        { "name": "Crow Storm", "set_code": "ust" }
    ]);
    let err = nested::validate_related_cards(Some(&related)).unwrap_err();
    assert_eq!(err.location(), "related_cards[1].collector_number");
    assert_eq!(*err.kind(), ViolationKind::MissingRequired);
}

#[test]
fn related_card_set_code_has_no_card_context() {
    let related = json!([{ "name": "Crow Storm", "set_code": "u-st", "collector_number": "31" }]);
    let err = nested::validate_related_cards(Some(&related)).unwrap_err();
    assert_eq!(err.path(), ["related_cards[0]"]);
    assert_eq!(err.field(), "set_code");
}

#[test]
fn oversized_nested_array_is_structural_violation() {
    let face = json!({ "name": "Fire", "type_line": "Instant", "mana_cost": "{R}" });

    let at_limit = json!(vec![face.clone(); config::MAX_NESTED_RECORDS]);
    assert!(nested::validate_card_faces(Some(&at_limit)).is_ok());

    let over = json!(vec![face; config::MAX_NESTED_RECORDS + 1]);
    let err = nested::validate_card_faces(Some(&over)).unwrap_err();
    assert!(matches!(err.kind(), ViolationKind::StructuralViolation { .. }));
    assert_eq!(
        err.value(),
        Some((config::MAX_NESTED_RECORDS + 1).to_string().as_str())
    );
    assert!(err.to_string().contains("nested record limit"));
}

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

#[test]
fn purchase_link_errors_name_the_container() {
    let raw = common::with(
        &common::valid_card(),
        "purchase_links",
        json!({ "ebay": "not a link" }),
    );
    let err = validate_card(&raw).unwrap_err();
    assert_eq!(err.path(), ["purchase_links"]);
    assert_eq!(err.field(), "ebay");
}

#[test]
fn unknown_link_keys_are_dropped() {
    let raw = common::with(
        &common::valid_card(),
        "related_links",
        json!({ "edhrec": "https://edhrec.com/cards/crow-storm", "scryfall": "junk" }),
    );
    let card = validate_card(&raw).unwrap();
    let links = card.related_links.unwrap();
    assert!(links.edhrec.is_some());
    assert!(links.gatherer.is_none());
}

#[test]
fn links_must_be_objects() {
    let raw = common::with(&common::valid_card(), "related_links", json!(["x"]));
    let err = validate_card(&raw).unwrap_err();
    assert_eq!(err.field(), "related_links");
    assert!(matches!(err.kind(), ViolationKind::StructuralViolation { .. }));
}
