//! Set record validation.

mod common;

use mtg_catalog::validation::set::{self, validate_set};
use mtg_catalog::ViolationKind;
use serde_json::json;

// ---------------------------------------------------------------------------
// Whole records
// ---------------------------------------------------------------------------

#[test]
fn valid_set_passes() {
    let set = validate_set(&common::valid_set()).unwrap();
    assert_eq!(set.set_code, "ust");
    assert_eq!(set.set_name, "Unstable");
    assert_eq!(set.release_date, "2017-12-08");
    assert_eq!(set.set_type, "funny");
    assert_eq!(set.card_count, 268);
    assert_eq!(set.is_digital, Some(false));
    assert_eq!(set.parent_set_code, None);
}

#[test]
fn optional_fields_may_be_absent() {
    let raw = json!({
        "set_code": "pust",
        "set_name": "Unstable Promos",
        "release_date": "2017-12-08",
        "set_type": "promo",
        "card_count": 0,
        "icon_uri": "https://assets.example.com/sets/pust.svg"
    });
    let set = validate_set(&raw).unwrap();
    assert_eq!(set.card_count, 0);
    assert!(set.block_code.is_none());
    assert!(set.is_foil.is_none());
}

#[test]
fn non_object_is_structural_violation() {
    let err = validate_set(&json!(["ust"])).unwrap_err();
    assert_eq!(err.field(), "set");
    assert!(matches!(err.kind(), ViolationKind::StructuralViolation { .. }));
}

#[test]
fn first_failing_field_is_reported() {
    // set_name and release_date are both bad; set_name comes first
    let raw = common::with(&common::valid_set(), "set_name", json!(""));
    let raw = common::with(&raw, "release_date", json!("tomorrow"));
    let err = validate_set(&raw).unwrap_err();
    assert_eq!(err.field(), "set_name");
    assert_eq!(*err.kind(), ViolationKind::EmptyValue);
}

#[test]
fn null_required_field_is_missing() {
    let raw = common::with(&common::valid_set(), "set_type", json!(null));
    let err = validate_set(&raw).unwrap_err();
    assert_eq!(err.field(), "set_type");
    assert_eq!(*err.kind(), ViolationKind::MissingRequired);
    assert_eq!(err.to_string(), "set_type invalid: set_type is required.");
}

// ---------------------------------------------------------------------------
// set_code
// ---------------------------------------------------------------------------

#[test]
fn set_code_rejects_punctuation() {
    let err = set::validate_set_code(Some(&json!("?"))).unwrap_err();
    assert!(matches!(err.kind(), ViolationKind::FormatViolation { .. }));
    assert_eq!(
        err.to_string(),
        "set_code invalid: set_code must be alphanumeric. *** set_code = ?"
    );
}

#[test]
fn set_code_rejects_empty_and_non_string() {
    let err = set::validate_set_code(Some(&json!(""))).unwrap_err();
    assert_eq!(*err.kind(), ViolationKind::EmptyValue);

    let err = set::validate_set_code(Some(&json!(42))).unwrap_err();
    assert!(matches!(err.kind(), ViolationKind::TypeMismatch { .. }));
    assert_eq!(err.value(), Some("42"));
}

#[test]
fn set_code_accepts_digits() {
    assert_eq!(set::validate_set_code(Some(&json!("10e"))).unwrap(), "10e");
}

// ---------------------------------------------------------------------------
// release_date
// ---------------------------------------------------------------------------

#[test]
fn release_date_requires_iso_order() {
    let err = set::validate_release_date(Some(&json!("12-08-2017"))).unwrap_err();
    assert!(matches!(err.kind(), ViolationKind::FormatViolation { .. }));
    assert_eq!(err.value(), Some("12-08-2017"));
}

#[test]
fn release_date_requires_dashes() {
    let err = set::validate_release_date(Some(&json!("2017/12/08"))).unwrap_err();
    assert!(matches!(err.kind(), ViolationKind::FormatViolation { .. }));
}

#[test]
fn release_date_rejects_impossible_day() {
    assert!(set::validate_release_date(Some(&json!("2017-02-30"))).is_err());
    assert!(set::validate_release_date(Some(&json!("2017-2-08"))).is_err());
}

// ---------------------------------------------------------------------------
// Other fields
// ---------------------------------------------------------------------------

#[test]
fn set_type_outside_vocabulary_is_domain_violation() {
    let err = set::validate_set_type(Some(&json!("draft_innovation"))).unwrap_err();
    assert_eq!(*err.kind(), ViolationKind::DomainViolation);
}

#[test]
fn card_count_must_be_whole_and_non_negative() {
    assert!(set::validate_card_count(Some(&json!(-1))).is_err());
    assert!(set::validate_card_count(Some(&json!(2.5))).is_err());
    let err = set::validate_card_count(Some(&json!("268"))).unwrap_err();
    assert!(matches!(err.kind(), ViolationKind::TypeMismatch { .. }));
}

#[test]
fn optional_strings_reject_empty_when_present() {
    let raw = common::with(&common::valid_set(), "block_name", json!(""));
    let err = validate_set(&raw).unwrap_err();
    assert_eq!(err.field(), "block_name");
    assert_eq!(*err.kind(), ViolationKind::EmptyValue);

    let raw = common::with(&common::valid_set(), "parent_set_code", json!("u-st"));
    let err = validate_set(&raw).unwrap_err();
    assert_eq!(err.field(), "parent_set_code");
}

#[test]
fn every_optional_string_is_non_empty_when_present() {
    for field in ["parent_set_code", "block_code", "block_name"] {
        let raw = common::with(&common::valid_set(), field, json!(""));
        let err = validate_set(&raw).unwrap_err();
        assert_eq!(err.field(), field);
        assert_eq!(*err.kind(), ViolationKind::EmptyValue, "{field}");

        let raw = common::without(&common::second_set(), field);
        assert!(validate_set(&raw).is_ok(), "{field}");
    }
}

#[test]
fn icon_uri_must_be_svg() {
    let err = set::validate_icon_uri(Some(&json!("https://assets.example.com/sets/ust.png")))
        .unwrap_err();
    assert!(matches!(err.kind(), ViolationKind::FormatViolation { .. }));
    assert!(set::validate_icon_uri(Some(&json!("https://assets.example.com/ust.SVG?v=2"))).is_ok());
}

#[test]
fn is_foil_must_be_boolean() {
    let raw = common::with(&common::valid_set(), "is_foil", json!("false"));
    let err = validate_set(&raw).unwrap_err();
    assert_eq!(err.field(), "is_foil");
    assert!(matches!(err.kind(), ViolationKind::TypeMismatch { .. }));
}
