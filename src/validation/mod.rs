//! Record validation for incoming set and card JSON.
//!
//! Each field has one rule that either returns the narrowed value or a
//! [`ValidationError`] naming the field, the broken rule and the offending
//! value. Record validators apply their field rules in a fixed order and
//! stop at the first failure, so a rejected record always reports exactly
//! one problem.
//!
//! ```
//! use mtg_catalog::validation::set::validate_set_code;
//! use serde_json::json;
//!
//! let err = validate_set_code(Some(&json!("?"))).unwrap_err();
//! assert!(err.to_string().contains("set_code must be alphanumeric"));
//! ```

pub mod card;
pub mod error;
pub mod fields;
pub mod legality;
pub mod links;
pub mod mana_cost;
pub mod nested;
pub mod set;
pub mod tokens;

pub use card::validate_card;
pub use error::{ValidationError, ViolationKind};
pub use fields::RawRecord;
pub use legality::validate_legality;
pub use links::{validate_purchase_links, validate_related_links};
pub use mana_cost::validate_mana_cost;
pub use nested::{validate_card_faces, validate_related_cards};
pub use set::validate_set;
