//! Keyed storage and filtered listing for canonical records.
//!
//! Each store borrows a [`Connection`](crate::connection::Connection) and
//! only ever receives records that already passed validation.

pub mod cards;
pub mod sets;

pub use cards::{CardFilter, CardStore};
pub use sets::{SetFilter, SetStore};
