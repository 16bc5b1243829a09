pub mod cards;
pub mod meta;
pub mod sets;
