pub mod card;
pub mod legality;
pub mod links;
pub mod set;

pub use card::*;
pub use legality::*;
pub use links::*;
pub use set::*;
