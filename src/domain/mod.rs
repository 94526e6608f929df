//! Доменная модель: карты, колода, рука игрока, конфиг стола.

pub mod card;
pub mod deck;
pub mod hand;
pub mod table;

pub use card::*;
pub use deck::*;
pub use hand::*;
pub use table::*;
