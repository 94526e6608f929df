//! Пятикарточный покер: колода, оценка рук, стол дро-покера.
//!
//! Ядро — `eval`: классификация пяти карт в одну из десяти категорий
//! и счёт `category * 10^12 + tiebreak` для полного порядка рук.

pub mod api;
pub mod domain;
pub mod eval;
pub mod game;
pub mod infra;
