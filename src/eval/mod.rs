//! Оценка пятикарточных покерных рук.
//!
//! Основные функции:
//!   `evaluate(cards) -> Result<Evaluation, EvalError>`
//!   `compare(hand, other) -> Result<Ordering, EvalError>`

pub mod analysis;
pub mod errors;
pub mod evaluator;
pub mod hand_rank;
pub mod strength;

pub use analysis::{analyze, HandAnalysis, StrengthGroup};
pub use errors::EvalError;
pub use evaluator::{classify, compare, evaluate, sort_cards, HandEvaluator};
pub use hand_rank::{Evaluation, HandCategory, CATEGORY_WEIGHT};
pub use strength::{game_strength, poker_strength, StrengthFn};
