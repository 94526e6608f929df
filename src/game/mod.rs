//! Пятикарточный дро-покер за одним столом.
//!
//! Высокоуровневый объект: `DrawGame`
//! Основные операции:
//!   - `deal` – раздать по пять карт
//!   - `exchange` – сбросить карты и добрать из колоды
//!   - `showdown` – вскрыться и определить победителя

pub mod draw;
pub mod errors;

pub use draw::{DrawGame, Outcome, PlayerResult, Showdown};
pub use errors::GameError;

/// RNG интерфейс для игры. Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
