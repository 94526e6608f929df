use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::hand::HAND_SIZE;

/// Размер стандартной колоды.
pub const DECK_SIZE: usize = 52;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

/// Почему конфиг стола не годится.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("количество игроков должно быть от {MIN_PLAYERS} до {MAX_PLAYERS}, получено {0}")]
    PlayerCount(usize),

    #[error("нельзя сбросить больше {HAND_SIZE} карт, получено {0}")]
    TooManyDiscards(usize),

    #[error("не хватит колоды: нужно до {demand} карт, в колоде {DECK_SIZE}")]
    DeckTooSmall { demand: usize },
}

/// Конфиг стола для дро-покера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Количество игроков (2–10).
    pub players: usize,
    /// Сколько карт игрок может сбросить за один обмен (0 = без обмена).
    pub max_discards: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            players: 5,
            max_discards: 3,
        }
    }
}

impl TableConfig {
    pub fn new(players: usize, max_discards: usize) -> Self {
        Self {
            players,
            max_discards,
        }
    }

    /// Проверка конфига.
    ///
    /// В худшем случае каждый игрок получает 5 карт и ещё `max_discards`
    /// при обмене — всё это должно поместиться в одну колоду.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(ConfigError::PlayerCount(self.players));
        }
        if self.max_discards > HAND_SIZE {
            return Err(ConfigError::TooManyDiscards(self.max_discards));
        }
        let demand = self.players * (HAND_SIZE + self.max_discards);
        if demand > DECK_SIZE {
            return Err(ConfigError::DeckTooSmall { demand });
        }
        Ok(())
    }
}
