use thiserror::Error;

use crate::domain::table::ConfigError;
use crate::eval::EvalError;

/// Ошибки игрового стола.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Некорректный конфиг стола: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Карты уже розданы")]
    AlreadyDealt,

    #[error("Карты ещё не розданы")]
    NotDealt,

    #[error("Игрок {0} не найден за столом")]
    PlayerNotFound(usize),

    #[error("Игрок {0} уже менял карты в этом раунде")]
    AlreadyExchanged(usize),

    #[error("Нельзя сбросить {requested} карт, максимум {allowed}")]
    TooManyDiscards { requested: usize, allowed: usize },

    #[error("Нет карты на позиции {0}")]
    InvalidCardPosition(usize),

    #[error("В колоде закончились карты")]
    DeckExhausted,

    #[error(transparent)]
    Eval(#[from] EvalError),
}
