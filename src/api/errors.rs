use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::CardError;
use crate::eval::EvalError;
use crate::game::GameError;

/// Ошибки внешнего API (то, что отдаём слою отображения / CLI).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (битая карта, битый список позиций).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Ошибка оценки руки.
    #[error("evaluation error: {0}")]
    EvalError(String),

    /// Команда не может быть выполнена в текущем состоянии стола.
    #[error("game error: {0}")]
    GameError(String),
}

impl From<CardError> for ApiError {
    fn from(err: CardError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<EvalError> for ApiError {
    fn from(err: EvalError) -> Self {
        ApiError::EvalError(err.to_string())
    }
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::Eval(inner) => inner.into(),
            other => ApiError::GameError(other.to_string()),
        }
    }
}
