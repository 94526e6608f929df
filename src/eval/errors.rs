use thiserror::Error;

/// Ошибки оценки и сравнения рук.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Рука должна содержать ровно 5 карт, получено {0}")]
    InvalidHandSize(usize),

    #[error("Руку можно сравнивать только с другой рукой")]
    IncomparableType,
}
