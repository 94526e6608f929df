//! Внешняя граница: DTO для слоя отображения, запросы и ошибки API.

pub mod dto;
pub mod errors;
pub mod queries;

pub use dto::*;
pub use errors::ApiError;
pub use queries::{evaluate_hand_str, sorted_hand_str};
