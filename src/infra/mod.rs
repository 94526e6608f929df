//! Инфраструктурный слой вокруг стола:
//! - RNG-реализации для игры;
//! - маппинги domain/game -> API DTO.

pub mod mapping;
pub mod rng;

pub use mapping::*;
pub use rng::*;
