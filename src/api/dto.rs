use serde::{Deserialize, Serialize};

use crate::eval::HandCategory;

/// DTO оценки руки: то, что получает слой отображения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluationDto {
    pub label: String,
    pub category: HandCategory,
    pub tiebreak: u64,
    pub score: u64,
}

/// DTO игрока на вскрытии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerResultDto {
    pub name: String,
    /// Карты в нотации `Ah`, `Td`, в порядке показа.
    pub cards: Vec<String>,
    pub evaluation: EvaluationDto,
}

/// DTO вскрытия.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownDto {
    /// От сильнейшего к слабейшему.
    pub players: Vec<PlayerResultDto>,
    /// Имя победителя, если он один.
    pub winner: Option<String>,
    /// Имена игроков, поделивших первое место.
    pub draw: Vec<String>,
}
