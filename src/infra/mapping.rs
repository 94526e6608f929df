use crate::api::dto::{EvaluationDto, PlayerResultDto, ShowdownDto};
use crate::domain::card::Card;
use crate::eval::Evaluation;
use crate::game::{Outcome, PlayerResult, Showdown};

pub fn map_evaluation_to_dto(evaluation: &Evaluation) -> EvaluationDto {
    EvaluationDto {
        label: evaluation.label.to_string(),
        category: evaluation.category,
        tiebreak: evaluation.tiebreak,
        score: evaluation.score(),
    }
}

fn cards_to_strings(cards: &[Card]) -> Vec<String> {
    cards.iter().map(ToString::to_string).collect()
}

pub fn map_player_result_to_dto(result: &PlayerResult) -> PlayerResultDto {
    PlayerResultDto {
        name: result.name.clone(),
        cards: cards_to_strings(&result.cards),
        evaluation: map_evaluation_to_dto(&result.evaluation),
    }
}

/// Showdown -> ShowdownDto для слоя отображения.
pub fn map_showdown_to_dto(showdown: &Showdown) -> ShowdownDto {
    let (winner, draw) = match &showdown.outcome {
        Outcome::Winner(name) => (Some(name.clone()), Vec::new()),
        Outcome::Draw(names) => (None, names.clone()),
    };
    ShowdownDto {
        players: showdown.results.iter().map(map_player_result_to_dto).collect(),
        winner,
        draw,
    }
}
