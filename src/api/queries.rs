use crate::api::dto::EvaluationDto;
use crate::api::errors::ApiError;
use crate::domain::card::parse_cards;
use crate::domain::hand::Hand;
use crate::eval::evaluate;
use crate::infra::mapping::map_evaluation_to_dto;

/// Оценить руку, заданную строкой вида `"As Ks Qs Js Ts"`.
pub fn evaluate_hand_str(input: &str) -> Result<EvaluationDto, ApiError> {
    let cards = parse_cards(input)?;
    let evaluation = evaluate(&cards)?;
    Ok(map_evaluation_to_dto(&evaluation))
}

/// Отсортировать руку для показа и вернуть её в нотации `Ah Td ...`.
pub fn sorted_hand_str(input: &str) -> Result<String, ApiError> {
    let mut hand = Hand::with_cards("", parse_cards(input)?);
    hand.sort();
    Ok(hand.to_string())
}
