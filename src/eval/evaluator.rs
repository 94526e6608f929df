use std::any::Any;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::domain::card::Card;
use crate::domain::hand::Hand;

use super::analysis::{analyze, HandAnalysis};
use super::errors::EvalError;
use super::hand_rank::{Evaluation, HandCategory};
use super::strength::{poker_strength, StrengthFn, ACE_HIGH};

/// Одна проверка в цепочке: предикат над разбором руки и категория.
struct Tester {
    matches: fn(&HandAnalysis) -> bool,
    category: HandCategory,
}

/// Цепочка проверок от сильнейшей категории к слабейшей.
/// Побеждает первая сработавшая; последняя срабатывает всегда.
const TESTERS: [Tester; 10] = [
    Tester { matches: is_royal_straight_flush, category: HandCategory::RoyalStraightFlush },
    Tester { matches: is_straight_flush, category: HandCategory::StraightFlush },
    Tester { matches: is_four_of_a_kind, category: HandCategory::FourOfAKind },
    Tester { matches: is_full_house, category: HandCategory::FullHouse },
    Tester { matches: is_flush, category: HandCategory::Flush },
    Tester { matches: is_straight, category: HandCategory::Straight },
    Tester { matches: is_three_of_a_kind, category: HandCategory::ThreeOfAKind },
    Tester { matches: is_two_pair, category: HandCategory::TwoPair },
    Tester { matches: is_one_pair, category: HandCategory::OnePair },
    Tester { matches: always, category: HandCategory::NoPair },
];

fn is_royal_straight_flush(a: &HandAnalysis) -> bool {
    is_straight_flush(a) && a.top_strength() == ACE_HIGH
}

fn is_straight_flush(a: &HandAnalysis) -> bool {
    a.is_flush() && a.is_straight()
}

fn is_four_of_a_kind(a: &HandAnalysis) -> bool {
    a.counts_are(&[4, 1])
}

fn is_full_house(a: &HandAnalysis) -> bool {
    a.counts_are(&[3, 2])
}

fn is_flush(a: &HandAnalysis) -> bool {
    a.is_flush()
}

fn is_straight(a: &HandAnalysis) -> bool {
    a.is_straight()
}

fn is_three_of_a_kind(a: &HandAnalysis) -> bool {
    a.counts_are(&[3, 1, 1])
}

fn is_two_pair(a: &HandAnalysis) -> bool {
    a.counts_are(&[2, 2, 1])
}

fn is_one_pair(a: &HandAnalysis) -> bool {
    a.counts_are(&[2, 1, 1, 1])
}

fn always(_: &HandAnalysis) -> bool {
    true
}

/// Классифицировать уже разобранную руку.
pub fn classify(analysis: &HandAnalysis) -> Evaluation {
    let category = TESTERS
        .iter()
        .find(|t| (t.matches)(analysis))
        .map_or(HandCategory::NoPair, |t| t.category);
    Evaluation::new(category, analysis.tiebreak())
}

/// Оценщик пятикарточных рук с подключаемой функцией силы карты.
///
/// По умолчанию — покерная сила (`poker_strength`). Тайбрейк считается
/// по основанию 100, так что функция силы должна укладываться в 0..100.
#[derive(Clone, Copy, Debug)]
pub struct HandEvaluator {
    strength: StrengthFn,
}

impl Default for HandEvaluator {
    fn default() -> Self {
        Self::new(poker_strength)
    }
}

impl HandEvaluator {
    pub const fn new(strength: StrengthFn) -> Self {
        Self { strength }
    }

    pub fn strength(&self, card: &Card) -> u32 {
        (self.strength)(card)
    }

    pub fn analyze(&self, cards: &[Card]) -> Result<HandAnalysis, EvalError> {
        analyze(cards, self.strength)
    }

    /// Оценить ровно пять карт.
    pub fn evaluate(&self, cards: &[Card]) -> Result<Evaluation, EvalError> {
        let analysis = self.analyze(cards)?;
        let evaluation = classify(&analysis);
        log::debug!(
            "evaluated {:?} -> {} (tiebreak {})",
            cards.iter().map(ToString::to_string).collect::<Vec<_>>(),
            evaluation.label,
            evaluation.tiebreak
        );
        Ok(evaluation)
    }

    /// Переставить карты для показа: группы большего размера раньше,
    /// при равном размере — сильнее раньше. Карты равной силы и
    /// равного размера группы сохраняют взаимный порядок.
    pub fn sort(&self, cards: &mut [Card]) {
        let strength = self.strength;
        let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
        for card in cards.iter() {
            *counts.entry(strength(card)).or_insert(0) += 1;
        }
        cards.sort_by(|a, b| {
            let (sa, sb) = (strength(a), strength(b));
            counts[&sb].cmp(&counts[&sa]).then_with(|| sb.cmp(&sa))
        });
    }
}

/// Оценить пять карт покерной силой.
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, EvalError> {
    HandEvaluator::default().evaluate(cards)
}

/// Отсортировать карты для показа покерной силой.
pub fn sort_cards(cards: &mut [Card]) {
    HandEvaluator::default().sort(cards);
}

/// Сравнить руку с произвольным значением.
///
/// Сравнивать можно только с `Hand` (ровно этим типом), в том числе
/// лежащим в `Box<dyn Any>`; всё остальное — `IncomparableType`.
/// Две руки сравниваются по счёту и всегда успешно.
pub fn compare(hand: &Hand, other: &dyn Any) -> Result<Ordering, EvalError> {
    let mut other = other;
    while let Some(inner) = other.downcast_ref::<Box<dyn Any>>() {
        other = &**inner;
    }
    match other.downcast_ref::<Hand>() {
        Some(other) => Ok(hand.compare_strength(other)),
        None => Err(EvalError::IncomparableType),
    }
}
