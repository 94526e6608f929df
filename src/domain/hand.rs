use core::fmt;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::eval::{EvalError, Evaluation, HandEvaluator};

/// Сколько карт в покерной руке.
pub const HAND_SIZE: usize = 5;

/// Рука игрока: имя и упорядоченный список карт.
///
/// Структурное `PartialEq` сравнивает карты и имя; сила рук сравнивается
/// только через `compare_strength` / `eval::compare`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub name: String,
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::with_capacity(HAND_SIZE),
        }
    }

    pub fn with_cards(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == HAND_SIZE
    }

    /// Переставить карты для показа: сначала большие группы, внутри — по силе.
    pub fn sort(&mut self) {
        HandEvaluator::default().sort(&mut self.cards);
    }

    pub fn evaluate(&self) -> Result<Evaluation, EvalError> {
        HandEvaluator::default().evaluate(&self.cards)
    }

    pub fn score(&self) -> Result<u64, EvalError> {
        self.evaluate().map(|e| e.score())
    }

    /// Сравнение силы двух рук одного вида. Никогда не падает:
    /// рука, которую нельзя оценить (не 5 карт), слабее любой оценённой,
    /// две такие руки равны.
    pub fn compare_strength(&self, other: &Hand) -> Ordering {
        let a = self.score().ok();
        let b = other.score().ok();
        a.cmp(&b)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}
