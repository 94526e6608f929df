use core::fmt;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Множитель категории в итоговом счёте руки.
///
/// `score = category.ordinal() * CATEGORY_WEIGHT + tiebreak`.
/// Тайбрейк пяти групп не превышает 14_14_14_14_14 < 10^12.
pub const CATEGORY_WEIGHT: u64 = 1_000_000_000_000;

/// Категория покерной руки по силе. Сравнение категорий — только порядковое.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    NoPair = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalStraightFlush = 10,
}

impl HandCategory {
    pub const ALL: [HandCategory; 10] = [
        HandCategory::NoPair,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalStraightFlush,
    ];

    /// Порядковый номер категории (1..=10).
    pub const fn ordinal(self) -> u64 {
        self as u64
    }

    /// Название для показа. Строки фиксированы: на них завязан слой отображения.
    pub const fn label(self) -> &'static str {
        match self {
            HandCategory::NoPair => "No pair",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pairs",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
            HandCategory::RoyalStraightFlush => "Royal straight flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Результат оценки руки.
///
/// `label` всегда совпадает с `category.label()`, поэтому равенство
/// структур равносильно равенству счёта.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
pub struct Evaluation {
    pub category: HandCategory,
    /// Сравнение внутри одной категории: силы групп по две десятичные цифры.
    pub tiebreak: u64,
    pub label: &'static str,
}

impl Evaluation {
    pub fn new(category: HandCategory, tiebreak: u64) -> Self {
        Self {
            category,
            tiebreak,
            label: category.label(),
        }
    }

    /// Итоговый счёт: категория — старшая часть, тайбрейк — младшая.
    pub fn score(&self) -> u64 {
        self.category.ordinal() * CATEGORY_WEIGHT + self.tiebreak
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score().cmp(&other.score())
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}
