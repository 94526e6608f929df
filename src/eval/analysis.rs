use std::collections::BTreeMap;

use crate::domain::card::{Card, Suit};
use crate::domain::hand::HAND_SIZE;

use super::errors::EvalError;
use super::strength::StrengthFn;

/// Основание, по которому силы групп складываются в тайбрейк.
pub const TIEBREAK_BASE: u64 = 100;

/// Смещения от младшей карты у стрита.
pub const STRAIGHT_OFFSETS: [u32; HAND_SIZE] = [0, 1, 2, 3, 4];

/// Группа карт одной силы.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrengthGroup {
    pub strength: u32,
    pub count: u8,
}

/// Разбор пяти карт, по которому работают все проверки категорий.
///
/// Считается заново при каждой оценке и больше не меняется.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandAnalysis {
    /// Силы карт в исходном порядке.
    pub strengths: [u32; HAND_SIZE],
    /// Сколько раз встречается каждая сила.
    pub counts_by_strength: BTreeMap<u32, u8>,
    /// Размеры групп по убыванию: [3, 2] у фулл-хауса, [2, 1, 1, 1] у пары.
    pub counts_descending: Vec<u8>,
    /// Группы: сначала по размеру (desc), затем по силе (desc).
    pub groups: Vec<StrengthGroup>,
    /// Отсортированные силы минус минимальная. У стрита это [0, 1, 2, 3, 4].
    pub adjusted_strengths: [u32; HAND_SIZE],
    /// Сколько разных мастей в руке.
    pub distinct_suits: usize,
}

impl HandAnalysis {
    pub fn is_flush(&self) -> bool {
        self.distinct_suits == 1
    }

    /// Строгий стрит: пять подряд идущих сил. Туз всегда 14,
    /// поэтому A-2-3-4-5 стритом не считается.
    pub fn is_straight(&self) -> bool {
        self.adjusted_strengths == STRAIGHT_OFFSETS
    }

    pub fn top_strength(&self) -> u32 {
        self.strengths.iter().copied().max().unwrap_or(0)
    }

    pub fn counts_are(&self, pattern: &[u8]) -> bool {
        self.counts_descending == pattern
    }

    /// Свернуть силы групп в одно число по основанию 100.
    pub fn tiebreak(&self) -> u64 {
        self.groups
            .iter()
            .fold(0, |acc, g| acc * TIEBREAK_BASE + u64::from(g.strength))
    }
}

/// Разобрать руку. Ошибка, если карт не ровно пять.
pub fn analyze(cards: &[Card], strength: StrengthFn) -> Result<HandAnalysis, EvalError> {
    let cards: [Card; HAND_SIZE] = cards
        .try_into()
        .map_err(|_| EvalError::InvalidHandSize(cards.len()))?;

    let strengths = cards.map(|c| strength(&c));

    let mut counts_by_strength: BTreeMap<u32, u8> = BTreeMap::new();
    for s in strengths {
        *counts_by_strength.entry(s).or_insert(0) += 1;
    }

    let mut groups: Vec<StrengthGroup> = counts_by_strength
        .iter()
        .map(|(&strength, &count)| StrengthGroup { strength, count })
        .collect();
    groups.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| b.strength.cmp(&a.strength))
    });

    let counts_descending: Vec<u8> = groups.iter().map(|g| g.count).collect();

    let mut sorted = strengths;
    sorted.sort_unstable();
    let lowest = sorted[0];
    let adjusted_strengths = sorted.map(|s| s - lowest);

    let mut suits: Vec<Suit> = cards.iter().map(|c| c.suit).collect();
    suits.sort_unstable();
    suits.dedup();

    Ok(HandAnalysis {
        strengths,
        counts_by_strength,
        counts_descending,
        groups,
        adjusted_strengths,
        distinct_suits: suits.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::parse_cards;
    use crate::eval::strength::poker_strength;

    fn analysis(s: &str) -> HandAnalysis {
        let cards = parse_cards(s).expect("valid cards");
        analyze(&cards, poker_strength).expect("five cards")
    }

    #[test]
    fn full_house_groups_and_counts() {
        let a = analysis("Kc Kd 3s Ks 3h");
        assert_eq!(a.counts_descending, vec![3, 2]);
        assert_eq!(
            a.groups,
            vec![
                StrengthGroup { strength: 13, count: 3 },
                StrengthGroup { strength: 3, count: 2 },
            ]
        );
        assert_eq!(a.counts_by_strength.get(&13), Some(&3));
        assert_eq!(a.tiebreak(), 13_03);
        assert!(!a.is_flush());
    }

    #[test]
    fn adjusted_strengths_detect_runs() {
        assert!(analysis("9c Td Jh Qs Kc").is_straight());
        assert!(analysis("Tc Jd Qh Ks Ac").is_straight());
        // туз только старший
        let wheel = analysis("Ac 2d 3h 4s 5c");
        assert_eq!(wheel.adjusted_strengths, [0, 1, 2, 3, 12]);
        assert!(!wheel.is_straight());
    }

    #[test]
    fn wrong_size_is_rejected() {
        let cards = parse_cards("Ac 2d 3h 4s").expect("valid cards");
        assert_eq!(
            analyze(&cards, poker_strength),
            Err(EvalError::InvalidHandSize(4))
        );
    }
}
