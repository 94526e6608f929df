//! Функции силы карты.
//!
//! Карта сама по себе силы не знает: сила — это стратегия, которую
//! выбирает контекст. Покерный оценщик использует `poker_strength`,
//! общая сортировка колоды — `game_strength`.

use crate::domain::card::{Card, Rank};

/// Сила карты в конкретном контексте.
pub type StrengthFn = fn(&Card) -> u32;

/// Покерная сила туза.
pub const ACE_HIGH: u32 = 14;

/// Покерная сила: масть не учитывается, туз = 14, остальные = номер.
pub fn poker_strength(card: &Card) -> u32 {
    match card.rank {
        Rank::Ace => ACE_HIGH,
        rank => rank.number(),
    }
}

/// Обычная "игровая" сила: сначала масть, потом номер (туз = 1).
/// Например, `Ks` = 413, `Ac` = 101.
pub fn game_strength(card: &Card) -> u32 {
    card.suit.weight() * 100 + card.rank.number()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Suit;

    #[test]
    fn poker_strength_ignores_suit_and_lifts_ace() {
        for suit in Suit::ALL {
            assert_eq!(poker_strength(&Card::new(Rank::Ace, suit)), 14);
            assert_eq!(poker_strength(&Card::new(Rank::Two, suit)), 2);
            assert_eq!(poker_strength(&Card::new(Rank::King, suit)), 13);
        }
    }

    #[test]
    fn game_strength_weights_suit_first() {
        assert_eq!(game_strength(&Card::new(Rank::Ace, Suit::Clubs)), 101);
        assert_eq!(game_strength(&Card::new(Rank::King, Suit::Spades)), 413);
        assert!(
            game_strength(&Card::new(Rank::Ace, Suit::Diamonds))
                > game_strength(&Card::new(Rank::King, Suit::Clubs))
        );
    }
}
