use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::eval::strength::game_strength;
use crate::game::RandomSource;

/// Колода карт. Верх колоды — конец вектора.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода без джокеров в порядке:
    /// Clubs A..K, Diamonds A..K, Hearts A..K, Spades A..K.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Перемешать колоду через переданный RNG.
    pub fn shuffle(&mut self, rng: &mut impl RandomSource) {
        rng.shuffle(&mut self.cards);
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять n карт сверху (меньше, если колода закончилась).
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let keep = self.cards.len().saturating_sub(n);
        let mut taken = self.cards.split_off(keep);
        taken.reverse();
        taken
    }

    /// Упорядочить колоду по "игровой" силе (масть, затем номер).
    pub fn sort_by_strength(&mut self, reverse: bool) {
        self.cards.sort_by_key(game_strength);
        if reverse {
            self.cards.reverse();
        }
    }
}
