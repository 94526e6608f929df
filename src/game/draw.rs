use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::{Hand, HAND_SIZE};
use crate::domain::table::TableConfig;
use crate::eval::Evaluation;
use crate::game::errors::GameError;
use crate::game::RandomSource;

/// Итог одного игрока на вскрытии.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerResult {
    pub name: String,
    /// Карты в порядке показа (после `Hand::sort`).
    pub cards: Vec<Card>,
    pub evaluation: Evaluation,
}

/// Исход раунда.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(String),
    /// Несколько игроков с одинаковым лучшим счётом.
    Draw(Vec<String>),
}

/// Результат вскрытия: игроки от сильнейшего к слабейшему и исход.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Showdown {
    pub results: Vec<PlayerResult>,
    pub outcome: Outcome,
}

/// Стол пятикарточного дро-покера: колода, руки игроков, отметки обмена.
#[derive(Clone, Debug)]
pub struct DrawGame {
    pub config: TableConfig,
    pub deck: Deck,
    pub players: Vec<Hand>,
    exchanged: Vec<bool>,
    dealt: bool,
}

impl DrawGame {
    /// Создать стол: проверить конфиг, перемешать колоду, посадить игроков "1".."N".
    pub fn new(config: TableConfig, rng: &mut impl RandomSource) -> Result<Self, GameError> {
        config.validate()?;

        let mut deck = Deck::standard_52();
        deck.shuffle(rng);

        let players: Vec<Hand> = (1..=config.players)
            .map(|i| Hand::new(i.to_string()))
            .collect();

        log::info!(
            "draw table: {} players, up to {} discards",
            config.players,
            config.max_discards
        );

        Ok(Self {
            exchanged: vec![false; players.len()],
            config,
            deck,
            players,
            dealt: false,
        })
    }

    pub fn is_dealt(&self) -> bool {
        self.dealt
    }

    /// Раздать по одной карте каждому игроку, пять кругов.
    pub fn deal(&mut self) -> Result<(), GameError> {
        if self.dealt {
            return Err(GameError::AlreadyDealt);
        }
        for _ in 0..HAND_SIZE {
            for hand in self.players.iter_mut() {
                let card = self.deck.draw_one().ok_or(GameError::DeckExhausted)?;
                hand.push(card);
            }
        }
        self.dealt = true;
        log::info!("dealt {} hands, {} cards left", self.players.len(), self.deck.len());
        Ok(())
    }

    pub fn player(&self, index: usize) -> Result<&Hand, GameError> {
        self.players
            .get(index)
            .ok_or(GameError::PlayerNotFound(index))
    }

    /// Сбросить карты игрока по позициям (с 1) и добрать до пяти.
    ///
    /// Повторы позиций игнорируются. Возвращает сброшенные карты
    /// в порядке их позиций. Каждый игрок меняет карты не больше одного раза.
    pub fn exchange(&mut self, player: usize, positions: &[usize]) -> Result<Vec<Card>, GameError> {
        if !self.dealt {
            return Err(GameError::NotDealt);
        }
        let allowed = self.config.max_discards;
        let hand = self
            .players
            .get_mut(player)
            .ok_or(GameError::PlayerNotFound(player))?;
        if self.exchanged[player] {
            return Err(GameError::AlreadyExchanged(player));
        }

        let mut positions = positions.to_vec();
        positions.sort_unstable();
        positions.dedup();

        if positions.len() > allowed {
            return Err(GameError::TooManyDiscards {
                requested: positions.len(),
                allowed,
            });
        }
        if let Some(&bad) = positions.iter().find(|&&p| p == 0 || p > hand.len()) {
            return Err(GameError::InvalidCardPosition(bad));
        }

        // Проверить добор до изменения руки: ошибка не должна ничего менять.
        let needed = HAND_SIZE.saturating_sub(hand.len() - positions.len());
        if self.deck.len() < needed {
            return Err(GameError::DeckExhausted);
        }

        // С конца, чтобы индексы не съезжали.
        let mut discarded: Vec<Card> = positions
            .iter()
            .rev()
            .map(|&p| hand.cards.remove(p - 1))
            .collect();
        discarded.reverse();

        while hand.len() < HAND_SIZE {
            let card = self.deck.draw_one().ok_or(GameError::DeckExhausted)?;
            hand.push(card);
        }
        self.exchanged[player] = true;

        log::info!(
            "player {} exchanged {} card(s), {} left in deck",
            hand.name,
            discarded.len(),
            self.deck.len()
        );
        Ok(discarded)
    }

    /// Вскрытие: отсортировать руки для показа, оценить, упорядочить.
    pub fn showdown(&mut self) -> Result<Showdown, GameError> {
        if !self.dealt {
            return Err(GameError::NotDealt);
        }

        let mut results = Vec::with_capacity(self.players.len());
        for hand in self.players.iter_mut() {
            hand.sort();
            let evaluation = hand.evaluate()?;
            results.push(PlayerResult {
                name: hand.name.clone(),
                cards: hand.cards.clone(),
                evaluation,
            });
        }
        results.sort_by(|a, b| b.evaluation.cmp(&a.evaluation));

        let outcome = match results.first() {
            Some(top) => {
                let best: Vec<String> = results
                    .iter()
                    .take_while(|r| r.evaluation == top.evaluation)
                    .map(|r| r.name.clone())
                    .collect();
                if best.len() == 1 {
                    Outcome::Winner(top.name.clone())
                } else {
                    Outcome::Draw(best)
                }
            }
            None => Outcome::Draw(Vec::new()),
        };

        match &outcome {
            Outcome::Winner(name) => log::info!("showdown: player {name} wins"),
            Outcome::Draw(names) => log::info!("showdown: draw between {names:?}"),
        }

        Ok(Showdown { results, outcome })
    }
}
