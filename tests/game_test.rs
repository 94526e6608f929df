//! Тесты стола дро-покера: раздача, обмен, вскрытие.

use std::collections::HashSet;

use draw_poker::api::ApiError;
use draw_poker::domain::card::{parse_cards, Card};
use draw_poker::domain::table::{ConfigError, TableConfig};
use draw_poker::eval::{EvalError, HandCategory};
use draw_poker::game::{DrawGame, GameError, Outcome};
use draw_poker::infra::{map_showdown_to_dto, DeterministicRng};

fn new_game(players: usize, max_discards: usize, seed: u64) -> DrawGame {
    let mut rng = DeterministicRng::from_seed(seed);
    DrawGame::new(TableConfig::new(players, max_discards), &mut rng).expect("valid config")
}

fn dealt_game(players: usize, max_discards: usize, seed: u64) -> DrawGame {
    let mut game = new_game(players, max_discards, seed);
    game.deal().expect("deal");
    game
}

fn set_hand(game: &mut DrawGame, index: usize, s: &str) {
    game.players[index].cards = parse_cards(s).expect("valid card list");
}

#[test]
fn invalid_config_is_rejected() {
    let mut rng = DeterministicRng::from_seed(1);
    let err = DrawGame::new(TableConfig::new(1, 3), &mut rng).unwrap_err();
    assert_eq!(err, GameError::InvalidConfig(ConfigError::PlayerCount(1)));
    assert!(matches!(ApiError::from(err), ApiError::GameError(_)));
}

#[test]
fn player_lookup_by_index() {
    let game = dealt_game(3, 3, 8);
    let hand = game.player(2).expect("third player");
    assert_eq!(hand.name, "3");
    assert_eq!(hand, &game.players[2]);
    assert_eq!(game.player(3).unwrap_err(), GameError::PlayerNotFound(3));
}

#[test]
fn deal_gives_five_unique_cards_to_everyone() {
    let game = dealt_game(5, 3, 42);
    assert!(game.is_dealt());
    assert_eq!(game.deck.len(), 52 - 25);

    let mut seen: HashSet<Card> = game.deck.cards.iter().copied().collect();
    for (i, hand) in game.players.iter().enumerate() {
        assert_eq!(hand.len(), 5);
        assert_eq!(hand.name, (i + 1).to_string());
        for card in &hand.cards {
            assert!(seen.insert(*card), "card {card} dealt twice");
        }
    }
    assert_eq!(seen.len(), 52);
}

#[test]
fn deal_is_round_robin_from_the_top() {
    let mut game = new_game(2, 0, 7);
    let top: Vec<Card> = game.deck.cards.iter().rev().take(10).copied().collect();
    game.deal().expect("deal");

    let first: Vec<Card> = top.iter().step_by(2).copied().collect();
    let second: Vec<Card> = top.iter().skip(1).step_by(2).copied().collect();
    assert_eq!(game.players[0].cards, first);
    assert_eq!(game.players[1].cards, second);
}

#[test]
fn same_seed_same_deal() {
    let a = dealt_game(4, 3, 2024);
    let b = dealt_game(4, 3, 2024);
    assert_eq!(a.players, b.players);
}

#[test]
fn deal_twice_fails() {
    let mut game = dealt_game(3, 3, 1);
    assert_eq!(game.deal(), Err(GameError::AlreadyDealt));
}

#[test]
fn exchange_replaces_chosen_positions() {
    let mut game = dealt_game(3, 3, 99);
    let before = game.players[1].cards.clone();
    let deck_top = *game.deck.cards.last().expect("cards left");

    let discarded = game.exchange(1, &[3, 1, 3]).expect("exchange");
    assert_eq!(discarded, vec![before[0], before[2]]);

    let after = &game.players[1].cards;
    assert_eq!(after.len(), 5);
    assert_eq!(&after[..3], &[before[1], before[3], before[4]]);
    assert_eq!(after[3], deck_top);
    assert_eq!(game.deck.len(), 52 - 15 - 2);
}

#[test]
fn exchange_errors() {
    let mut game = new_game(3, 2, 5);
    assert_eq!(game.exchange(0, &[1]), Err(GameError::NotDealt));

    game.deal().expect("deal");
    assert_eq!(game.exchange(9, &[1]), Err(GameError::PlayerNotFound(9)));
    assert_eq!(
        game.exchange(0, &[1, 2, 3]),
        Err(GameError::TooManyDiscards { requested: 3, allowed: 2 })
    );
    assert_eq!(game.exchange(0, &[0]), Err(GameError::InvalidCardPosition(0)));
    assert_eq!(game.exchange(0, &[6]), Err(GameError::InvalidCardPosition(6)));

    // пустой обмен — тоже обмен
    assert_eq!(game.exchange(0, &[]), Ok(Vec::new()));
    assert_eq!(game.exchange(0, &[1]), Err(GameError::AlreadyExchanged(0)));
}

#[test]
fn exchange_without_enough_cards_leaves_everything_untouched() {
    // 10 * 5 = 50 карт роздано, в колоде 2.
    let mut game = dealt_game(10, 0, 21);
    game.config.max_discards = 5;
    let hand_before = game.players[0].cards.clone();
    let deck_before = game.deck.cards.clone();

    assert_eq!(game.exchange(0, &[1, 2, 3, 4, 5]), Err(GameError::DeckExhausted));
    assert_eq!(game.players[0].cards, hand_before);
    assert_eq!(game.deck.cards, deck_before);

    // обмен не засчитан — можно попробовать поменьше
    let discarded = game.exchange(0, &[1, 2]).expect("two cards are left");
    assert_eq!(discarded, hand_before[..2].to_vec());
    assert_eq!(game.players[0].len(), 5);
    assert!(game.deck.is_empty());
}

#[test]
fn showdown_before_deal_fails() {
    let mut game = new_game(2, 0, 3);
    assert_eq!(game.showdown().unwrap_err(), GameError::NotDealt);
}

#[test]
fn showdown_picks_single_winner_and_sorts_hands() {
    let mut game = dealt_game(3, 0, 11);
    set_hand(&mut game, 0, "As Ah Kc Qs Jd");
    set_hand(&mut game, 1, "Qs 5d Ks 5c 5s");
    set_hand(&mut game, 2, "2c 7d 9h Js Kc");

    let showdown = game.showdown().expect("showdown");
    assert_eq!(showdown.outcome, Outcome::Winner("2".into()));

    let names: Vec<&str> = showdown.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["2", "1", "3"]);
    assert_eq!(showdown.results[0].evaluation.category, HandCategory::ThreeOfAKind);

    // руки отсортированы для показа
    assert_eq!(game.players[1].to_string(), "5d 5c 5s Ks Qs");
    assert_eq!(showdown.results[0].cards, game.players[1].cards);
}

#[test]
fn showdown_reports_draw_on_equal_scores() {
    let mut game = dealt_game(3, 0, 12);
    set_hand(&mut game, 0, "5s 5h Ac Ks Qs");
    set_hand(&mut game, 1, "2c 7d 9h Js Kc");
    set_hand(&mut game, 2, "5d 5c Ah Kd Qc");

    let showdown = game.showdown().expect("showdown");
    assert_eq!(showdown.outcome, Outcome::Draw(vec!["1".into(), "3".into()]));

    let dto = map_showdown_to_dto(&showdown);
    assert_eq!(dto.winner, None);
    assert_eq!(dto.draw, vec!["1".to_string(), "3".to_string()]);
    assert_eq!(dto.players[0].evaluation.label, "One pair");
    assert_eq!(dto.players[2].evaluation.label, "No pair");
}

#[test]
fn showdown_with_broken_hand_surfaces_eval_error() {
    let mut game = dealt_game(2, 0, 13);
    game.players[0].cards.pop();

    let err = game.showdown().unwrap_err();
    assert_eq!(err, GameError::Eval(EvalError::InvalidHandSize(4)));
    assert_eq!(
        ApiError::from(err),
        ApiError::EvalError(EvalError::InvalidHandSize(4).to_string())
    );
}

#[test]
fn full_round_with_exchange_is_consistent() {
    let mut game = dealt_game(5, 3, 777);
    for player in 0..5 {
        let positions: Vec<usize> = (1..=player.min(3)).collect();
        game.exchange(player, &positions).expect("exchange");
    }
    assert_eq!(game.deck.len(), 52 - 25 - (0 + 1 + 2 + 3 + 3));

    let showdown = game.showdown().expect("showdown");
    assert_eq!(showdown.results.len(), 5);
    for pair in showdown.results.windows(2) {
        assert!(pair[0].evaluation >= pair[1].evaluation);
    }
    if let Outcome::Winner(name) = &showdown.outcome {
        assert_eq!(name, &showdown.results[0].name);
    }
}
