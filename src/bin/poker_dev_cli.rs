// src/bin/poker_dev_cli.rs

use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

use draw_poker::api::{evaluate_hand_str, sorted_hand_str, ApiError};
use draw_poker::domain::card::Card;
use draw_poker::domain::table::TableConfig;
use draw_poker::game::{DrawGame, Outcome, RandomSource, Showdown};
use draw_poker::infra::{map_showdown_to_dto, DeterministicRng, SystemRng};

#[derive(Parser)]
#[command(author, version, about = "Пятикарточный дро-покер в терминале", long_about = None)]
struct Args {
    /// Количество игроков (2–10).
    #[arg(short, long, default_value_t = 5)]
    players: usize,

    /// Сколько карт можно сбросить при обмене.
    #[arg(short = 'x', long, default_value_t = 3)]
    max_discards: usize,

    /// Seed для воспроизводимой раздачи.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Спросить каждого игрока, какие карты он меняет.
    #[arg(short, long)]
    draw: bool,

    /// Вывести итог вскрытия в JSON.
    #[arg(long)]
    json: bool,

    /// Оценить одну руку вместо игры, например "As Ks Qs Js Ts".
    #[arg(long)]
    hand: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let result = match &args.hand {
        Some(hand) => evaluate_single(hand),
        None => match args.seed {
            Some(seed) => play(&args, &mut DeterministicRng::from_seed(seed)),
            None => play(&args, &mut SystemRng),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn evaluate_single(input: &str) -> Result<(), ApiError> {
    let dto = evaluate_hand_str(input)?;
    println!("{}  {}  (score {})", sorted_hand_str(input)?, dto.label, dto.score);
    Ok(())
}

fn play(args: &Args, rng: &mut impl RandomSource) -> Result<(), ApiError> {
    let config = TableConfig::new(args.players, args.max_discards);
    let mut game = DrawGame::new(config, rng)?;
    game.deal()?;

    print_hands(&game);

    if args.draw && args.max_discards > 0 {
        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();
        for index in 0..game.players.len() {
            loop {
                let hand = game.player(index)?;
                print!(
                    "Which cards would you change, player {} [{}] (e.g. 1,3; empty = none)? ",
                    hand.name,
                    pretty_cards(&hand.cards)
                );
                std::io::stdout()
                    .flush()
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                // EOF — пустой ответ, пустой обмен всегда проходит.
                let line = match lines.next() {
                    Some(line) => line.map_err(|e| ApiError::BadRequest(e.to_string()))?,
                    None => String::new(),
                };
                let positions = match parse_positions(&line) {
                    Ok(positions) => positions,
                    Err(err) => {
                        eprintln!("{err}");
                        continue;
                    }
                };
                match game.exchange(index, &positions) {
                    Ok(_) => break,
                    Err(err) => eprintln!("{err}"),
                }
            }
        }
        println!();
        print_hands(&game);
    }

    let showdown = game.showdown()?;
    if args.json {
        let dto = map_showdown_to_dto(&showdown);
        let json = serde_json::to_string_pretty(&dto)
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        println!("{json}");
    } else {
        print_showdown(&showdown);
    }
    Ok(())
}

/// "1, 3" -> [1, 3]; пустая строка — без обмена.
fn parse_positions(line: &str) -> Result<Vec<usize>, ApiError> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| ApiError::BadRequest(format!("not a card position: {s}")))
        })
        .collect()
}

fn pretty_cards(cards: &[Card]) -> String {
    cards.iter().map(Card::pretty).collect::<Vec<_>>().join(" ")
}

fn print_hands(game: &DrawGame) {
    for hand in &game.players {
        println!("player {:<3} {}", hand.name, pretty_cards(&hand.cards));
    }
}

fn print_showdown(showdown: &Showdown) {
    println!("================ SHOWDOWN =================");
    for result in &showdown.results {
        println!(
            "player {:<3} {}  {:<22} {}",
            result.name,
            pretty_cards(&result.cards),
            result.evaluation.label,
            result.evaluation.score()
        );
    }
    match &showdown.outcome {
        Outcome::Winner(name) => println!("Player {name} wins!"),
        Outcome::Draw(_) => println!("Draw"),
    }
}
