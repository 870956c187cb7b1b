//! CLI Go Fish and Old Maid example.
//!
//! Pass `--instant` to skip the pauses between moves. Set `RUST_LOG=debug`
//! to watch the engine's log output.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use pairgames::{
    Actor, Card, Color, Game, GameEvent, GameOptions, GameResult, Hand, Prompt, Timing, Variant,
    Winner, rank_label,
};

fn main() {
    env_logger::init();

    println!("Pair games CLI example (type 'q' to quit)");

    let Some(variant) = prompt_variant() else {
        return;
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut options = GameOptions::default();
    if std::env::args().any(|arg| arg == "--instant") {
        options = options.with_timing(Timing::instant());
    }
    let game = Game::new(variant, options, seed);

    loop {
        settle(&game);

        if let Some(result) = game.result() {
            print_table(&game);
            print_result(&result);
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    game.new_game();
                    continue;
                }
                _ => break,
            }
        }

        let Some(prompt) = game.pending_prompt() else {
            println!("Nothing to do.");
            break;
        };

        print_table(&game);

        let result = match prompt {
            Prompt::ChooseRank => {
                let Some(rank) = prompt_rank(&game.hand(Actor::Player)) else {
                    return;
                };
                game.request_ask(rank)
            }
            Prompt::GoFish { rank } => {
                println!("The computer has no {}s. Go fish!", rank_label(rank));
                if is_quit(&prompt_line("Press enter to draw: ")) {
                    return;
                }
                game.request_draw()
            }
            Prompt::RespondToAsk { rank } => {
                let answer = prompt_line(&format!(
                    "Computer asks: do you have any {}s? (y/n): ",
                    rank_label(rank)
                ));
                match answer.as_str() {
                    "y" | "yes" => game.request_respond(true),
                    "n" | "no" => game.request_respond(false),
                    "q" | "quit" => return,
                    _ => {
                        println!("Please answer y or n.");
                        continue;
                    }
                }
            }
            Prompt::PickOpponentCard { count } => {
                let Some(index) = prompt_usize(&format!("Pick a card (1-{count}): ")) else {
                    return;
                };
                game.request_pick(index.wrapping_sub(1))
            }
        };

        if let Err(err) = result {
            println!("Request error: {err}");
        }
    }
}

/// Lets every scheduled step play out, pausing for each delay.
fn settle(game: &Game) {
    print_events(&game.drain_events());
    while let Some(wait) = game.next_due_in() {
        thread::sleep(Duration::from_millis(wait));
        game.advance(wait);
        print_events(&game.drain_events());
    }
}

fn print_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::CardDrawn {
                actor: Actor::Player,
                card,
            } => println!("You draw {}.", format_card(card)),
            GameEvent::CardDrawn {
                actor: Actor::Computer,
                ..
            } => println!("Computer draws a card."),
            GameEvent::CardsTransferred { from, cards, .. } => {
                let giver = match from {
                    Actor::Player => "You give",
                    Actor::Computer => "Computer gives",
                };
                println!("{giver} {}.", format_cards(cards));
            }
            GameEvent::PairsCollected { actor, pairs } => {
                let who = match actor {
                    Actor::Player => "You lay",
                    Actor::Computer => "Computer lays",
                };
                let ranks = pairs
                    .iter()
                    .map(|pair| rank_label(pair.rank))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("{who} down {} pair(s): {ranks}", pairs.len());
            }
            GameEvent::ComputerAsked { rank } => {
                println!("Computer asks for {}s.", rank_label(*rank));
            }
            GameEvent::StateChanged(_)
            | GameEvent::Prompt(_)
            | GameEvent::GameOver(_)
            | GameEvent::CardDealt { .. } => {}
        }
    }
}

fn print_table(game: &Game) {
    let snapshot = game.snapshot();
    println!("\n{}", snapshot.variant.name());
    if snapshot.variant == Variant::GoFish {
        println!("Deck: {} cards remaining", snapshot.deck_remaining);
    }
    println!(
        "Computer: {} card(s) | {} pair(s)",
        snapshot.computer_hand.len(),
        snapshot.computer_pairs.len()
    );
    println!(
        "You:      {} | {} pair(s)",
        format_hand(&game.hand(Actor::Player)),
        snapshot.player_pairs.len()
    );
    println!();
}

fn print_result(result: &GameResult) {
    let headline = match result.winner {
        Winner::Player => colorize("You win!", "32"),
        Winner::Computer => colorize("The computer wins.", "31"),
        Winner::Tie => colorize("It's a tie.", "33"),
    };
    println!("{headline}");
    println!(
        "Pairs: you {}, computer {}",
        result.player_pairs, result.computer_pairs
    );
    match result.old_maid_holder {
        Some(Actor::Player) => println!("You are left holding the Old Maid."),
        Some(Actor::Computer) => println!("The computer is left holding the Old Maid."),
        None => {}
    }
}

fn prompt_variant() -> Option<Variant> {
    loop {
        match prompt_line("Play [g]o fish or [o]ld maid? ").as_str() {
            "g" | "go fish" => return Some(Variant::GoFish),
            "o" | "old maid" => return Some(Variant::OldMaid),
            "q" | "quit" => return None,
            _ => println!("Unknown game."),
        }
    }
}

fn prompt_rank(hand: &Hand) -> Option<u8> {
    let held = hand
        .ranks()
        .into_iter()
        .map(rank_label)
        .collect::<Vec<_>>()
        .join(" ");
    loop {
        let input = prompt_line(&format!("Ask for a rank ({held}): "));
        if is_quit(&input) {
            return None;
        }
        match parse_rank(&input) {
            Some(rank) => return Some(rank),
            None => println!("Unknown rank."),
        }
    }
}

fn parse_rank(input: &str) -> Option<u8> {
    match input {
        "a" => Some(1),
        "j" => Some(11),
        "q" => Some(12),
        "k" => Some(13),
        _ => input
            .parse::<u8>()
            .ok()
            .filter(|rank| (2..=10).contains(rank)),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if is_quit(&input) {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn is_quit(input: &str) -> bool {
    input == "q" || input == "quit"
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    format_cards(hand.cards())
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    if card.is_old_maid() {
        return colorize(&card.to_string(), "35");
    }
    let code = match card.color() {
        Color::Red => "31",
        Color::Black => "34",
    };
    colorize(&card.to_string(), code)
}
