//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Card, Game, GameOptions, Hand, Outcome, Participant, RoundEvent, RoundPhase, Suit};

fn main() {
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    match game.start_round() {
        Ok(events) => report_events(&game, &events),
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    }

    loop {
        print_table(&game);

        if game.phase() == RoundPhase::Resolved {
            let action = prompt_line("Round over. [r]edeal or [q]uit: ");
            match action.as_str() {
                "r" | "redeal" | "reset" => match game.reset_round() {
                    Ok(events) => report_events(&game, &events),
                    Err(err) => {
                        println!("Reset error: {err}");
                        return;
                    }
                },
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
            continue;
        }

        let action = prompt_line("Action ([h]it, [s]tand, [r]eset, [q]uit): ");
        let result = match action.as_str() {
            "h" | "hit" => game.hit(),
            "s" | "stand" => game.stand(),
            "r" | "reset" => game.reset_round(),
            "q" | "quit" => return,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match result {
            Ok(events) => report_events(&game, &events),
            Err(err) => println!("Action error: {err}"),
        }
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

fn report_events(game: &Game, events: &[RoundEvent]) {
    for event in events {
        match event {
            RoundEvent::CardDealt { seat, card } => {
                let name = game.participant(*seat).name();
                if card.is_revealed() {
                    println!("{name} draws {}", format_card(card));
                } else {
                    println!("{name} takes a card face down");
                }
            }
            RoundEvent::CardRevealed { seat, card } => {
                let name = game.participant(*seat).name();
                println!("{name} reveals {}", format_card(card));
            }
            RoundEvent::ScoreUpdated { seat, score } => {
                let name = game.participant(*seat).name();
                println!("  {name} score: {score}");
            }
            RoundEvent::RoundResolved {
                outcome,
                player_score,
                dealer_score,
            } => match outcome {
                Outcome::PlayerWins => println!(
                    "{} wins: {player_score} to {dealer_score}.",
                    game.player().name()
                ),
                Outcome::DealerWins => println!(
                    "{} wins: {dealer_score} to {player_score}.",
                    game.dealer().name()
                ),
                Outcome::Push => println!("Push at {player_score}."),
            },
        }
    }
}

fn print_table(game: &Game) {
    println!("\nShoe: {} cards remaining", game.cards_remaining());
    print_seat(game.dealer());
    print_seat(game.player());
    println!();
}

fn print_seat(participant: &Participant) {
    println!(
        "{}: {} (score {})",
        participant.name(),
        format_hand(participant.hand()),
        participant.score()
    );
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(no cards)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    if !card.is_revealed() {
        return "??".to_string();
    }

    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let (rank, is_face) = match card.rank {
        1 => ("A".to_string(), true),
        11 => ("J".to_string(), true),
        12 => ("Q".to_string(), true),
        13 => ("K".to_string(), true),
        _ => (card.rank.to_string(), false),
    };

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
