//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcore::{Card, Game, GameOptions, Hand, Outcome, Round, RoundState, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        let mut round = match game.start_round() {
            Ok(round) => round,
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        };

        print_table(&round);
        if round.player_has_natural() {
            println!("You got a blackjack!");
        }

        while round.state() == RoundState::PlayerTurn {
            println!("Do you want to hit or stand?");
            println!("1. Hit");
            println!("2. Stand");

            let result = match prompt_line("Enter your choice: ").as_str() {
                "1" | "h" | "hit" => round.hit().map(|card| {
                    println!("You draw {}", format_card(&card));
                }),
                "2" | "s" | "stand" => round.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown choice.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
                break;
            }

            print_table(&round);
            if round.player_is_bust() {
                println!("You busted!");
            } else if round.player_has_twenty_one() {
                println!("You got 21!");
            }
        }

        if round.state() == RoundState::DealerTurn {
            match round.dealer_play() {
                Ok(drawn) => {
                    if !drawn.is_empty() {
                        println!("Dealer draws {} card(s).", drawn.len());
                    }
                }
                Err(err) => {
                    println!("Dealer error: {err}. Round abandoned.");
                    continue;
                }
            }
        }

        match round.showdown() {
            Ok(result) => {
                print_table(&round);
                let verdict = match result.outcome {
                    Outcome::PlayerWins => "You win.",
                    Outcome::DealerWins => "Dealer wins.",
                    Outcome::Tie => "It's a tie.",
                };
                println!("{verdict}");
            }
            Err(err) => println!("Showdown error: {err}"),
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" | "" => {}
            _ => {
                println!("Goodbye.");
                return;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(round: &Round) {
    println!("\nDeck: {} cards remaining", round.cards_remaining());

    println!(
        "Dealer: {} (value {})",
        format_dealer(round),
        round.dealer_visible_value()
    );
    println!(
        "You:    {} (value {})",
        format_hand(round.player_hand()),
        round.player_value()
    );
    println!();
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(round: &Round) -> String {
    if round.is_hole_revealed() {
        return format_hand(round.dealer_hand());
    }

    let mut parts = Vec::new();
    if let Some(card) = round.dealer_up_card() {
        parts.push(format_card(card));
    }
    if round.dealer_hand().len() > 1 {
        parts.push("??".to_string());
    }
    parts.join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join("  ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
