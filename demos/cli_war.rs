//! CLI war example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use warrs::{Card, Match, MatchOptions, MatchSnapshot, Phase, PlayError, RoundOutcome, Suit};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("War CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let Ok(game) = Match::new(MatchOptions::default(), seed) else {
        println!("Could not deal a match.");
        return;
    };

    // Echo new log entries as the match publishes them.
    let mut printed = 0;
    game.subscribe(move |snapshot: &MatchSnapshot| {
        if snapshot.log.len() < printed {
            printed = 0;
        }
        for entry in &snapshot.log[printed..] {
            println!("{}", colorize(entry, "90"));
        }
        printed = snapshot.log.len();
    });

    loop {
        let snapshot = game.snapshot();

        if snapshot.phase == Phase::GameOver {
            print_table(&snapshot);
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    game.restart();
                    continue;
                }
                _ => {
                    println!("Goodbye.");
                    break;
                }
            }
        }

        print_table(&snapshot);

        let Some(choice) = prompt_usize(&format!(
            "Pick a card (1-{}): ",
            snapshot.player_hand.len()
        )) else {
            break;
        };

        match game.play_card(choice.wrapping_sub(1)) {
            Ok(round) => {
                println!(
                    "You reveal {} against {}: {}",
                    format_card(&round.player_card),
                    format_card(&round.bot_card),
                    describe(round.outcome)
                );
            }
            Err(PlayError::CardNotFound) => {
                println!("No such card.");
                continue;
            }
            Err(err) => {
                println!("Play error: {err}");
                continue;
            }
        }

        wait_for_settle(&game);
    }
}

fn wait_for_settle(game: &Match) {
    let mut last = Instant::now();
    while game.phase() == Phase::Resolving {
        let Some(remaining) = game.snapshot().settle_remaining else {
            break;
        };
        thread::sleep(remaining);

        let now = Instant::now();
        game.tick(now - last);
        last = now;
    }
}

fn describe(outcome: RoundOutcome) -> String {
    match outcome {
        RoundOutcome::PlayerWins => colorize("you win the round", "32"),
        RoundOutcome::BotWins => colorize("the bot wins the round", "31"),
        RoundOutcome::Draw => colorize("tie", "33"),
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
        if input.is_empty() || input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(snapshot: &MatchSnapshot) {
    println!(
        "\nScore: you {} - bot {} (ties {}) | draw pile: {} cards",
        snapshot.player_score, snapshot.bot_score, snapshot.draws, snapshot.draw_pile_len
    );
    println!("Bot:  {}", "?? ".repeat(snapshot.bot_hand_len).trim_end());

    let hand = snapshot
        .player_hand
        .iter()
        .enumerate()
        .map(|(i, card)| format!("{}:{}", i + 1, format_card(card)))
        .collect::<Vec<_>>()
        .join(" ");
    println!("You:  {}", if hand.is_empty() { "(empty)" } else { hand.as_str() });

    if let Some(outcome) = snapshot.outcome {
        println!("{}", colorize(&outcome.to_string(), "1"));
    }
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
