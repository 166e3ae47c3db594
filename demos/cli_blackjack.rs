//! CLI blackjack example: three rounds against the dealer.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use threeround::{
    Card, FinalOutcome, Game, GameOptions, GameSnapshot, Hand, Pacer, RoundOutcome,
    SessionProgress, SessionResult, StepEvent, Turn,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);
    let mut pacer = Pacer::from_options(&game.options);
    let epoch = Instant::now();

    print_welcome();
    if prompt_line("Press Enter to start (q to quit): ") == "q" {
        return;
    }

    loop {
        if let Ok(result) = game.session_result() {
            print_final(&result);
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    pacer.cancel();
                    game.reset();
                    continue;
                }
                _ => {
                    println!("Goodbye.");
                    return;
                }
            }
        }

        let snapshot = game.snapshot();
        if snapshot.pending.is_some() {
            print_waiting(&snapshot);
            let event = wait_for_step(&game, &mut pacer, epoch);
            if let Some(event) = event {
                print_event(&event);
            }
            continue;
        }

        print_table(&snapshot);
        let Some(role) = snapshot.turn.role() else {
            continue;
        };

        println!("{}", format_actions(&game, &snapshot));
        let action = prompt_line("Action: ");

        let result = match action.as_str() {
            "h" | "hit" => game.hit(role).map(|card| println!("Drew {card}.")),
            "s" | "stand" => game.stand(role),
            "a" | "auto" => {
                game.set_auto_play(!snapshot.auto_play);
                Ok(())
            }
            "r" | "redeal" => {
                pacer.cancel();
                game.start_round();
                Ok(())
            }
            "q" | "quit" => return,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        if let Err(err) = result {
            println!("Action error: {err}");
        }
    }
}

/// Polls the pacer until the pending step is applied or superseded.
fn wait_for_step<S: threeround::CardSource>(
    game: &Game<S>,
    pacer: &mut Pacer,
    epoch: Instant,
) -> Option<StepEvent> {
    loop {
        if let Some(event) = pacer.poll(game, epoch.elapsed()) {
            return Some(event);
        }
        if !pacer.is_waiting() {
            return None;
        }
        thread::sleep(core::time::Duration::from_millis(50));
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_welcome() {
    println!();
    println!("{}", colorize("WELCOME TO BLACKJACK!", "1"));
    println!(
        "{}  {}  {}  {}",
        colorize("\u{2660}", "37"),
        colorize("\u{2665}", "31"),
        colorize("\u{2663}", "37"),
        colorize("\u{2666}", "31"),
    );
    println!("Three rounds against the dealer. Most rounds won takes the game.");
    println!();
}

fn print_table(snapshot: &GameSnapshot) {
    println!(
        "\n== Round {} of {} == (player {} : dealer {}) autoplay {}",
        snapshot.round,
        snapshot.rounds,
        snapshot.player_wins,
        snapshot.dealer_wins,
        if snapshot.auto_play { "on" } else { "off" },
    );
    println!(
        "Player: {} (score {})",
        format_hand(&snapshot.player),
        snapshot.player_score
    );
    println!(
        "Dealer: {} (score {})",
        format_hand(&snapshot.dealer),
        snapshot.dealer_score
    );
    if let Some(card) = snapshot.last_card {
        println!("Last card: {}", format_card(card));
    }

    match snapshot.turn {
        Turn::PlayerTurn => println!("Player's turn"),
        Turn::DealerTurn => println!("Dealer's turn"),
        Turn::Resolved => {
            if let Some(outcome) = snapshot.outcome {
                println!("{}", outcome_message(snapshot, outcome));
            }
        }
    }
}

fn print_waiting(snapshot: &GameSnapshot) {
    print_table(snapshot);
    match snapshot.turn {
        Turn::PlayerTurn => println!("{}", colorize("Calculating player's result...", "3")),
        Turn::DealerTurn => println!("{}", colorize("Calculating dealer's result...", "3")),
        Turn::Resolved => println!("{}", colorize("Next round coming up...", "3")),
    }
}

fn print_event(event: &StepEvent) {
    match event {
        StepEvent::PlayerStopped { score } => println!("Player stops at {score}."),
        StepEvent::DealerDrew { card, score } => {
            println!("Dealer draws {} (score {score}).", format_card(*card));
        }
        StepEvent::DealerStood { score } => println!("Dealer stands at {score}."),
        StepEvent::RoundRecorded { result, progress } => {
            println!(
                "Round {} recorded: {:?} ({} vs {}).",
                result.round, result.outcome, result.player_score, result.dealer_score
            );
            if let SessionProgress::NextRound(index) = progress {
                println!("Dealing round {index}.");
            }
        }
    }
}

fn print_final(result: &SessionResult) {
    println!("\n{}", colorize("Game Over", "1"));
    for round in &result.rounds {
        println!(
            "  Round {}: {:?} ({} vs {})",
            round.round, round.outcome, round.player_score, round.dealer_score
        );
    }
    println!("Player Wins: {}", result.player_wins);
    println!("Dealer Wins: {}", result.dealer_wins);
    match result.outcome {
        FinalOutcome::PlayerOverall => {
            println!("{}", colorize("Player is the overall winner!", "32"));
        }
        FinalOutcome::DealerOverall => {
            println!("{}", colorize("Dealer is the overall winner!", "31"));
        }
        FinalOutcome::Tie => println!("It's a tie!"),
    }
}

fn outcome_message(snapshot: &GameSnapshot, outcome: RoundOutcome) -> String {
    let text = match outcome {
        RoundOutcome::DealerWin if snapshot.player.is_bust() => "Player busts! Dealer wins!",
        RoundOutcome::PlayerWin if snapshot.dealer.is_bust() => "Dealer busts! Player wins!",
        RoundOutcome::PlayerWin => "Player wins!",
        RoundOutcome::DealerWin => "Dealer wins!",
        RoundOutcome::Push => "It's a push (tie)!",
    };
    colorize(text, "1")
}

fn format_actions<S: threeround::CardSource>(game: &Game<S>, snapshot: &GameSnapshot) -> String {
    let Some(role) = snapshot.turn.role() else {
        return String::new();
    };
    let parts = [
        format_action("hit", "h", game.can_hit(role)),
        format_action("stand", "s", game.can_stand(role)),
        format_action("autoplay", "a", true),
        format_action("redeal", "r", true),
        format_action("quit", "q", true),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    if card.is_named() {
        colorize(card.label(), "31")
    } else {
        card.label().to_string()
    }
}
