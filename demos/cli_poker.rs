//! CLI poker hands example.

use core::cmp::Ordering;
use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pkhand::{Card, Hand, RoundResult, Suit, Table, TableOptions};

fn main() {
    env_logger::init();

    println!("Five-card poker example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default();

    let mut table = match Table::new(options, seed) {
        Ok(table) => table,
        Err(err) => {
            println!("Table error: {err}");
            return;
        }
    };

    println!("Deck shuffled, {} cards", table.deck().remaining());

    loop {
        let input =
            prompt_line("\nEnter for a new round, or five cards to rate (e.g. 'Ah Kh Qh Jh Th'): ");
        match input.as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "" => match table.play_round() {
                Ok(result) => print_round(&result, table.deck().remaining()),
                Err(err) => println!("Deal error: {err}"),
            },
            cards => match cards.parse::<Hand>() {
                Ok(hand) => println!("{} (score {})", format_hand(&hand), hand.score()),
                Err(err) => println!("Hand error: {err}"),
            },
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    read_command(&mut io::stdin().lock())
}

/// Reads one trimmed, lowercased line. End of input reads as quit.
fn read_command(reader: &mut impl BufRead) -> String {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_lowercase(),
    }
}

fn print_round(result: &RoundResult, remaining: usize) {
    println!();
    for (index, hand) in result.hands.iter().enumerate() {
        let marker = if result.winners.contains(&index) { "*" } else { " " };
        println!("{marker} Hand {}: {}", index + 1, format_hand(hand));
    }

    if let [first, second, ..] = result.hands.as_slice() {
        match first.compare(second) {
            Ordering::Greater => println!("Hand 1 beats Hand 2"),
            Ordering::Less => println!("Hand 2 beats Hand 1"),
            Ordering::Equal => println!("Hand 1 and Hand 2 are tied"),
        }
    }

    if result.is_tie() {
        println!("Tie between {} hands", result.winners.len());
    }
    println!("Deck: {remaining} cards remaining");
}

fn format_hand(hand: &Hand) -> String {
    let cards = hand
        .cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{:<16} {cards}", hand.category().label())
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::read_command;

    #[test]
    fn end_of_input_quits() {
        assert_eq!(read_command(&mut "".as_bytes()), "q");
    }

    #[test]
    fn lines_are_trimmed_and_lowercased() {
        let mut input = "  Ah Kh Qh Jh Th \n\nrest".as_bytes();
        assert_eq!(read_command(&mut input), "ah kh qh jh th");
        assert_eq!(read_command(&mut input), "");
        assert_eq!(read_command(&mut input), "rest");
        assert_eq!(read_command(&mut input), "q");
    }
}
