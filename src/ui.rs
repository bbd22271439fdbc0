#![cfg(feature = "std")]
//! Console rendering of the two player views: the fleet board (own ships
//! plus incoming fire) and the tracking board (own shots at the opponent).

use crate::common::AttackResult;
use crate::config::BOARD_SIZE;
use crate::geometry::Point;
use crate::player::{Attack, Player};

fn print_header() {
    std::print!("   ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c) as char;
        std::print!(" {}", ch);
    }
    std::println!();
}

/// Print `player`'s own waters: `S` for an intact ship cell, `X` where the
/// opponent has hit, `o` where the opponent has missed.
pub fn print_fleet_board(player: &Player, incoming: &[Attack]) {
    std::println!("\n{}'s fleet:", player.name());
    print_header();
    for y in 0..BOARD_SIZE {
        std::print!("{:2} ", y + 1);
        for x in 0..BOARD_SIZE {
            let p = Point::new(x, y);
            let shot = incoming.iter().find(|a| a.target == p);
            let ch = match (player.board().ship_at(p), shot) {
                (Some(_), Some(a)) if a.result == AttackResult::Hit => 'X',
                (Some(_), _) => 'S',
                (None, Some(_)) => 'o',
                (None, None) => '.',
            };
            std::print!(" {}", ch);
        }
        std::println!();
    }
}

/// Print the shots in `attacks` as seen from the attacking side: `X` hit,
/// `o` miss, `.` untried.
pub fn print_tracking_board(attacks: &[Attack]) {
    std::println!("\nTracking board:");
    print_header();
    for y in 0..BOARD_SIZE {
        std::print!("{:2} ", y + 1);
        for x in 0..BOARD_SIZE {
            let p = Point::new(x, y);
            let ch = match attacks.iter().find(|a| a.target == p) {
                Some(a) if a.result == AttackResult::Hit => 'X',
                Some(_) => 'o',
                None => '.',
            };
            std::print!(" {}", ch);
        }
        std::println!();
    }
}
