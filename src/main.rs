#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{init_logging, AttackResult, Game, GameError, GameStatus, Point, BOARD_SIZE};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = "Admiral", help = "Your display name")]
        name: String,
    },
    /// Watch the computer clear a randomly placed fleet on its own.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

/// Parse a target like `D5`: letter column (A-J), number row (1-10).
#[cfg(feature = "std")]
fn parse_target(input: &str) -> Option<Point> {
    let input = input.trim();
    let mut chars = input.chars();
    let col = chars.next()?.to_ascii_uppercase();
    if !col.is_ascii_uppercase() {
        return None;
    }
    let x = (col as u8).checked_sub(b'A')?;
    let row: u8 = chars.as_str().trim().parse().ok()?;
    let y = row.checked_sub(1)?;
    (x < BOARD_SIZE && y < BOARD_SIZE).then_some(Point::new(x, y))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, name } => play(seed, &name),
        Commands::Auto { seed } => auto(seed),
    }
}

#[cfg(feature = "std")]
fn play(seed: Option<u64>, name: &str) -> anyhow::Result<()> {
    use std::io::{self, BufRead, Write};

    let mut rng = make_rng(seed);
    let mut game = Game::new(name, &mut rng);
    game.place_fleets(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
    println!("You face {}. Fire at will.", game.computer().name());

    let stdin = io::stdin();
    loop {
        broadside::ui::print_fleet_board(game.human(), game.computer().attacks());
        broadside::ui::print_tracking_board(game.human().attacks());

        print!("\nYour shot (e.g. D5, or 'quit'): ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") {
            println!("Striking colours. Goodbye.");
            break;
        }
        let Some(target) = parse_target(line) else {
            println!("Cannot read '{}' as a target; try something like D5.", line);
            continue;
        };

        match game.human_attack(target) {
            Ok(report) => {
                match report.result {
                    AttackResult::Hit => println!("Hit!"),
                    AttackResult::Miss => println!("Splash. Miss."),
                }
                if let Some(ship) = report.sunk {
                    println!("You sank the {}!", ship);
                }
            }
            Err(GameError::TargetOffGrid(p)) => {
                println!("{} is off the grid.", p);
                continue;
            }
            Err(e) => return Err(anyhow::anyhow!(e)),
        }
        if game.status() == GameStatus::HumanWon {
            println!("\nVictory! The enemy fleet is at the bottom of the sea.");
            break;
        }

        if !game.ai_attack(&mut rng).map_err(|e| anyhow::anyhow!(e))? {
            println!("{} is out of moves.", game.computer().name());
            break;
        }
        if let Some(reply) = game.computer().attacks().last() {
            println!(
                "{} fires at {}: {}",
                game.computer().name(),
                reply.target,
                match reply.result {
                    AttackResult::Hit => "hit!",
                    AttackResult::Miss => "miss.",
                }
            );
        }
        if game.status() == GameStatus::ComputerWon {
            println!("\nDefeat. Your fleet has been destroyed.");
            break;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn auto(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut game = Game::new("Spectator", &mut rng);
    game.place_fleets(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
    println!("{} hunts the spectator's fleet.", game.computer().name());

    let mut turns = 0usize;
    while game.ai_attack(&mut rng).map_err(|e| anyhow::anyhow!(e))? {
        turns += 1;
    }

    broadside::ui::print_fleet_board(game.human(), game.computer().attacks());
    println!(
        "\n{} cleared the board in {} shots ({:?}).",
        game.computer().name(),
        turns,
        game.status()
    );
    Ok(())
}
