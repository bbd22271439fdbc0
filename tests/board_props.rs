use broadside::{attack_player, AiState, Attack, AttackResult, Board, Direction, Player, Point};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_fleet(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_fleet(&mut rng).unwrap();
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_never_self_overlaps(seed in any::<u64>()) {
        let board = random_fleet(seed);
        let ships: Vec<_> = board.ships().copied().collect();
        prop_assert_eq!(ships.len(), 5);
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                prop_assert!(!a.overlaps(b));
            }
        }
    }

    #[test]
    fn attack_is_idempotent(seed in any::<u64>(), x in 0..10u8, y in 0..10u8) {
        let mut offense = Player::new("Offense");
        let mut defense = Player::new("Defense");
        *defense.board_mut() = random_fleet(seed);
        let point = Point::new(x, y);

        let first = attack_player(&mut offense, &mut defense, point).unwrap();
        let hits_after = defense.board().ship_at(point).map(|s| s.hits());
        let second = attack_player(&mut offense, &mut defense, point).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(defense.board().ship_at(point).map(|s| s.hits()), hits_after);
        prop_assert_eq!(offense.attacks().len(), 1);
    }

    #[test]
    fn step_and_between_are_inverse(x in 0..10u8, y in 0..10u8) {
        let p = Point::new(x, y);
        for dir in Direction::CARDINALS {
            if let Some(q) = p.step(dir) {
                prop_assert_eq!(Direction::between(p, q), Some(dir));
                prop_assert_eq!(q.step(dir.opposite()), Some(p));
            }
        }
    }

    #[test]
    fn hunt_never_repeats_a_target(seed in any::<u64>(), shots in 0..99usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut log = Vec::new();
        while log.len() < shots {
            let p = Point::new(rng.random_range(0..10), rng.random_range(0..10));
            if log.iter().all(|a: &Attack| a.target != p) {
                log.push(Attack { target: p, result: AttackResult::Miss });
            }
        }
        let mut ai = AiState::new();
        let picked = ai.select_target(&mut rng, &log).unwrap();
        prop_assert!(log.iter().all(|a| a.target != picked));
    }
}
