use broadside::{Board, GameError, Point, Ship, ShipClass, FLEET, NUM_SHIPS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_ship_new_validates_segment() {
    let class = ShipClass::new("Test", 4);
    assert!(Ship::new(class, Point::new(0, 0), Point::new(0, 3)).is_ok());
    assert_eq!(
        Ship::new(class, Point::new(1, 1), Point::new(3, 3)).unwrap_err(),
        GameError::ShipMisaligned
    );
    assert_eq!(
        Ship::new(class, Point::new(0, 0), Point::new(0, 4)).unwrap_err(),
        GameError::ShipSizeMismatch
    );
    assert_eq!(
        Ship::new(class, Point::new(8, 0), Point::new(11, 0)).unwrap_err(),
        GameError::ShipOutOfBounds
    );
}

#[test]
fn test_ship_at_on_empty_board() {
    let board = Board::new();
    assert!(board.ship_at(Point::new(0, 0)).is_none());
    assert!(!board.all_sunk());
}

#[test]
fn test_ship_at_on_partial_fleet() {
    let mut board = Board::new();
    let ship = Ship::new(ShipClass::new("Destroyer", 3), Point::new(4, 4), Point::new(6, 4))
        .unwrap();
    board.place(ship).unwrap();

    assert!(board.ship_at(Point::new(5, 4)).is_some());
    assert!(board.ship_at(Point::new(5, 5)).is_none());
    assert_eq!(board.ships().count(), 1);
}

#[test]
fn test_place_rejects_overlap() {
    let mut board = Board::new();
    let a = Ship::new(ShipClass::new("A", 4), Point::new(2, 2), Point::new(2, 5)).unwrap();
    let b = Ship::new(ShipClass::new("B", 3), Point::new(1, 3), Point::new(3, 3)).unwrap();
    board.place(a).unwrap();
    assert!(!board.can_place(b.start(), b.end()));
    assert_eq!(board.place(b).unwrap_err(), GameError::ShipOverlaps);
    // a clear segment still goes in
    let c = Ship::new(ShipClass::new("C", 2), Point::new(8, 8), Point::new(9, 8)).unwrap();
    board.place(c).unwrap();
    assert_eq!(board.ships().count(), 2);
}

#[test]
fn test_place_fleet_places_all_five() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    board.place_fleet(&mut rng).unwrap();

    assert_eq!(board.ships().count(), NUM_SHIPS);
    let total: usize = board.ships().map(|s| s.class().size() as usize).sum();
    assert_eq!(total, FLEET.iter().map(|c| c.size() as usize).sum::<usize>());
}

#[test]
fn test_place_fleet_no_pairwise_overlap() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(7);
    board.place_fleet(&mut rng).unwrap();

    let ships: Vec<_> = board.ships().copied().collect();
    for (i, a) in ships.iter().enumerate() {
        for b in &ships[i + 1..] {
            assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
        }
    }
}

#[test]
fn test_fleet_full() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(1);
    board.place_fleet(&mut rng).unwrap();
    let extra = Ship::new(ShipClass::new("Extra", 2), Point::new(0, 0), Point::new(1, 0));
    // the sixth ship either overlaps or finds no slot; both are rejections
    if let Ok(ship) = extra {
        assert!(board.place(ship).is_err());
    }
}
