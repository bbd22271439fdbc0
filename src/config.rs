use crate::ship::ShipClass;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// The fixed fleet, in placement order (largest first).
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Aircraft Carrier", 6),
    ShipClass::new("Battleship", 5),
    ShipClass::new("Submarine", 4),
    ShipClass::new("Destroyer", 3),
    ShipClass::new("Patrol Boat", 2),
];

/// Attack log capacity: one entry per grid cell.
pub const MAX_ATTACKS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Retry budget for random fleet placement before reporting failure.
pub const PLACEMENT_RETRIES: usize = 1000;

/// Names the computer admiral may sail under.
pub const AI_NAMES: [&str; 6] = [
    "Sinkin' About You",
    "Admiral Ackward",
    "The Iron Duckling",
    "Cap'n Crunched",
    "Boaty McSinkface",
    "Old Leaky",
];
