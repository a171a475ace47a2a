#![allow(dead_code)]
// Max number of units of distance a ship can travel in a turn
pub const MAX_SPEED: i32 = 7;
// Radius of a ship
pub const SHIP_RADIUS: f64 = 0.5;
// Starting health of ship, also its max
pub const MAX_SHIP_HEALTH: i32 = 255;
// Weapon cooldown period
pub const WEAPON_COOLDOWN: i32 = 1;
// Weapon damage radius
pub const WEAPON_RADIUS: f64 = 5.0;
// Weapon damage
pub const WEAPON_DAMAGE: i32 = 64;
// Radius in which explosions affect other entities
pub const EXPLOSION_RADIUS: f64 = 10.0;
// Distance from the edge of the planet at which ships can try to dock
pub const DOCK_RADIUS: f64 = 4.0;
// Number of turns it takes to dock a ship
pub const DOCK_TURNS: i32 = 5;
// Largest docking capacity the engine ever spawns a planet with
pub const MAX_DOCKING_SLOTS: i32 = 6;
// Distance from the planets edge at which new ships are created
pub const SPAWN_RADIUS: f64 = 2.0;

// CONFIGURATIONS

// Side length of one spatial-grid cell, in map units
pub const CELL_SIZE: f64 = 15.0;

// Planet worth: docking-capacity term weight
pub const DOCK_WEIGHT: f64 = 2.0;
// Planet worth: centrality term weight
pub const CENTRALITY_WEIGHT: f64 = 0.5;
// Flat markdown on planets a competitor already holds
pub const COMPETITOR_PENALTY: f64 = 1.0;

// Travel-cost scale applied to map-normalized ship-to-planet distances
pub const DISTANCE_SCALE: f64 = 2.5;
// Scaled distances past this are out of practical reach
pub const FAR_PENALTY_THRESHOLD: f64 = 0.8;
pub const FAR_PENALTY_MULTIPLIER: f64 = 2.0;

// Course corrections attempted before a move is declared infeasible
pub const MAX_CORRECTIONS: i32 = 180;
// Degrees rotated per course correction
pub const ANGULAR_STEP: f64 = 1.0;
// Extra clearance kept when steering around a planet's disc
pub const NAV_CLEARANCE: f64 = 1.0;
pub const FUDGE: f64 = 0.01;
