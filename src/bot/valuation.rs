//! Per-planet worth, recomputed from scratch every turn.

use crate::hlt::constants::{
    CENTRALITY_WEIGHT, COMPETITOR_PENALTY, DOCK_WEIGHT, MAX_DOCKING_SLOTS,
};
use crate::hlt::entity::{Entity, Planet, Position};
use crate::hlt::game_map::GameMap;

/// One scored planet: id, position, and its worth before any travel cost.
/// Consumed by the assignment pass within the same turn and dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetScore {
    pub planet_id: i32,
    pub position: Position,
    pub value: f64,
}

fn intrinsic_value(planet: &Planet, width: f64, height: f64) -> f64 {
    let capacity = DOCK_WEIGHT * planet.num_docking_spots as f64 / MAX_DOCKING_SLOTS as f64;
    // Worth falls off with distance from the heart of the map, normalized
    // by the farthest any planet can sit from it (a corner).
    let heart = Position(width / 2.0, height / 2.0);
    let max_heart_distance = (width * width + height * height).sqrt() / 2.0;
    let centrality = CENTRALITY_WEIGHT * (1.0 - planet.distance_to(&heart) / max_heart_distance);
    capacity + centrality
}

/// Score every planet in the snapshot. Deterministic in the snapshot and
/// independent of any ship position.
pub fn score_planets(map: &GameMap) -> Vec<PlanetScore> {
    let (width, height) = (map.width(), map.height());
    let me = map.my_id();
    map.all_planets()
        .iter()
        .map(|planet| {
            let intrinsic = intrinsic_value(planet, width, height);
            let value = match planet.owner {
                // A full planet of ours produces nothing extra for new arrivals.
                Some(owner) if owner == me && planet.open_docks() == 0 => 0.0,
                Some(owner) if owner != me => intrinsic - COMPETITOR_PENALTY,
                _ => intrinsic,
            };
            PlanetScore {
                planet_id: planet.id,
                position: planet.position,
                value,
            }
        })
        .collect()
}
