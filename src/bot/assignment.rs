//! Ship-to-planet matching for one turn.
//!
//! The distance matrix is the dominant per-turn cost, so each ship's
//! penalty row is filled into one reused buffer instead of recomputing
//! distances inside the argmax scan.

use std::collections::HashMap;

use crate::hlt::constants::{DISTANCE_SCALE, FAR_PENALTY_MULTIPLIER, FAR_PENALTY_THRESHOLD};
use crate::hlt::entity::{Entity, Ship};

use crate::bot::valuation::PlanetScore;

/// Travel cost for one ship-planet pair: the Euclidean distance normalized
/// by the map diagonal and scaled, then doubled once it crosses the
/// out-of-reach threshold.
pub fn travel_penalty(distance: f64, max_distance: f64) -> f64 {
    let scaled = DISTANCE_SCALE * distance / max_distance;
    if scaled > FAR_PENALTY_THRESHOLD {
        scaled * FAR_PENALTY_MULTIPLIER
    } else {
        scaled
    }
}

/// Pick the best planet for every ship: argmax over planet worth minus
/// travel penalty. Ties keep the planet that appears first in the snapshot's
/// planet order. Returns ship id -> planet id.
pub fn assign_targets(
    ships: &[&Ship],
    scores: &[PlanetScore],
    width: f64,
    height: f64,
) -> HashMap<i32, i32> {
    let mut targets = HashMap::with_capacity(ships.len());
    if scores.is_empty() {
        return targets;
    }
    let max_distance = (width * width + height * height).sqrt();

    let mut penalties = vec![0.0; scores.len()];
    for ship in ships {
        for (slot, score) in penalties.iter_mut().zip(scores.iter()) {
            *slot = travel_penalty(ship.distance_to(&score.position), max_distance);
        }

        let mut best: Option<(i32, f64)> = None;
        for (score, penalty) in scores.iter().zip(penalties.iter()) {
            let net = score.value - penalty;
            match best {
                Some((_, value)) if net <= value => {}
                _ => best = Some((score.planet_id, net)),
            }
        }
        if let Some((planet_id, _)) = best {
            targets.insert(ship.id, planet_id);
        }
    }
    targets
}
