//! Planet targeting modes.
//!
//! Two deliberately separate behaviors behind one interface: the scored
//! matrix pass used in normal play, and the older closest-dockable pick it
//! grew out of. Which one runs is chosen once at startup.

use std::collections::HashMap;

use crate::hlt::entity::{Entity, Planet, Ship};
use crate::hlt::game_map::GameMap;

use crate::bot::assignment::assign_targets;
use crate::bot::valuation::score_planets;

/// Chooses one target planet per undocked ship. Returns ship id ->
/// planet id; a ship absent from the map has no target this turn.
pub trait PlanetTargetingStrategy {
    fn assign(&self, map: &GameMap, ships: &[&Ship]) -> HashMap<i32, i32>;

    fn name(&self) -> &'static str;
}

/// Primary mode: worth every planet, charge every ship its travel penalty,
/// take the argmax per ship.
pub struct GlobalScoring;

impl PlanetTargetingStrategy for GlobalScoring {
    fn assign(&self, map: &GameMap, ships: &[&Ship]) -> HashMap<i32, i32> {
        if ships.is_empty() {
            return HashMap::new();
        }
        let scores = score_planets(map);
        assign_targets(ships, &scores, map.width(), map.height())
    }

    fn name(&self) -> &'static str {
        "scored"
    }
}

/// Simple mode: every ship heads for its nearest dockable planet with an
/// open slot. When a single such planet is left on the whole map and more
/// than one of our ships is loose, nobody goes: the slot can only take one
/// ship and the rest would pile up on it.
pub struct ClosestDockable;

impl PlanetTargetingStrategy for ClosestDockable {
    fn assign(&self, map: &GameMap, ships: &[&Ship]) -> HashMap<i32, i32> {
        let mut targets = HashMap::new();
        let open: Vec<&Planet> = map
            .dockable_planets()
            .into_iter()
            .filter(|p| p.open_docks() > 0)
            .collect();
        if open.len() == 1 && ships.len() > 1 {
            return targets;
        }
        for ship in ships {
            let closest = open.iter().min_by(|a, b| {
                ship.distance_to(**a)
                    .partial_cmp(&ship.distance_to(**b))
                    .unwrap()
            });
            if let Some(planet) = closest {
                targets.insert(ship.id, planet.id);
            }
        }
        targets
    }

    fn name(&self) -> &'static str {
        "closest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hlt::entity::{DockingStatus, GameState, Position};
    use crate::hlt::game::Game;
    use crate::hlt::player::Player;

    fn ship(id: i32, x: f64, y: f64) -> Ship {
        Ship {
            id,
            position: Position(x, y),
            hp: 255,
            velocity_x: 0.0,
            velocity_y: 0.0,
            docking_status: DockingStatus::UNDOCKED,
            docked_planet: None,
            progress: 0,
            cooldown: 0,
            owner_id: 0,
        }
    }

    fn planet(id: i32, x: f64, y: f64, owner: Option<i32>, spots: i32, docked: Vec<i32>) -> Planet {
        Planet {
            id,
            position: Position(x, y),
            hp: 2000,
            radius: 5.0,
            num_docking_spots: spots,
            current_production: 0,
            remaining_resources: 900,
            owner,
            docked_ships: docked,
        }
    }

    fn game() -> Game {
        Game {
            my_id: 0,
            map_width: 100,
            map_height: 100,
        }
    }

    fn map_with<'a>(game: &'a Game, planets: Vec<Planet>) -> GameMap<'a> {
        GameMap::new(
            game,
            GameState {
                players: vec![
                    Player { id: 0, ships: vec![] },
                    Player { id: 1, ships: vec![] },
                ],
                planets,
            },
        )
    }

    #[test]
    fn closest_mode_targets_the_nearest_open_planet() {
        let game = game();
        let map = map_with(
            &game,
            vec![
                planet(0, 90.0, 90.0, None, 6, vec![]),
                planet(1, 25.0, 20.0, None, 6, vec![]),
            ],
        );
        let s = ship(0, 10.0, 10.0);
        let ships = [&s];
        let targets = ClosestDockable.assign(&map, &ships);
        assert_eq!(targets.get(&0), Some(&1));
    }

    #[test]
    fn closest_mode_abstains_from_the_last_open_slot() {
        let game = game();
        let map = map_with(&game, vec![planet(0, 50.0, 50.0, None, 6, vec![])]);
        let a = ship(0, 10.0, 10.0);
        let b = ship(1, 90.0, 90.0);
        let ships = [&a, &b];
        assert!(ClosestDockable.assign(&map, &ships).is_empty());
    }

    #[test]
    fn lone_ship_still_takes_the_last_planet() {
        let game = game();
        let map = map_with(&game, vec![planet(0, 50.0, 50.0, None, 6, vec![])]);
        let a = ship(0, 10.0, 10.0);
        let ships = [&a];
        let targets = ClosestDockable.assign(&map, &ships);
        assert_eq!(targets.get(&0), Some(&0));
    }

    #[test]
    fn closest_mode_skips_full_and_enemy_planets() {
        let game = game();
        let map = map_with(
            &game,
            vec![
                planet(0, 20.0, 20.0, Some(1), 6, vec![]),
                planet(1, 30.0, 30.0, Some(0), 1, vec![9]),
                planet(2, 80.0, 80.0, None, 6, vec![]),
            ],
        );
        let s = ship(0, 10.0, 10.0);
        let ships = [&s];
        let targets = ClosestDockable.assign(&map, &ships);
        assert_eq!(targets.get(&0), Some(&2));
    }

    #[test]
    fn scored_mode_covers_every_undocked_ship() {
        let game = game();
        let map = map_with(
            &game,
            vec![
                planet(0, 30.0, 30.0, None, 6, vec![]),
                planet(1, 70.0, 70.0, Some(1), 4, vec![8]),
            ],
        );
        let a = ship(0, 10.0, 10.0);
        let b = ship(1, 90.0, 90.0);
        let ships = [&a, &b];
        let targets = GlobalScoring.assign(&map, &ships);
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn scored_mode_idles_with_no_ships() {
        let game = game();
        let map = map_with(&game, vec![planet(0, 30.0, 30.0, None, 6, vec![])]);
        assert!(GlobalScoring.assign(&map, &[]).is_empty());
    }
}
