//! One full decision pass over a snapshot.
//!
//! Everything a turn needs (the three spatial indexes, scores,
//! assignments) is built here from the snapshot and dropped at the end.
//! No decision state survives into the next turn.

use crate::hlt::command::Command;
use crate::hlt::constants::{MAX_SPEED, WEAPON_RADIUS};
use crate::hlt::entity::{Entity, Planet, Ship};
use crate::hlt::game_map::GameMap;

use crate::bot::grid::SpatialGrid;
use crate::bot::navigation::navigate;
use crate::bot::strategy::PlanetTargetingStrategy;

pub struct TurnContext<'a> {
    pub planet_grid: SpatialGrid<'a, Planet>,
    pub friendly_grid: SpatialGrid<'a, Ship>,
    pub enemy_grid: SpatialGrid<'a, Ship>,
}

impl<'a> TurnContext<'a> {
    pub fn new(map: &'a GameMap) -> TurnContext<'a> {
        let (width, height) = (map.width(), map.height());
        let mut planet_grid = SpatialGrid::new(width, height);
        for planet in map.all_planets() {
            planet_grid.insert_footprint(planet);
        }
        let mut friendly_grid = SpatialGrid::new(width, height);
        for ship in map.my_ships() {
            friendly_grid.insert_point(ship);
        }
        let mut enemy_grid = SpatialGrid::new(width, height);
        for ship in map.enemy_ships() {
            enemy_grid.insert_point(ship);
        }
        TurnContext {
            planet_grid,
            friendly_grid,
            enemy_grid,
        }
    }
}

/// Decide this turn's commands. At most one command per undocked ship;
/// ships whose move turns out infeasible contribute nothing and get looked
/// at fresh next turn.
pub fn run_turn(map: &GameMap, strategy: &dyn PlanetTargetingStrategy) -> Vec<Command> {
    let ships = map.all_undocked_ships();
    if ships.is_empty() {
        return Vec::new();
    }

    let ctx = TurnContext::new(map);
    let targets = strategy.assign(map, &ships);

    let mut commands = Vec::new();
    for &ship in &ships {
        let planet = match targets.get(&ship.id).and_then(|id| map.get_planet(*id)) {
            Some(planet) => planet,
            None => continue,
        };
        let mine = planet.owner == Some(map.my_id());

        if planet.owner.is_none() || (mine && planet.open_docks() > 0) {
            // Never start the multi-turn dock sequence with an enemy in
            // the ship's cell.
            if ship.can_dock(planet) && ctx.enemy_grid.cell_at(&ship.position).is_empty() {
                commands.push(ship.dock(planet));
            } else {
                let approach = ship.closest_point_to(planet, 3.0);
                if let Some(command) = navigate(
                    ship,
                    &approach,
                    map,
                    MAX_SPEED,
                    &ctx.friendly_grid,
                    &ctx.planet_grid,
                ) {
                    commands.push(command);
                }
            }
        } else if !mine {
            // Contested planet: go for whatever is sitting in its docks.
            let victim = planet
                .docked_ships
                .first()
                .and_then(|id| map.get_ship(*id));
            if let Some(victim) = victim {
                let approach = ship.closest_point_to(victim, WEAPON_RADIUS);
                if let Some(command) = navigate(
                    ship,
                    &approach,
                    map,
                    MAX_SPEED,
                    &ctx.friendly_grid,
                    &ctx.planet_grid,
                ) {
                    commands.push(command);
                }
            }
        }
        // Own planet with no room left: nothing useful to do there.
    }
    commands
}
