//! Single-move routing: turn a target point into one thrust command,
//! steering around planets and keeping out of own ships' lanes.
//!
//! Infeasible is a normal answer here. `None` means no move this turn; the
//! caller retries from a fresh snapshot next turn.

use std::cmp::min;

use crate::hlt::collision::intersect_segment_circle;
use crate::hlt::command::Command;
use crate::hlt::constants::{ANGULAR_STEP, FUDGE, MAX_CORRECTIONS, NAV_CLEARANCE, SHIP_RADIUS};
use crate::hlt::entity::{Entity, Planet, Position, Ship};
use crate::hlt::game_map::GameMap;

use crate::bot::grid::SpatialGrid;

macro_rules! in_360 (
    ($angle:expr) => ((($angle % 360.0) + 360.0) % 360.0)
    );

pub fn navigate(
    ship: &Ship,
    target: &Position,
    map: &GameMap,
    max_speed: i32,
    friendly_grid: &SpatialGrid<Ship>,
    planet_grid: &SpatialGrid<Planet>,
) -> Option<Command> {
    correct_course(
        ship,
        *target,
        map,
        max_speed,
        friendly_grid,
        planet_grid,
        MAX_CORRECTIONS,
    )
}

fn correct_course(
    ship: &Ship,
    target: Position,
    map: &GameMap,
    max_speed: i32,
    friendly_grid: &SpatialGrid<Ship>,
    planet_grid: &SpatialGrid<Planet>,
    corrections: i32,
) -> Option<Command> {
    if corrections <= 0 {
        return None;
    }
    let distance = ship.distance_to(&target);
    let speed = min(max_speed, distance as i32);
    if speed == 0 {
        // Already on top of the target.
        return None;
    }

    let angle = match closest_blocking_planet(ship, &target, planet_grid) {
        Some(planet) => short_angle_around(
            ship.position,
            target,
            planet.position,
            planet.radius + NAV_CLEARANCE,
        ),
        None => ship.calculate_angle_between(&target),
    };

    let end = Position(
        ship.position.0 + speed as f64 * angle.to_radians().cos(),
        ship.position.1 + speed as f64 * angle.to_radians().sin(),
    );
    let crowded = friendly_grid
        .neighborhood(&ship.position)
        .iter()
        .any(|other| {
            other.id != ship.id
                && other.is_undocked()
                && intersect_segment_circle(ship, &end, *other, SHIP_RADIUS)
        });
    if crowded {
        // Swing the whole move one step around and try again.
        let rotated = in_360!(angle + ANGULAR_STEP);
        let shifted = map.clamp(Position(
            ship.position.0 + distance * rotated.to_radians().cos(),
            ship.position.1 + distance * rotated.to_radians().sin(),
        ));
        return correct_course(
            ship,
            shifted,
            map,
            max_speed,
            friendly_grid,
            planet_grid,
            corrections - 1,
        );
    }

    Some(ship.thrust(speed, (in_360!(angle).round() as i32) % 360))
}

fn closest_blocking_planet<'a>(
    ship: &Ship,
    target: &Position,
    planet_grid: &SpatialGrid<'a, Planet>,
) -> Option<&'a Planet> {
    planet_grid
        .along_segment(&ship.position, target)
        .into_iter()
        .filter(|planet| intersect_segment_circle(ship, target, *planet, SHIP_RADIUS + FUDGE))
        .min_by(|a, b| {
            ship.distance_to(*a)
                .partial_cmp(&ship.distance_to(*b))
                .unwrap()
        })
}

/// Of the two headings tangent to the obstacle's disc, the one that stays
/// closer to the direct line to the destination.
fn short_angle_around(
    start: Position,
    destination: Position,
    obstacle_pos: Position,
    obstacle_size: f64,
) -> f64 {
    let d_s_o = start.distance_to(&obstacle_pos);

    // A start inside the steering radius gets a tangent angle of zero.
    let tangent_angle = if obstacle_size > d_s_o {
        (1f64).acos()
    } else {
        (obstacle_size / d_s_o).acos()
    };
    let turn_angle = 90.0 - tangent_angle.to_degrees();

    let angle_to_dest = in_360!(
        (destination.1 - start.1)
            .atan2(destination.0 - start.0)
            .to_degrees()
    );
    let angle_to_obstacle = in_360!(
        (obstacle_pos.1 - start.1)
            .atan2(obstacle_pos.0 - start.0)
            .to_degrees()
    );

    let plus = in_360!(angle_to_obstacle + turn_angle);
    let minus = in_360!(angle_to_obstacle - turn_angle);
    if angle_between(angle_to_dest, plus) < angle_between(angle_to_dest, minus) {
        plus
    } else {
        minus
    }
}

fn angle_between(a1: f64, a2: f64) -> f64 {
    let da = (a1 - a2).abs();
    if da > 180.0 {
        360.0 - da
    } else {
        da
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hlt::constants::MAX_SPEED;
    use crate::hlt::entity::{DockingStatus, GameState};
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

    fn planet(id: i32, x: f64, y: f64, radius: f64) -> Planet {
        Planet {
            id,
            position: Position(x, y),
            hp: 2000,
            radius,
            num_docking_spots: 6,
            current_production: 0,
            remaining_resources: 900,
            owner: None,
            docked_ships: vec![],
        }
    }

    fn game() -> Game {
        Game {
            my_id: 0,
            map_width: 100,
            map_height: 100,
        }
    }

    fn empty_map(game: &Game) -> GameMap {
        GameMap::new(
            game,
            GameState {
                players: vec![Player { id: 0, ships: vec![] }],
                planets: vec![],
            },
        )
    }

    #[test]
    fn clear_path_heads_straight_at_full_speed() {
        let game = game();
        let map = empty_map(&game);
        let friendly: SpatialGrid<Ship> = SpatialGrid::new(100.0, 100.0);
        let planets: SpatialGrid<Planet> = SpatialGrid::new(100.0, 100.0);
        let s = ship(0, 10.0, 10.0);

        let command = navigate(
            &s,
            &Position(44.0, 44.0),
            &map,
            MAX_SPEED,
            &friendly,
            &planets,
        );
        assert_eq!(command, Some(Command::Thrust(0, 7, 45)));
    }

    #[test]
    fn short_hop_throttles_down() {
        let game = game();
        let map = empty_map(&game);
        let friendly: SpatialGrid<Ship> = SpatialGrid::new(100.0, 100.0);
        let planets: SpatialGrid<Planet> = SpatialGrid::new(100.0, 100.0);
        let s = ship(0, 10.0, 10.0);

        let command = navigate(&s, &Position(13.0, 10.0), &map, MAX_SPEED, &friendly, &planets);
        assert_eq!(command, Some(Command::Thrust(0, 3, 0)));
    }

    #[test]
    fn arrived_means_no_move() {
        let game = game();
        let map = empty_map(&game);
        let friendly: SpatialGrid<Ship> = SpatialGrid::new(100.0, 100.0);
        let planets: SpatialGrid<Planet> = SpatialGrid::new(100.0, 100.0);
        let s = ship(0, 10.0, 10.0);

        assert_eq!(
            navigate(&s, &Position(10.4, 10.0), &map, MAX_SPEED, &friendly, &planets),
            None
        );
    }

    #[test]
    fn blocking_planet_bends_the_course() {
        let game = game();
        let map = empty_map(&game);
        let friendly: SpatialGrid<Ship> = SpatialGrid::new(100.0, 100.0);
        let mut planets: SpatialGrid<Planet> = SpatialGrid::new(100.0, 100.0);
        let wall = planet(0, 25.0, 50.0, 5.0);
        planets.insert_footprint(&wall);
        let s = ship(0, 10.0, 50.0);

        let command = navigate(&s, &Position(40.0, 50.0), &map, MAX_SPEED, &friendly, &planets);
        match command {
            Some(Command::Thrust(_, _, angle)) => assert_ne!(angle, 0),
            other => panic!("expected a thrust, got {:?}", other),
        }
    }

    #[test]
    fn own_ship_in_the_lane_forces_a_swing() {
        let game = game();
        let map = empty_map(&game);
        let mut friendly: SpatialGrid<Ship> = SpatialGrid::new(100.0, 100.0);
        let blocker = ship(9, 17.0, 10.0);
        friendly.insert_point(&blocker);
        let planets: SpatialGrid<Planet> = SpatialGrid::new(100.0, 100.0);
        let s = ship(0, 10.0, 10.0);

        let command = navigate(&s, &Position(24.0, 10.0), &map, MAX_SPEED, &friendly, &planets);
        match command {
            Some(Command::Thrust(_, speed, angle)) => {
                assert_eq!(speed, 7);
                assert!(angle > 0 && angle < 45, "angle was {}", angle);
            }
            other => panic!("expected a thrust, got {:?}", other),
        }
    }
}
