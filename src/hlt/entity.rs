use std::fmt;

use crate::hlt::command::Command;
use crate::hlt::constants::{DOCK_RADIUS, SHIP_RADIUS};
use crate::hlt::parse::Decodable;
use crate::hlt::player::Player;

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Position(pub f64, pub f64);

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.0, self.1)
    }
}

impl Decodable for Position {
    fn parse<'a, I>(tokens: &mut I) -> Position
    where
        I: Iterator<Item = &'a str>,
    {
        let x = f64::parse(tokens);
        let y = f64::parse(tokens);
        Position(x, y)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum DockingStatus {
    UNDOCKED = 0,
    DOCKING = 1,
    DOCKED = 2,
    UNDOCKING = 3,
}

impl Decodable for DockingStatus {
    fn parse<'a, I>(tokens: &mut I) -> DockingStatus
    where
        I: Iterator<Item = &'a str>,
    {
        let i = i32::parse(tokens);
        match i {
            0 => DockingStatus::UNDOCKED,
            1 => DockingStatus::DOCKING,
            2 => DockingStatus::DOCKED,
            3 => DockingStatus::UNDOCKING,
            _ => panic!("not a valid docking status: {}", i),
        }
    }
}

/// One ship as delivered in the turn snapshot. A plain read-only record:
/// decisions never write back into it, they only produce commands.
#[derive(Debug)]
pub struct Ship {
    pub id: i32,
    pub position: Position,
    pub hp: i32,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub docking_status: DockingStatus,
    pub docked_planet: Option<i32>,
    pub progress: i32,
    pub cooldown: i32,
    // Not on the wire; the transport stamps it from the owning player.
    pub owner_id: i32,
}

impl Ship {
    pub fn thrust(&self, magnitude: i32, angle: i32) -> Command {
        Command::Thrust(self.id, magnitude, angle)
    }

    pub fn dock(&self, planet: &Planet) -> Command {
        Command::Dock(self.id, planet.id)
    }

    #[allow(dead_code)]
    pub fn undock(&self) -> Command {
        Command::Undock(self.id)
    }

    pub fn can_dock(&self, planet: &Planet) -> bool {
        self.distance_to(planet) <= DOCK_RADIUS + planet.radius
    }

    pub fn is_undocked(&self) -> bool {
        self.docking_status == DockingStatus::UNDOCKED
    }
}

impl PartialEq for Ship {
    fn eq(&self, other: &Ship) -> bool {
        self.id == other.id
    }
}

impl Decodable for Ship {
    fn parse<'a, I>(tokens: &mut I) -> Ship
    where
        I: Iterator<Item = &'a str>,
    {
        let id = i32::parse(tokens);
        let position = Position::parse(tokens);
        let hp = i32::parse(tokens);
        let velocity_x = f64::parse(tokens);
        let velocity_y = f64::parse(tokens);
        let docking_status = DockingStatus::parse(tokens);
        let docked_planet_raw = i32::parse(tokens);
        let docked_planet = match docking_status {
            DockingStatus::UNDOCKED => None,
            _ => Some(docked_planet_raw),
        };
        let progress = i32::parse(tokens);
        let cooldown = i32::parse(tokens);

        Ship {
            id,
            position,
            hp,
            velocity_x,
            velocity_y,
            docking_status,
            docked_planet,
            progress,
            cooldown,
            owner_id: -1,
        }
    }
}

#[derive(PartialEq, Debug)]
pub struct Planet {
    pub id: i32,
    pub position: Position,
    pub hp: i32,
    pub radius: f64,
    pub num_docking_spots: i32,
    pub current_production: i32,
    pub remaining_resources: i32,
    pub owner: Option<i32>,
    pub docked_ships: Vec<i32>,
}

impl Planet {
    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    pub fn open_docks(&self) -> usize {
        self.num_docking_spots as usize - self.docked_ships.len()
    }
}

impl Decodable for Planet {
    fn parse<'a, I>(tokens: &mut I) -> Planet
    where
        I: Iterator<Item = &'a str>,
    {
        let id = i32::parse(tokens);
        let position = Position::parse(tokens);
        let hp = i32::parse(tokens);
        let radius = f64::parse(tokens);
        let num_docking_spots = i32::parse(tokens);
        let current_production = i32::parse(tokens);
        let remaining_resources = i32::parse(tokens);
        let owner = Option::parse(tokens);
        let docked_ships = Vec::parse(tokens);

        Planet {
            id,
            position,
            hp,
            radius,
            num_docking_spots,
            current_production,
            remaining_resources,
            owner,
            docked_ships,
        }
    }
}

#[derive(PartialEq, Debug)]
pub struct GameState {
    pub players: Vec<Player>,
    pub planets: Vec<Planet>,
}

impl Decodable for GameState {
    fn parse<'a, I>(tokens: &mut I) -> GameState
    where
        I: Iterator<Item = &'a str>,
    {
        let players = Vec::parse(tokens);
        let planets = Vec::parse(tokens);
        GameState { players, planets }
    }
}

pub trait Entity: Sized {
    fn get_position(&self) -> Position;
    fn get_radius(&self) -> f64;

    fn distance_to<T: Entity>(&self, target: &T) -> f64 {
        let Position(x1, y1) = self.get_position();
        let Position(x2, y2) = target.get_position();
        f64::sqrt((x2 - x1).powi(2) + (y2 - y1).powi(2))
    }

    fn calculate_angle_between<T: Entity>(&self, target: &T) -> f64 {
        let Position(x1, y1) = self.get_position();
        let Position(x2, y2) = target.get_position();
        (f64::atan2(y2 - y1, x2 - x1).to_degrees() + 360.0) % 360.0
    }

    /// The point `min_distance` off the target's surface, on the segment
    /// between the two entities.
    fn closest_point_to<T: Entity>(&self, target: &T, min_distance: f64) -> Position {
        let angle = target.calculate_angle_between(self);
        let radius = target.get_radius() + min_distance;
        let Position(target_x, target_y) = target.get_position();
        let x = target_x + radius * f64::cos(angle.to_radians());
        let y = target_y + radius * f64::sin(angle.to_radians());

        Position(x, y)
    }
}

impl Entity for Ship {
    fn get_position(&self) -> Position {
        self.position
    }

    fn get_radius(&self) -> f64 {
        SHIP_RADIUS
    }
}

impl Entity for Planet {
    fn get_position(&self) -> Position {
        self.position
    }

    fn get_radius(&self) -> f64 {
        self.radius
    }
}

impl Entity for Position {
    fn get_position(&self) -> Position {
        *self
    }

    fn get_radius(&self) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship_at(x: f64, y: f64) -> Ship {
        Ship {
            id: 0,
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

    fn planet_at(x: f64, y: f64, radius: f64) -> Planet {
        Planet {
            id: 0,
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

    #[test]
    fn dock_range_includes_planet_radius() {
        let planet = planet_at(50.0, 50.0, 5.0);
        assert!(ship_at(41.0, 50.0).can_dock(&planet));
        assert!(!ship_at(40.9, 50.0).can_dock(&planet));
    }

    #[test]
    fn closest_point_stands_off_the_surface() {
        let ship = ship_at(10.0, 50.0);
        let planet = planet_at(50.0, 50.0, 5.0);
        let point = ship.closest_point_to(&planet, 3.0);
        assert!((point.0 - 42.0).abs() < 1e-9);
        assert!((point.1 - 50.0).abs() < 1e-9);
    }

    #[test]
    fn open_docks_subtracts_docked_ships() {
        let mut planet = planet_at(0.0, 0.0, 5.0);
        planet.docked_ships = vec![4, 9];
        assert_eq!(planet.open_docks(), 4);
    }

    #[test]
    fn ship_parse_reads_the_wire_layout() {
        let mut tokens = "3 12.5 30.0 255 0.0 0.0 2 1 4 0".split_whitespace();
        let ship = Ship::parse(&mut tokens);
        assert_eq!(ship.id, 3);
        assert_eq!(ship.position, Position(12.5, 30.0));
        assert_eq!(ship.docking_status, DockingStatus::DOCKED);
        assert_eq!(ship.docked_planet, Some(1));
        assert!(tokens.next().is_none());
    }

    #[test]
    fn planet_parse_reads_owner_and_docked_list() {
        let mut tokens = "5 50.0 50.0 2000 5.0 6 0 900 1 2 2 7 8".split_whitespace();
        let planet = Planet::parse(&mut tokens);
        assert_eq!(planet.id, 5);
        assert_eq!(planet.owner, Some(2));
        assert_eq!(planet.docked_ships, vec![7, 8]);
        assert!(tokens.next().is_none());
    }
}
