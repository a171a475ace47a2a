use crate::hlt::entity::{GameState, Planet, Position, Ship};
use crate::hlt::game::Game;
use crate::hlt::player::Player;

/// Read-only view over one turn's authoritative snapshot. Everything the
/// decision core consumes goes through these queries; nothing here mutates
/// the underlying state.
pub struct GameMap<'a> {
    game: &'a Game,
    pub state: GameState,
}

impl<'a> GameMap<'a> {
    pub fn new(game: &Game, state: GameState) -> GameMap {
        GameMap { game, state }
    }

    pub fn my_id(&self) -> i32 {
        self.game.my_id as i32
    }

    pub fn width(&self) -> f64 {
        self.game.map_width as f64
    }

    pub fn height(&self) -> f64 {
        self.game.map_height as f64
    }

    pub fn all_planets(&self) -> &[Planet] {
        &self.state.planets
    }

    pub fn get_planet(&self, planet_id: i32) -> Option<&Planet> {
        self.state.planets.iter().find(|p| p.id == planet_id)
    }

    pub fn get_ship(&self, ship_id: i32) -> Option<&Ship> {
        self.state
            .players
            .iter()
            .flat_map(|p| p.all_ships())
            .find(|s| s.id == ship_id)
    }

    pub fn get_me(&self) -> &Player {
        &self.state.players[self.game.my_id]
    }

    pub fn my_ships(&self) -> Vec<&Ship> {
        self.get_me().all_ships().iter().collect()
    }

    pub fn enemy_ships(&self) -> Vec<&Ship> {
        self.state
            .players
            .iter()
            .filter(|p| p.id != self.my_id())
            .flat_map(|p| p.all_ships())
            .collect()
    }

    /// Own ships that can take an order this turn.
    pub fn all_undocked_ships(&self) -> Vec<&Ship> {
        self.get_me()
            .all_ships()
            .iter()
            .filter(|s| s.is_undocked())
            .collect()
    }

    /// Planets worth sending settlers at: unowned, or ours with a free slot.
    pub fn dockable_planets(&self) -> Vec<&Planet> {
        self.state
            .planets
            .iter()
            .filter(|p| !p.is_owned() || (p.owner == Some(self.my_id()) && p.open_docks() > 0))
            .collect()
    }

    pub fn competitor_owned_planets(&self) -> Vec<&Planet> {
        self.state
            .planets
            .iter()
            .filter(|p| p.is_owned() && p.owner != Some(self.my_id()))
            .collect()
    }

    pub fn clamp(&self, position: Position) -> Position {
        Position(
            position.0.clamp(0.0, self.width()),
            position.1.clamp(0.0, self.height()),
        )
    }
}
