use std::io::{stdin, stdout, Write};

use anyhow::{bail, Context, Result};

use crate::hlt::command::Command;
use crate::hlt::entity::GameState;
use crate::hlt::game_map::GameMap;
use crate::hlt::parse::Decodable;

/// Engine handshake state: our player id and the fixed map geometry. The
/// only things that survive between turns.
#[derive(Debug)]
pub struct Game {
    pub my_id: usize,
    pub map_width: i32,
    pub map_height: i32,
}

impl Game {
    fn read_line() -> Result<String> {
        let mut buffer = String::new();
        let bytes = stdin().read_line(&mut buffer).context("engine read error")?;
        if bytes == 0 {
            bail!("engine closed the game stream");
        }
        Ok(buffer)
    }

    fn read_id() -> Result<usize> {
        let line = Game::read_line()?;
        let mut tokens = line.split_whitespace();
        Ok(usize::parse(&mut tokens))
    }

    fn read_size() -> Result<(i32, i32)> {
        let line = Game::read_line()?;
        let mut tokens = line.split_whitespace();
        let width = i32::parse(&mut tokens);
        let height = i32::parse(&mut tokens);
        Ok((width, height))
    }

    fn read_snapshot(&self) -> Result<GameState> {
        let line = Game::read_line()?;
        let mut tokens = line.split_whitespace();
        Ok(GameState::parse(&mut tokens))
    }

    pub fn new(name: &str) -> Result<Game> {
        let my_id = Game::read_id()?;
        let (map_width, map_height) = Game::read_size()?;

        println!("{}", name);
        stdout().flush().context("couldn't flush bot name")?;

        let game = Game {
            my_id,
            map_width,
            map_height,
        };
        // The pre-game snapshot grants extra setup time; nothing in it is
        // kept, every turn rebuilds from its own snapshot.
        game.read_snapshot()?;
        Ok(game)
    }

    pub fn update_map(&self) -> Result<GameMap> {
        let mut state = self.read_snapshot()?;
        for player in state.players.iter_mut() {
            for ship in player.ships.iter_mut() {
                ship.owner_id = player.id;
            }
        }
        Ok(GameMap::new(self, state))
    }

    pub fn send_command_queue(&self, commands: &[Command]) -> Result<()> {
        for command in commands {
            print!("{}", command.encode());
        }
        println!();
        stdout().flush().context("couldn't flush command queue")?;
        Ok(())
    }
}
