mod bot;
mod hlt;

use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use bot::strategy::{ClosestDockable, GlobalScoring, PlanetTargetingStrategy};
use bot::turn::run_turn;
use hlt::game::Game;
use hlt::logging::Logger;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum TargetingMode {
    /// Planet worth minus per-ship travel penalty, argmax per ship.
    Scored,
    /// Nearest dockable planet with an open slot.
    Closest,
}

#[derive(Parser, Debug)]
#[command(about = "Halite II bot")]
struct Args {
    /// Name reported to the engine.
    #[arg(long, default_value = "gridseer")]
    name: String,

    /// Planet targeting mode.
    #[arg(long, value_enum, default_value_t = TargetingMode::Scored)]
    targeting: TargetingMode,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let strategy: Box<dyn PlanetTargetingStrategy> = match args.targeting {
        TargetingMode::Scored => Box::new(GlobalScoring),
        TargetingMode::Closest => Box::new(ClosestDockable),
    };

    let game = Game::new(&args.name)?;
    let mut logger = Logger::new(game.my_id)?;
    logger.log(&format!(
        "starting {} with {} targeting",
        args.name,
        strategy.name()
    ))?;

    let mut turn_number: usize = 0;
    loop {
        let game_map = game.update_map()?;
        let turn_start = Instant::now();
        turn_number += 1;

        let commands = run_turn(&game_map, strategy.as_ref());

        logger.log(&format!(
            "turn {}: {} undocked ships, {} commands",
            turn_number,
            game_map.all_undocked_ships().len(),
            commands.len()
        ))?;
        for command in &commands {
            logger.log(&format!("  {}", command.encode()))?;
        }
        game.send_command_queue(&commands)?;
        logger.log(&format!("  turn time: {:?}", turn_start.elapsed()))?;
    }
}
