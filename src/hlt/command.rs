/// A single engine instruction for one ship. Each ship contributes at most
/// one command per turn; the whole queue is emitted as one stdout line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Thrust(ship id, speed, angle in whole degrees).
    Thrust(i32, i32, i32),
    /// Dock(ship id, planet id).
    Dock(i32, i32),
    Undock(i32),
}

impl Command {
    pub fn encode(&self) -> String {
        match *self {
            Command::Thrust(ship, speed, angle) => format!("t {} {} {} ", ship, speed, angle),
            Command::Dock(ship, planet) => format!("d {} {} ", ship, planet),
            Command::Undock(ship) => format!("u {} ", ship),
        }
    }
}
