use std::fs::{File, OpenOptions};
use std::io::Write;

use anyhow::{Context, Result};
use time::OffsetDateTime;

/// Append-mode file logger. Stdout belongs to the engine protocol, so every
/// diagnostic line goes to `log_<player id>.txt` in the working directory.
pub struct Logger(File);

impl Logger {
    pub fn new(user_id: usize) -> Result<Logger> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(format!("log_{}.txt", user_id))
            .context("couldn't open file for logging")?;
        Ok(Logger(file))
    }

    pub fn log(&mut self, message: &str) -> Result<()> {
        writeln!(self.0, "[{}] {}", OffsetDateTime::now_utc(), message)
            .context("couldn't write to log")?;
        Ok(())
    }
}
