//! AppCommand- und CommandOutcome-Enums für den Command-Datenfluss.

mod command;
mod outcome;

pub use command::AppCommand;
pub use outcome::CommandOutcome;
