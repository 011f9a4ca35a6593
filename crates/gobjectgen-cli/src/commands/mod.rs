// Command handlers for gobjectgen CLI

pub mod generate;

pub use generate::GenerateCommand;

use crate::error::CliResult;

/// Trait for command handlers
pub trait Command {
    /// Execute the command
    fn execute(&self) -> CliResult<()>;
}
