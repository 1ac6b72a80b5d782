//! Command module - building and holding command definitions.
//!
//! - `CommandBuilder` / `command()` - set-once staging of command facets
//! - `Command` - the immutable result handed to a registry
//! - `CommandInstructions` - what the execution handler receives

mod builder;
mod definition;
mod instructions;

pub use builder::{command, CommandBuilder};
pub use definition::{Command, Execution, ExecutionGuard};
pub use instructions::{ArgumentValues, CommandInstructions};
