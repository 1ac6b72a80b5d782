//! Command - immutable, validated definition of a text command.

use std::fmt;
use std::sync::Arc;

use super::CommandInstructions;
use crate::domain::argument::ArgumentSchema;
use crate::domain::foundation::{Cooldown, Invoker};

/// Handler run when a command is invoked.
pub type Execution = Arc<dyn Fn(&CommandInstructions) + Send + Sync>;

/// Predicate deciding whether an invoker may run a command.
pub type ExecutionGuard = Arc<dyn Fn(&Invoker) -> bool + Send + Sync>;

/// A fully validated command definition.
///
/// Produced only by [`CommandBuilder::build`](super::CommandBuilder::build).
/// Immutable afterwards and cheap to clone; handlers are shared.
/// Absent facets fall back to registry defaults, see
/// [`CommanderConfig`](crate::config::CommanderConfig).
#[derive(Clone)]
pub struct Command {
    pub(super) name: String,
    pub(super) execution: Execution,
    pub(super) arguments: Option<Vec<ArgumentSchema>>,
    pub(super) cooldown: Option<Cooldown>,
    pub(super) can_execute: Option<ExecutionGuard>,
    pub(super) prefix: Option<String>,
}

impl Command {
    /// Returns the command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared arguments in order (empty when none were declared).
    pub fn arguments(&self) -> &[ArgumentSchema] {
        self.arguments.as_deref().unwrap_or(&[])
    }

    /// Looks up a declared argument by exact name.
    pub fn argument(&self, name: &str) -> Option<&ArgumentSchema> {
        self.arguments().iter().find(|a| a.name() == name)
    }

    /// Returns the command's own cooldown, if set.
    pub fn cooldown(&self) -> Option<Cooldown> {
        self.cooldown
    }

    /// Returns the command's own prefix, if set.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Returns true if a `can_execute` predicate was set.
    pub fn has_permission_check(&self) -> bool {
        self.can_execute.is_some()
    }

    /// Returns true if `invoker` may run this command.
    ///
    /// Commands without a predicate allow everyone.
    pub fn can_execute(&self, invoker: &Invoker) -> bool {
        let allowed = self
            .can_execute
            .as_ref()
            .map_or(true, |predicate| predicate(invoker));
        if !allowed {
            tracing::debug!(command = %self.name, invoker = %invoker.id(), "invoker denied");
        }
        allowed
    }

    /// Runs the execution handler.
    pub fn execute(&self, instructions: &CommandInstructions) {
        tracing::debug!(
            command = %self.name,
            invoker = %instructions.invoker.id(),
            arguments = instructions.arguments.len(),
            "executing command"
        );
        (self.execution)(instructions)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("arguments", &self.arguments)
            .field("cooldown", &self.cooldown)
            .field("can_execute", &self.can_execute.as_ref().map(|_| "<predicate>"))
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}
