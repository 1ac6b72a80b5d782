//! CommandBuilder - staging object assembling a [`Command`].
//!
//! Every facet may be set at most once. Each call consumes the builder and
//! hands it back on success, so a rejected call leaves nothing half-applied.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use dcommander::domain::argument::{number, string};
//! use dcommander::domain::command::command;
//! use dcommander::domain::foundation::ConfigurationError;
//!
//! fn define() -> Result<(), ConfigurationError> {
//!     let purge = command("purge")
//!         .execute(|instructions| {
//!             let _count = instructions.arguments.number("count");
//!         })?
//!         .arguments(vec![number("count"), string("reason").optional().default("cleanup")])?
//!         .cooldown(Duration::from_secs(10))?
//!         .can_execute(|invoker| invoker.has_role("moderator"))?
//!         .prefix("?")?
//!         .build()?;
//!
//!     assert_eq!(purge.arguments().len(), 2);
//!     Ok(())
//! }
//!
//! define().unwrap();
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::{Command, CommandInstructions, Execution, ExecutionGuard};
use crate::domain::argument::{ArgumentSchema, ArgumentSchemaBuilder};
use crate::domain::foundation::{CommandFacet, ConfigurationError, Cooldown, Invoker};

/// Accumulates the facets of one command until [`build`](Self::build).
pub struct CommandBuilder {
    name: String,
    execution: Option<Execution>,
    arguments: Option<Vec<ArgumentSchema>>,
    cooldown: Option<Cooldown>,
    can_execute: Option<ExecutionGuard>,
    prefix: Option<String>,
}

impl CommandBuilder {
    /// Starts a command definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            execution: None,
            arguments: None,
            cooldown: None,
            can_execute: None,
            prefix: None,
        }
    }

    /// Returns the command name as declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if `facet` has already been set.
    pub fn is_set(&self, facet: CommandFacet) -> bool {
        match facet {
            CommandFacet::Execution => self.execution.is_some(),
            CommandFacet::Arguments => self.arguments.is_some(),
            CommandFacet::Cooldown => self.cooldown.is_some(),
            CommandFacet::CanExecute => self.can_execute.is_some(),
            CommandFacet::Prefix => self.prefix.is_some(),
        }
    }

    /// Sets the handler run on invocation.
    pub fn execute<F>(mut self, handler: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&CommandInstructions) + Send + Sync + 'static,
    {
        self.ensure_unset(CommandFacet::Execution)?;
        self.execution = Some(Arc::new(handler));
        Ok(self)
    }

    /// Builds and stores the full, ordered argument list.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if any schema fails to build
    /// - `DuplicateArgument` if two arguments share a name (case-sensitive)
    /// - `FacetAlreadySet` if arguments were already declared
    pub fn arguments<I>(mut self, builders: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = ArgumentSchemaBuilder>,
    {
        let built = builders
            .into_iter()
            .map(ArgumentSchemaBuilder::build)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| {
                self.reject(ConfigurationError::InvalidArgument {
                    command: self.name.clone(),
                    source,
                })
            })?;

        if let Some(duplicate) = first_duplicate(&built) {
            return Err(self.reject(ConfigurationError::DuplicateArgument {
                command: self.name.clone(),
                argument: duplicate.to_string(),
            }));
        }

        self.ensure_unset(CommandFacet::Arguments)?;
        self.arguments = Some(built);
        Ok(self)
    }

    /// Sets the minimum time between invocations.
    ///
    /// # Errors
    ///
    /// `InvalidCooldown` for a zero duration, `FacetAlreadySet` on a second call.
    pub fn cooldown(mut self, duration: Duration) -> Result<Self, ConfigurationError> {
        self.ensure_unset(CommandFacet::Cooldown)?;
        let cooldown = Cooldown::try_new(duration).map_err(|source| {
            self.reject(ConfigurationError::InvalidCooldown {
                command: self.name.clone(),
                source,
            })
        })?;
        self.cooldown = Some(cooldown);
        Ok(self)
    }

    /// Sets the permission predicate evaluated against the invoker.
    pub fn can_execute<P>(mut self, predicate: P) -> Result<Self, ConfigurationError>
    where
        P: Fn(&Invoker) -> bool + Send + Sync + 'static,
    {
        self.ensure_unset(CommandFacet::CanExecute)?;
        self.can_execute = Some(Arc::new(predicate));
        Ok(self)
    }

    /// Overrides the registry's default prefix for this command.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Result<Self, ConfigurationError> {
        self.ensure_unset(CommandFacet::Prefix)?;
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(self.reject(ConfigurationError::EmptyPrefix {
                command: self.name.clone(),
            }));
        }
        self.prefix = Some(prefix);
        Ok(self)
    }

    /// Finalizes the definition.
    ///
    /// # Errors
    ///
    /// `EmptyCommandName` for a blank name, `MissingExecution` if no handler was set.
    pub fn build(self) -> Result<Command, ConfigurationError> {
        if self.name.trim().is_empty() {
            return Err(self.reject(ConfigurationError::EmptyCommandName));
        }

        let Some(execution) = self.execution.clone() else {
            return Err(self.reject(ConfigurationError::MissingExecution {
                command: self.name.clone(),
            }));
        };

        tracing::debug!(
            command = %self.name,
            arguments = self.arguments.as_ref().map_or(0, Vec::len),
            cooldown = ?self.cooldown,
            prefix = ?self.prefix,
            permission_check = self.can_execute.is_some(),
            "command built"
        );

        Ok(Command {
            name: self.name,
            execution,
            arguments: self.arguments,
            cooldown: self.cooldown,
            can_execute: self.can_execute,
            prefix: self.prefix,
        })
    }

    fn ensure_unset(&self, facet: CommandFacet) -> Result<(), ConfigurationError> {
        if self.is_set(facet) {
            return Err(self.reject(ConfigurationError::already_set(&self.name, facet)));
        }
        Ok(())
    }

    fn reject(&self, error: ConfigurationError) -> ConfigurationError {
        tracing::debug!(command = %self.name, error = %error, "command configuration rejected");
        error
    }
}

impl fmt::Debug for CommandBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set: Vec<_> = CommandFacet::all()
            .iter()
            .filter(|facet| self.is_set(**facet))
            .collect();
        f.debug_struct("CommandBuilder")
            .field("name", &self.name)
            .field("set", &set)
            .finish_non_exhaustive()
    }
}

fn first_duplicate(schemas: &[ArgumentSchema]) -> Option<&str> {
    let mut seen = HashSet::new();
    schemas
        .iter()
        .map(ArgumentSchema::name)
        .find(|name| !seen.insert(*name))
}

/// Starts a command definition named `name`.
pub fn command(name: impl Into<String>) -> CommandBuilder {
    CommandBuilder::new(name)
}
