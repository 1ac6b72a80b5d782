//! CommandFacet enum naming the optional, set-once parts of a command.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The settable facets of a command definition.
///
/// Each facet moves from unset to set at most once while a command is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandFacet {
    Execution,
    Arguments,
    Cooldown,
    CanExecute,
    Prefix,
}

impl CommandFacet {
    /// Returns all facets in declaration order.
    pub fn all() -> &'static [CommandFacet] {
        &[
            CommandFacet::Execution,
            CommandFacet::Arguments,
            CommandFacet::Cooldown,
            CommandFacet::CanExecute,
            CommandFacet::Prefix,
        ]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            CommandFacet::Execution => "execution function",
            CommandFacet::Arguments => "argument list",
            CommandFacet::Cooldown => "cooldown",
            CommandFacet::CanExecute => "can_execute function",
            CommandFacet::Prefix => "prefix",
        }
    }
}

impl fmt::Display for CommandFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_5_facets() {
        assert_eq!(CommandFacet::all().len(), 5);
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&CommandFacet::CanExecute).unwrap();
        assert_eq!(json, "\"can_execute\"");
    }

    #[test]
    fn displays_readable_name() {
        assert_eq!(format!("{}", CommandFacet::Arguments), "argument list");
    }
}
