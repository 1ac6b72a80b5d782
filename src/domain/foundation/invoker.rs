//! Identity of whoever invokes a command.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::ValidationError;

/// Platform identifier of an invoking user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvokerId(String);

impl InvokerId {
    /// Creates a new InvokerId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("invoker_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvokerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The user a command is being invoked on behalf of.
///
/// Handed opaquely to a command's `can_execute` predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoker {
    id: InvokerId,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    roles: BTreeSet<String>,
}

impl Invoker {
    /// Creates an invoker without any roles.
    pub fn new(id: InvokerId) -> Self {
        Self {
            id,
            roles: BTreeSet::new(),
        }
    }

    /// Builder: Add a role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    /// Returns the invoker id.
    pub fn id(&self) -> &InvokerId {
        &self.id
    }

    /// Returns true if the invoker holds `role`.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Returns the invoker's roles in sorted order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }
}

#[cfg(test)]
impl Invoker {
    /// Creates a test fixture with a fixed id and no roles.
    ///
    /// Only available in test builds.
    pub fn test_fixture() -> Self {
        Self::new(InvokerId::new("test-invoker-123").unwrap())
    }
}
