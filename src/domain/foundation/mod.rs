//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of command definitions.

mod command_facet;
mod cooldown;
mod errors;
mod invoker;

pub use command_facet::CommandFacet;
pub use cooldown::Cooldown;
pub use errors::{ConfigurationError, ConversionError, ErrorCode, SchemaError, ValidationError};
pub use invoker::{Invoker, InvokerId};
